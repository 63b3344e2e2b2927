pub mod add;
pub mod complete;
pub mod delete;
pub mod export;
pub mod get;
pub mod incomplete;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod search;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a new task")]
    Add(add::AddArgs),
    #[command(about = "Show a single task")]
    Get(get::GetArgs),
    #[command(about = "Update task fields")]
    Update(update::UpdateArgs),
    #[command(about = "Mark a task as done")]
    Complete(complete::CompleteArgs),
    #[command(about = "Mark a done task as todo again")]
    Incomplete(incomplete::IncompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "List tasks with optional filters and sorting")]
    List(list::ListArgs),
    #[command(about = "Search tasks by title and description")]
    Search(search::SearchArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database schema migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::Get(args) => get::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Incomplete(args) => incomplete::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Init(args) => init::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
