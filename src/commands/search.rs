use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{TaskFilter, TaskSort},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in titles and descriptions (case-insensitive)
    #[arg(required = true)]
    query: String,
    /// Show at most this many tasks
    #[arg(long)]
    limit: Option<u32>,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let filter = TaskFilter {
        search: Some(args.query),
        ..Default::default()
    };

    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;
    let found = tasks.list(&filter, TaskSort::default(), args.limit)?;

    if found.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&found)?;
    msg_print!(Message::TasksTotal(found.len()));

    Ok(())
}
