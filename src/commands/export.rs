use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        task::{Priority, Status, TaskFilter, TaskSort},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file path (defaults to tasks_<date>.<ext> in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Only tasks with this status
    #[arg(long, value_enum)]
    status: Option<Status>,
    /// Only tasks with this priority
    #[arg(long, value_enum)]
    priority: Option<Priority>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let filter = TaskFilter {
        status: args.status,
        priority: args.priority,
        ..Default::default()
    };

    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;
    let found = tasks.list(&filter, TaskSort::default(), None)?;

    if found.is_empty() {
        msg_info!(Message::NoTasksToExport);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(&found)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
