use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{parse_due_date, Priority, Status, TaskPatch},
        view::View,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Task id
    id: i64,
    /// New title
    #[arg(long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New status
    #[arg(short, long, value_enum)]
    status: Option<Status>,
    /// New priority
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
    /// New due date in YYYY-MM-DD format; pass an empty string to clear it
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let patch = TaskPatch {
        title: args.title,
        description: args.description,
        priority: args.priority,
        status: args.status,
        due_date: args.due.as_deref().map(parse_due_date).transpose()?,
    };

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;
    let updated = tasks.update(args.id, &patch)?;

    msg_success!(Message::TaskUpdated(args.id));
    View::task(&updated)?;

    Ok(())
}
