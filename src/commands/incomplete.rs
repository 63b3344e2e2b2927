use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, task::Status},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct IncompleteArgs {
    /// Task id
    id: i64,
}

pub fn cmd(args: IncompleteArgs) -> Result<()> {
    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;

    let task = tasks.get(args.id)?;
    if task.status != Status::Done {
        msg_warning!(Message::TaskNotDone(args.id));
        return Ok(());
    }

    tasks.set_status(args.id, Status::Todo)?;
    msg_success!(Message::TaskReopened(args.id));

    Ok(())
}
