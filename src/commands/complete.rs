use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, task::Status},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task id
    id: i64,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;

    let task = tasks.get(args.id)?;
    if task.status == Status::Done {
        msg_warning!(Message::TaskAlreadyDone(args.id));
        return Ok(());
    }

    tasks.set_status(args.id, Status::Done)?;
    msg_success!(Message::TaskCompleted(args.id));

    Ok(())
}
