use crate::{
    db::tasks::Tasks,
    libs::{config::Config, view::View},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Task id
    id: i64,
}

pub fn cmd(args: GetArgs) -> Result<()> {
    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;

    let task = tasks.get(args.id)?;
    View::task(&task)?;

    Ok(())
}
