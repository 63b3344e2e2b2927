use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;

    // Fetch first so a missing id fails before any prompt
    let task = tasks.get(args.id)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    tasks.delete(args.id)?;
    msg_success!(Message::TaskDeleted(args.id));

    Ok(())
}
