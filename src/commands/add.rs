use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{parse_date_arg, Priority, Task},
        view::View,
    },
    msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Longer free-form description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Task priority
    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    priority: Priority,
    /// Due date in YYYY-MM-DD format
    #[arg(long, value_parser = parse_date_arg)]
    due: Option<NaiveDate>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;

    let task = Task::new(&args.title, &args.description, args.priority, args.due);
    let created = tasks.create(&task)?;

    msg_success!(Message::TaskCreated(created.id.unwrap_or(0)));
    View::task(&created)?;

    Ok(())
}
