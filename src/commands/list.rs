use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{parse_date_arg, Priority, SortKey, SortOrder, Status, TaskFilter, TaskSort},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks with this status
    #[arg(long, value_enum)]
    status: Option<Status>,
    /// Only tasks with this priority
    #[arg(long, value_enum)]
    priority: Option<Priority>,
    /// Only tasks due on or before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    due_before: Option<NaiveDate>,
    /// Only tasks due on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    due_after: Option<NaiveDate>,
    /// Case-insensitive substring match on title and description
    #[arg(long)]
    search: Option<String>,
    /// Sort key
    #[arg(long, value_enum, default_value_t = SortKey::Created)]
    sort: SortKey,
    /// Sort ascending (overrides the key's natural direction)
    #[arg(long, conflicts_with = "desc")]
    asc: bool,
    /// Sort descending (overrides the key's natural direction)
    #[arg(long)]
    desc: bool,
    /// Show at most this many tasks
    #[arg(long)]
    limit: Option<u32>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = TaskFilter {
        status: args.status,
        priority: args.priority,
        due_before: args.due_before,
        due_after: args.due_after,
        search: args.search,
    };
    let sort = if args.asc {
        TaskSort::with_order(args.sort, SortOrder::Asc)
    } else if args.desc {
        TaskSort::with_order(args.sort, SortOrder::Desc)
    } else {
        TaskSort::new(args.sort)
    };

    let mut tasks = Tasks::new(&Config::read()?.db_path()?)?;
    let found = tasks.list(&filter, sort, args.limit)?;

    if found.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&found)?;
    msg_print!(Message::TasksTotal(found.len()));

    Ok(())
}
