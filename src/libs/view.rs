//! Terminal table rendering for tasks.

use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

const EMPTY_CELL: &str = "—";

pub struct View {}

impl View {
    /// Prints a summary table, one row per task.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.status,
                task.priority,
                task.due_date.map(|d| d.to_string()).unwrap_or_else(|| EMPTY_CELL.to_string()),
                task.created_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints every field of a single task as a two-column table.
    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row![
            "DESCRIPTION",
            if task.description.is_empty() { EMPTY_CELL } else { task.description.as_str() }
        ]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row![
            "DUE",
            task.due_date.map(|d| d.to_string()).unwrap_or_else(|| EMPTY_CELL.to_string())
        ]);
        table.add_row(row![
            "CREATED",
            task.created_at.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default()
        ]);
        table.add_row(row![
            "COMPLETED",
            task.completed_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string())
        ]);
        table.printstd();

        Ok(())
    }
}
