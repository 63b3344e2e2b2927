//! Core task domain types shared by the store, the CLI and the views.
//!
//! The closed sets (`Priority`, `Status`) are Rust enums wired into clap,
//! rusqlite and `Display`, so a value outside the set is unrepresentable
//! once parsed. Partial updates travel as a [`TaskPatch`] that lists every
//! mutable field as present-or-absent; queries are narrowed with a
//! [`TaskFilter`] conjunction and ordered with a [`TaskSort`].

use crate::libs::error::TaskError;
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use std::fmt;
use std::str::FromStr;

/// Format accepted for due dates on the command line and in storage.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority. Stored as lowercase text.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TaskError::Validation(format!(
                "Priority must be one of low, medium, high (got '{}')",
                other
            ))),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
    }
}

/// Task lifecycle state. Stored as lowercase text ("in-progress" with a hyphen).
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(TaskError::Validation(format!(
                "Status must be one of todo, in-progress, done (got '{}')",
                other
            ))),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
    }
}

/// A single task record.
///
/// `id`, `created_at` and `completed_at` are assigned by the store and are
/// `None` on records that have not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    /// Builds an unsaved task with default status.
    pub fn new(title: &str, description: &str, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            status: Status::Todo,
            due_date,
            created_at: None,
            completed_at: None,
        }
    }
}

/// A partial update to a task.
///
/// Each mutable field is present-or-absent; absent fields are left untouched.
/// `due_date` carries one more level: `Some(None)` clears the date while
/// `None` leaves it as-is.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none() && self.status.is_none() && self.due_date.is_none()
    }
}

/// Conjunctive filter for `list` queries. Unset fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Tasks due on or before this date.
    pub due_before: Option<NaiveDate>,
    /// Tasks due on or after this date.
    pub due_after: Option<NaiveDate>,
    /// Case-insensitive substring match against title and description.
    pub search: Option<String>,
}

/// Field a `list` result is ordered by.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Created,
    Due,
    Priority,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort key plus direction for a `list` query.
///
/// Tasks without a due date always sort last under the `Due` key, in either
/// direction. `Priority` ascending runs high, medium, low.
#[derive(Copy, Clone, Debug)]
pub struct TaskSort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl TaskSort {
    /// Sort by `key` in its natural direction: newest first for `Created`,
    /// ascending for `Due` and `Priority`.
    pub fn new(key: SortKey) -> Self {
        let order = match key {
            SortKey::Created => SortOrder::Desc,
            SortKey::Due | SortKey::Priority => SortOrder::Asc,
        };
        TaskSort { key, order }
    }

    pub fn with_order(key: SortKey, order: SortOrder) -> Self {
        TaskSort { key, order }
    }
}

impl Default for TaskSort {
    fn default() -> Self {
        TaskSort::new(SortKey::Created)
    }
}

/// Validates a title and returns its trimmed form.
pub fn validate_title(title: &str) -> Result<String, TaskError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::Validation("Title must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parses a date argument in `YYYY-MM-DD` form. Usable as a clap value parser.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate, TaskError> {
    NaiveDate::parse_from_str(input.trim(), DUE_DATE_FORMAT)
        .map_err(|_| TaskError::Validation(format!("Due date must be in {} format (e.g. 2025-11-20)", DUE_DATE_FORMAT)))
}

/// Parses an optional due date string: empty input clears the date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, TaskError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_date_arg(trimmed).map(Some)
}
