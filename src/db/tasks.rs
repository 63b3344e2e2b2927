//! The task store: CRUD, status transitions, filtering and sorting.
//!
//! `Tasks` owns a connection to one SQLite file whose path is supplied by
//! the caller. Every operation is a single blocking statement (or one short
//! read-modify-write pair) against that file; nothing is cached between
//! calls and `list` materializes a fresh `Vec` per invocation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tama::db::tasks::Tasks;
//! use tama::libs::task::{Priority, Task, TaskFilter, TaskSort};
//!
//! let mut tasks = Tasks::new(std::path::Path::new("tama.db"))?;
//! let created = tasks.create(&Task::new("Buy milk", "", Priority::Low, None))?;
//! let open = tasks.list(&TaskFilter::default(), TaskSort::default(), None)?;
//! # Ok::<(), tama::libs::error::TaskError>(())
//! ```

use crate::db::db::Db;
use crate::libs::error::TaskError;
use crate::libs::task::{validate_title, Priority, SortKey, SortOrder, Status, Task, TaskFilter, TaskPatch, TaskSort};
use chrono::{Local, NaiveDateTime};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::path::Path;

/// Timestamp layout used for `completed_at`, matching what rusqlite's chrono
/// integration writes for `created_at`.
const TIMESTAMP_FORMAT: &str = "%F %T%.f";

fn timestamp_value(timestamp: NaiveDateTime) -> Value {
    Value::Text(timestamp.format(TIMESTAMP_FORMAT).to_string())
}

const SELECT_TASKS: &str = "SELECT id, title, description, priority, status, due_date, created_at, completed_at FROM tasks";
const INSERT_TASK: &str =
    "INSERT INTO tasks (title, description, priority, due_date, created_at) VALUES (?1, ?2, ?3, ?4, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2, completed_at = ?3 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Opens the store at `db_path`, creating the file and applying pending
    /// schema migrations as needed.
    pub fn new(db_path: &Path) -> Result<Tasks, TaskError> {
        let db = Db::open(db_path)?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task and returns it as stored.
    ///
    /// The store assigns `id` and `created_at` and forces the initial status
    /// to `todo`. Fails with `Validation` before touching the database when
    /// the title is empty; the title and description are stored trimmed.
    pub fn create(&mut self, task: &Task) -> Result<Task, TaskError> {
        let title = validate_title(&task.title)?;

        self.conn
            .execute(INSERT_TASK, params![title, task.description.trim(), task.priority, task.due_date])?;
        let id = self.conn.last_insert_rowid();

        self.get(id)
    }

    /// Fetches a single task by id.
    pub fn get(&mut self, id: i64) -> Result<Task, TaskError> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE id = ?1", SELECT_TASKS))?;
        let mut task_iter = stmt.query_map(params![id], Self::map_row)?;

        match task_iter.next() {
            Some(Ok(task)) => Ok(task),
            Some(Err(e)) => Err(e.into()),
            None => Err(TaskError::NotFound(id)),
        }
    }

    /// Applies a partial update and returns the task as stored afterwards.
    ///
    /// Only fields present in the patch change; every supplied field is
    /// validated before any mutation is applied. An empty patch is a no-op.
    /// Moving the status to or from `done` maintains `completed_at`.
    pub fn update(&mut self, id: i64, patch: &TaskPatch) -> Result<Task, TaskError> {
        let current = self.get(id)?;
        if patch.is_empty() {
            return Ok(current);
        }

        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = &patch.title {
            sets.push("title = ?");
            values.push(Value::Text(validate_title(title)?));
        }
        if let Some(description) = &patch.description {
            sets.push("description = ?");
            values.push(Value::Text(description.trim().to_string()));
        }
        if let Some(priority) = patch.priority {
            sets.push("priority = ?");
            values.push(Value::Text(priority.to_string()));
        }
        if let Some(status) = patch.status {
            sets.push("status = ?");
            values.push(Value::Text(status.to_string()));

            if status == Status::Done && current.completed_at.is_none() {
                sets.push("completed_at = ?");
                values.push(timestamp_value(Local::now().naive_local()));
            } else if status != Status::Done && current.completed_at.is_some() {
                sets.push("completed_at = ?");
                values.push(Value::Null);
            }
        }
        if let Some(due_date) = patch.due_date {
            sets.push("due_date = ?");
            values.push(match due_date {
                Some(date) => Value::Text(date.to_string()),
                None => Value::Null,
            });
        }

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
        values.push(Value::Integer(id));
        self.conn.execute(&sql, params_from_iter(values))?;

        self.get(id)
    }

    /// Moves a task to `status`, covering all three states explicitly.
    ///
    /// Entering `done` stamps `completed_at` (kept as-is when already done);
    /// leaving `done` clears it.
    pub fn set_status(&mut self, id: i64, status: Status) -> Result<Task, TaskError> {
        let current = self.get(id)?;

        let completed_at = match status {
            Status::Done => current.completed_at.or_else(|| Some(Local::now().naive_local())),
            _ => None,
        };
        self.conn.execute(UPDATE_STATUS, params![id, status, completed_at])?;

        self.get(id)
    }

    /// Removes a task permanently. There is no soft delete and the id is
    /// never handed out again.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;

        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }

    /// Fetches tasks matching `filter`, ordered by `sort`, newly
    /// materialized on every call.
    ///
    /// The filter fields combine as a conjunction; the due-date bounds are
    /// inclusive. Tasks without a due date sort after all dated tasks under
    /// the `Due` key regardless of direction.
    pub fn list(&mut self, filter: &TaskFilter, sort: TaskSort, limit: Option<u32>) -> Result<Vec<Task>, TaskError> {
        let (sql, values) = Self::build_list_query(filter, sort, limit);

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(values), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    fn build_list_query(filter: &TaskFilter, sort: TaskSort, limit: Option<u32>) -> (String, Vec<Value>) {
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(status) = filter.status {
            clauses.push("status = ?");
            values.push(Value::Text(status.to_string()));
        }
        if let Some(priority) = filter.priority {
            clauses.push("priority = ?");
            values.push(Value::Text(priority.to_string()));
        }
        if let Some(due_before) = filter.due_before {
            clauses.push("due_date <= ?");
            values.push(Value::Text(due_before.to_string()));
        }
        if let Some(due_after) = filter.due_after {
            clauses.push("due_date >= ?");
            values.push(Value::Text(due_after.to_string()));
        }
        if let Some(search) = &filter.search {
            clauses.push("(title LIKE ? OR description LIKE ?)");
            let pattern = format!("%{}%", search);
            values.push(Value::Text(pattern.clone()));
            values.push(Value::Text(pattern));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        let dir = match sort.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        // id as tiebreaker: created_at only has second granularity
        let order_sql = match sort.key {
            SortKey::Created => format!(" ORDER BY created_at {dir}, id {dir}"),
            SortKey::Due => format!(" ORDER BY (due_date IS NULL), due_date {dir}, id {dir}"),
            SortKey::Priority => {
                format!(" ORDER BY CASE priority WHEN 'high' THEN 0 WHEN 'medium' THEN 1 ELSE 2 END {dir}, id {dir}")
            }
        };

        let mut sql = format!("{}{}{}", SELECT_TASKS, where_sql, order_sql);
        if let Some(limit) = limit {
            sql.push_str(" LIMIT ?");
            values.push(Value::Integer(i64::from(limit)));
        }

        (sql, values)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            priority: row.get::<_, Priority>(3)?,
            status: row.get::<_, Status>(4)?,
            due_date: row.get(5)?,
            created_at: row.get(6)?,
            completed_at: row.get(7)?,
        })
    }
}
