//! Task export to CSV and JSON for backup and external analysis.
//!
//! Exports flatten every task field to strings so the same record shape
//! serves both formats: CSV gets one row per task with a header, JSON gets a
//! pretty-printed array. The output path defaults to a timestamped file name
//! in the current directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tama::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! // let path = exporter.export(&tasks)?;
//! ```

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per task.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// A task flattened to plain strings for serialization.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
    pub created_at: String,
    pub completed_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.to_string(),
            status: task.status.to_string(),
            due_date: task.due_date.map(|d| d.to_string()).unwrap_or_default(),
            created_at: task.created_at.map(|t| t.to_string()).unwrap_or_default(),
            completed_at: task.completed_at.map(|t| t.to_string()).unwrap_or_default(),
        }
    }
}

/// Writes a task list to disk in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit output path the file is
    /// named `tasks_<YYYYMMDD>.<ext>` in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("tasks_{}.{}", Local::now().format("%Y%m%d"), format.extension()))
        });

        Exporter { format, output_path }
    }

    /// Writes `tasks` and returns the path of the created file.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let records: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&self.output_path)?;
                for record in &records {
                    writer.serialize(record)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let file = File::create(&self.output_path)?;
                serde_json::to_writer_pretty(file, &records)?;
            }
        }

        Ok(self.output_path.clone())
    }
}
