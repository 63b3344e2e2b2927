//! Display implementation for tama application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and the rest of the code deals only in typed `Message`
//! values with their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Created task #{}", id),
            Message::TaskUpdated(id) => format!("Updated task #{}", id),
            Message::TaskDeleted(id) => format!("Deleted task #{}", id),
            Message::TaskCompleted(id) => format!("Marked task #{} as complete", id),
            Message::TaskReopened(id) => format!("Marked task #{} as incomplete", id),
            Message::TaskAlreadyDone(id) => format!("Task #{} is already done", id),
            Message::TaskNotDone(id) => format!("Task #{} is not done", id),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::TasksTotal(count) => format!("Total: {}", count),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptDbPath => "Database file path (empty for platform default)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::NoTasksToExport => "No tasks to export".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
        };
        write!(f, "{}", text)
    }
}
