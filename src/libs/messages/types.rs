#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskAlreadyDone(i64),
    TaskNotDone(i64),
    NoTasksFound,
    TasksHeader,
    TasksTotal(usize),
    NoChangesDetected,
    ConfirmDeleteTask(String), // title
    DeleteCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDbPath,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NoTasksToExport,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32), // from, to
    RollbackCompleted(u32),
}
