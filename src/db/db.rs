//! Database connection bootstrap.
//!
//! A [`Db`] is always opened against an explicit file path handed in by the
//! caller; there is no ambient default connection. Opening runs the pending
//! schema migrations, so a freshly created file is immediately usable and an
//! existing file is never silently altered outside the migration system.

use crate::db::migrations;
use crate::libs::error::TaskError;
use rusqlite::Connection;
use std::path::Path;

/// Database file name used under the platform data directory.
pub const DB_FILE_NAME: &str = "tama.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the database at `path` and applies all
    /// pending migrations.
    pub fn open(path: &Path) -> Result<Db, TaskError> {
        let mut conn = Connection::open(path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database at `path` without touching the schema.
    ///
    /// Used by the migration inspection command to look at the version
    /// bookkeeping as-is.
    pub fn open_without_migrations(path: &Path) -> Result<Db, TaskError> {
        let conn = Connection::open(path)?;

        Ok(Db { conn })
    }
}
