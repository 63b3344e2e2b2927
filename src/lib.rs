//! # Tama - TAsk MAnager
//!
//! A command-line task manager backed by a local SQLite store.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Filtering & Search**: Narrow lists by status, priority, due date or text
//! - **Sorting**: Order by creation time, due date or priority
//! - **Data Export**: Export tasks to CSV and JSON
//! - **Schema Migrations**: Versioned, idempotent database initialization
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tama::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
