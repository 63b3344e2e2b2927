use std::process::exit;
use tama::commands::Cli;
use tama::libs::error::TaskError;
use tama::libs::messages::macros::is_debug_mode;
use tama::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    // With TAMA_DEBUG/RUST_LOG set the msg_* macros route through tracing;
    // install a subscriber so that output actually lands somewhere.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        let code = e.downcast_ref::<TaskError>().map(TaskError::exit_code).unwrap_or(1);
        exit(code);
    }
}
