//! Log output.  The terminal belongs to the game while it's running, so logs
//! can only go to a file.
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{
    filter::{EnvFilter, ParseError},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Start writing logs to the file at `path`, truncating it first.  Events are
/// filtered by `RUST_LOG` if it's set and by `default_filter` otherwise.  If
/// `path` is `None`, nothing is set up and all events are discarded.
pub(crate) fn init(path: Option<&Path>, default_filter: &str) -> Result<(), LogError> {
    let Some(path) = path else {
        return Ok(());
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };
    let file = fs_err::File::create(path)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("invalid log filter")]
    Filter(#[from] ParseError),
    #[error("failed to create log file")]
    Create(#[from] std::io::Error),
    #[error("failed to install log subscriber")]
    Install(#[from] TryInitError),
}
