use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter: RUST_LOG when set, otherwise `default_directive`
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// The terminal belongs to the UI, so there is no stderr fallback: if the
/// file cannot be opened, logging stays off and the error is returned.
pub fn init_logging(path: &Path, default_directive: &str) -> io::Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(env_filter(default_directive))
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    tracing::info!(path = %path.display(), "speedkey logging initialized");
    Ok(())
}
