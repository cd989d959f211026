// src/log.rs
// Debug log file. Everything under `tracing` ends up here; the console is left
// to the `Progress` frontend.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::file::ensure_parent_dir;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber, appending to `path`. Lines carry the time
/// since start, like `[00:00:01.234][INFO] ...`.
pub fn init(path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    ensure_parent_dir(path)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_file_and_refuses_second_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("debug.log");

        init(&path).unwrap();
        assert!(path.exists());

        let err = init(&path).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
