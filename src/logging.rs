//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The interactive view owns the terminal, so without `--log-file` it logs
//! nowhere. One-shot mode logs to stderr. Passwords are never logged.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub fn init(filter: &str, log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)?;

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if interactive => return Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
