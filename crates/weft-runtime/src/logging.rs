#![forbid(unsafe_code)]

//! Opt-in logging setup.
//!
//! The UI owns the terminal, so log output goes to a file instead of
//! stderr. Filtering follows `RUST_LOG` via the standard env filter.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Install a file-backed tracing subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
