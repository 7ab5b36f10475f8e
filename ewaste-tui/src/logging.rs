//! Logging setup.
//!
//! Priority: `RUST_LOG` > `--debug` > default `info`. The interactive UI owns the
//! terminal, so it only logs when `--log-file` is given; one-shot commands log to stderr.

use std::{ffi::OsStr, fs::File, io, path::Path, sync::Mutex};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ewaste_core=info,ewaste_tui=info";
const DEBUG_FILTER: &str = "ewaste_core=debug,ewaste_tui=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// Directives to use, or `None` when `RUST_LOG` should be read as is.
fn filter_directives(rust_log: Option<&OsStr>, debug: bool) -> Option<&'static str> {
    if rust_log.is_some() {
        None
    } else if debug {
        Some(DEBUG_FILTER)
    } else {
        Some(DEFAULT_FILTER)
    }
}

fn log_target(log_file: Option<&Path>, to_stderr: bool) -> Option<LogTarget<'_>> {
    match log_file {
        Some(path) => Some(LogTarget::File(path)),
        None if to_stderr => Some(LogTarget::Stderr),
        None => None,
    }
}

pub(crate) fn init(debug: bool, log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let Some(target) = log_target(log_file, to_stderr) else {
        return Ok(());
    };

    let rust_log = std::env::var_os("RUST_LOG");
    let filter = match filter_directives(rust_log.as_deref(), debug) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };

    match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .compact()
                .try_init()
                .map_err(|err| anyhow!(err))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_target(true)
                .compact()
                .try_init()
                .map_err(|err| anyhow!(err))?;
        }
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging initialised");
    Ok(())
}
