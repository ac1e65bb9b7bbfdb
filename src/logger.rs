//! Logging capability and subscriber setup.

use std::error::Error;
use std::io::IsTerminal;

use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

/// Where the init action reports what happened.
pub trait Logger: Send + Sync {
    fn warn(&self, message: &str);

    fn error(&self, message: &str, cause: &(dyn Error + 'static));

    fn debug(&self, _message: &str) {}
}

/// [`Logger`] that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str, cause: &(dyn Error + 'static)) {
        tracing::error!("{message} {cause}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "repopack=debug" } else { "info" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))
}
