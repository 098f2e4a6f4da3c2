//! Tracing setup for hosts embedding the status reporter.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `debug = true` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stepguard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stepguard=info"))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init_tracing(true);
        init_tracing(false);
        tracing::debug!("still logging");
    }
}
