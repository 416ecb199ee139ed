// SPDX-License-Identifier: MPL-2.0
//! Console logging setup.
//!
//! ```text
//! iced_dashkit --debug                   # debug level for everything
//! RUST_LOG=iced_dashkit=trace iced_dashkit  # fine-grained control
//! ```
//!
//! `RUST_LOG` always wins over `--debug`; without either the level is `info`.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Logging options taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingConfig {
    pub debug: bool,
}

fn default_directive(config: LoggingConfig) -> &'static str {
    if config.debug {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(config: LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}
