//! Tracing setup for the userdesk binary
//!
//! Usage:
//!   userdesk --debug serve                 # Debug logging to console
//!   userdesk --echo-sql serve              # Log every SQL statement
//!   RUST_LOG=userdesk_server=debug userdesk serve
//!
//! Environment variables:
//!   RUST_LOG                               # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Directive that surfaces sqlx's per-statement log lines.
const SQL_ECHO_DIRECTIVE: &str = "sqlx::query=debug";

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
    /// Echo executed SQL statements
    pub echo_sql: bool,
}

impl TracingConfig {
    fn filter(&self) -> Result<EnvFilter> {
        let fallback = if self.debug { "debug" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        if self.echo_sql {
            let directive = SQL_ECHO_DIRECTIVE
                .parse()
                .map_err(|err| anyhow!("invalid log directive: {}", err))?;
            Ok(filter.add_directive(directive))
        } else {
            Ok(filter)
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter()?)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
