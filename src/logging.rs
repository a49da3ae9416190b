//! Diagnostic logging to standard error
//!
//! Standard output carries the sorted names, so log lines never go there.

use crate::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtering at `level`, e.g. `warn` or `name_sorter=debug`.
/// Calling this again after a subscriber is installed does nothing.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_new(level) {
        Ok(filter) => filter,
        Err(e) => return err!("invalid log level/filter '{}' : {}", level, e),
    };
    // only fails if a global subscriber already exists
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init();
    Ok(())
}
