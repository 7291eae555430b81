//! leaper — command-line front end.
//!
//! Parses and validates the query, runs the shortest-path search, renders the
//! solution graph to DOT and prints a summary.

pub mod args;
pub mod run;
pub mod validate;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

pub use args::{Args, RunConfig};
pub use run::{Outcome, TooManyPaths, report, run, solve};
pub use validate::{ValidationErrors, validate};

/// Install the stderr log subscriber. `RUST_LOG` overrides `default_level`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the same subscriber.
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}
