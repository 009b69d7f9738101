//! Logging setup for the rowrule binary.
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer. `RUST_LOG`
//! overrides the level picked from the command line.

use anyhow::{Context as _, Result};
use std::io::IsTerminal as _;
use tracing_subscriber::EnvFilter;

/// Map `-v`/`-q` flags to a default filter directive.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
	if quiet {
		return "warn";
	}
	match verbose {
		0 => "info",
		1 => "debug",
		_ => "trace",
	}
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns error if the filter cannot be built or a subscriber is already set
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
	let env_filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(default_level(verbose, quiet)))
		.context("Failed to create env filter")?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(false)
		.try_init()
		.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

	Ok(())
}
