//! Tracing configuration for rclip
//!
//! Logs go to stderr so stdout carries nothing but pasted content.
//!
//! ## Behavior
//!
//! - Default level is `warn`, raised by `-v` (info) and `-vv` (debug)
//! - `RUST_LOG` overrides the verbosity flags entirely

use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Build the default filter directives for a `-v` count.
fn build_filter_directives(verbosity: u8) -> Vec<String> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    vec![
        level.to_string(),
        // Keep the connection pool quiet below trace.
        if verbosity >= 3 { "hyper_util=debug" } else { "hyper_util=warn" }.to_string(),
    ]
}

/// Initialize the global subscriber.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(verbosity: u8) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(build_filter_directives(verbosity).join(","))
    });

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(verbosity >= 2)
        .with_line_number(verbosity >= 2)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(BoxMakeWriter::new(io::stderr));

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
