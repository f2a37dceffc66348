//! Primer CLI entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    // Structured logging on stderr so stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    primer::cli::run()
}
