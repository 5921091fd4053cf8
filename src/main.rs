use std::io;
use std::process::ExitCode;

use tesseract_chess::config::{SessionConfig, DEFAULT_LOG_FILTER};
use tesseract_chess::frontend::terminal_session::run_stdio_loop;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so the board on stdout stays readable.
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    tracing::info!(render = ?config.render_style, "session starting");

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "terminal session failed");
            ExitCode::FAILURE
        }
    }
}
