//! lazyseq — drive resumable lazy sequences from the command line.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use lazyseq_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // RUST_LOG wins unless -v asks for debug output.
    let filter = if config.verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(errors::exit_status(&err))
        }
    }
}
