use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::ConfigService;
use crate::interfaces::cli::{commands, Cli};

pub fn run() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_file(path),
        None => ConfigService::new(),
    };
    let config = match config_service.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    if let Err(err) = config.theme.load_font() {
        warn!(error = %err, "Custom font unavailable, using the default font");
    }

    let color = std::io::stdout().is_terminal();
    let mut stdout = std::io::stdout().lock();
    match commands::execute(&cli, &config, color, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %err, "Failed to write output");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout
/// stays clean for `--json`.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
