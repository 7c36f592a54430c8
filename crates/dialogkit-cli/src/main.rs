use clap::Parser;
use dialogkit_core::storage::config::Config;
use dialogkit_core::utils::logging::LoggingConfig;
use std::path::PathBuf;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    // CLI flag > environment > config file
    let level = cli
        .logging
        .requested_level()
        .unwrap_or_else(|| config.get_log_level());
    let log_file = cli.log_file.clone().or_else(|| config.get_log_file());

    // Colored only when stderr is a terminal and NO_COLOR is unset
    let logging = LoggingConfig::new(level).with_file_logging(level, log_file);
    if let Err(err) = logging.init() {
        eprintln!("Warning: {}", err);
    }

    log::debug!("Using log level {}", level);
    if let Some(config_dir) = &cli.config_dir {
        log::info!("Using config directory: {}", config_dir);
    }

    let dispatcher = Dispatcher::new(config, config_path);

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} Error: {}", e.severity().emoji(), e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}
