use clap::Parser;
use poke_pager::cli::dispatcher::Dispatcher;
use poke_pager::cli::main_types::Cli;
use poke_pager::storage::config::Config;
use poke_pager::utils::logging::{init_logging, log_error, log_warning};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("loading config: {}", err));
            std::process::exit(1);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        log::debug!("using config directory {}", config_dir);
    }

    if let Err(err) = config.validate() {
        log_warning(&format!("configuration has invalid values: {}", err));
    }

    let dispatcher = Dispatcher::new(config, config_path, cli.verbose);

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} {}", e.severity().emoji(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
