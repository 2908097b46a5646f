use clap::Parser;
use erp_admin::cli::dispatcher::{Dispatcher, Overrides};
use erp_admin::cli::main_types::Cli;
use erp_admin::storage::config::Config;
use erp_admin::utils::logging::init_logger;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| Config::file_in(&PathBuf::from(dir)));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        println!("Verbose mode is enabled");
        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }
    }

    let overrides = Overrides {
        url: cli.url,
        token: cli.token,
        company: cli.company,
    };
    let dispatcher = Dispatcher::new(config, config_path, overrides, cli.verbose);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} Error: {}", e.severity().emoji(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("💡 {}", hint);
        }
        std::process::exit(1);
    }
}
