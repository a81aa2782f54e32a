use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pexelist::config::Config;
use pexelist::constants::ERROR_NO_API_KEY;
use pexelist::logger::Logger;
use pexelist::ui;

/// Search Pexels photos from the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Write a default configuration file and exit (defaults to the XDG config path)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Use this configuration file instead of searching for one
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    // Check if API key is set
    if std::env::var(&config.api.api_key_env).is_err() {
        if config.api.api_key_env == "PEXELS_API_KEY" {
            eprintln!("{}", ERROR_NO_API_KEY);
        } else {
            eprintln!("❌ Error: {} environment variable not set", config.api.api_key_env);
        }
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Get an API key from https://www.pexels.com/api/");
        eprintln!("2. Set it as environment variable: export {}=your_key_here", config.api.api_key_env);
        eprintln!("3. Run the app again!");
        return Ok(());
    }

    let logger = Logger::from_config(&config.logging)?;
    if let Some(path) = logger.log_file() {
        log::info!("pexelist {} starting, log file {}", env!("CARGO_PKG_VERSION"), path.display());
    }

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
