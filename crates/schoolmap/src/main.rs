//! # Schoolmap CLI
//!
//! Command-line interface for the school proximity service.

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod config;
mod logging;

#[derive(Parser)]
#[command(name = "schoolmap")]
#[command(version)]
#[command(about = "Register schools and list them by proximity", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Database URL (SQLite), or "memory" for a throwaway in-memory store
        #[arg(short, long)]
        database_url: Option<String>,

        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Display version and build info
    Version,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init(&cli.log_level, cli.json_logs);

    // Load configuration for default values
    let cfg = config::Config::load();

    match cli.command {
        Commands::Serve {
            host,
            port,
            database_url,
            no_cors,
        } => {
            // Command-line flags win over config file and environment
            let host = host.unwrap_or(cfg.host);
            let port = port.unwrap_or(cfg.port);
            let database_url = database_url.unwrap_or(cfg.database_url);
            commands::serve(host, port, database_url, !no_cors).await?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => config::show_config(&cfg),
            ConfigAction::Path => {
                println!("{}", config::Config::config_path().display());
            }
        },

        Commands::Version => commands::version(),
    }

    Ok(())
}
