mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "samurai")]
#[command(version, about = "Samurai CLI - file-system routed views", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the routes inferred from the view directory
    Routes {
        #[command(flatten)]
        routing: RoutingArgs,
    },

    /// Serve the view directory over HTTP
    Serve {
        /// Port to run the server on (overrides samurai.toml)
        #[arg(short, long)]
        port: Option<u16>,

        #[command(flatten)]
        routing: RoutingArgs,
    },
}

/// Routing flags shared by every command; each one overrides samurai.toml
#[derive(Args, Debug, Clone, Default)]
pub struct RoutingArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "samurai.toml")]
    pub config: PathBuf,

    /// View directory to scan
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Append a trailing slash to every non-root URL
    #[arg(long, overrides_with = "no_append_slash")]
    pub append_slash: bool,

    /// Leave URLs without a trailing slash
    #[arg(long, overrides_with = "append_slash")]
    pub no_append_slash: bool,

    /// Glob of view files to skip, e.g. "*_draft.html"
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Extension of view files
    #[arg(long)]
    pub extension: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Routes { routing } => {
            commands::routes::execute(&routing)?;
        }
        Commands::Serve { port, routing } => {
            commands::serve::execute(port, &routing)?;
        }
    }

    Ok(())
}
