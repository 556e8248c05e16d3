use anyhow::{Context, Result};
use colored::Colorize;
use samurai::{file_patterns, FileResolver};
use tracing::info;

use super::load_config;
use crate::RoutingArgs;

pub fn execute(port: Option<u16>, args: &RoutingArgs) -> Result<()> {
    let config = load_config(args)?;
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);

    println!("{}", "Starting Samurai server...".green().bold());
    println!();
    println!("  {} Views: {}", "📂".cyan(), config.routing.views_dir);

    // Routes are inferred once at startup
    let patterns = file_patterns(&config.routing, &FileResolver::new())
        .with_context(|| format!("Failed to infer routes from {}", config.routing.views_dir))?;
    println!("  {} Mounted {} views", "✓".green(), patterns.len());

    let router = patterns.into_router();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;

            println!();
            println!("  {} Listening on http://{}", "→".cyan(), addr);
            info!(addr = %addr, "server started");

            axum::serve(listener, router).await?;
            Ok::<(), anyhow::Error>(())
        })
}
