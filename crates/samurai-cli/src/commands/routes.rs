use anyhow::{Context, Result};
use colored::Colorize;
use samurai::{file_patterns, FileResolver};

use super::load_config;
use crate::RoutingArgs;

pub fn execute(args: &RoutingArgs) -> Result<()> {
    let config = load_config(args)?;
    let routing = &config.routing;

    let patterns = file_patterns(routing, &FileResolver::new())
        .with_context(|| format!("Failed to infer routes from {}", routing.views_dir))?;

    println!(
        "{} {} ({} routes)",
        "Routes in".green().bold(),
        routing.views_dir.cyan(),
        patterns.len()
    );
    println!();

    if patterns.is_empty() {
        println!("  {} No view files with extension .{}", "ℹ".cyan(), routing.extension);
        return Ok(());
    }

    let url_width = patterns
        .iter()
        .map(|r| display_url(&r.url).len())
        .max()
        .unwrap_or(0);
    let name_width = patterns.iter().map(|r| r.url_name.len()).max().unwrap_or(0);

    for route in patterns.iter() {
        println!(
            "  {:<url_width$}  {:<name_width$}  {}",
            display_url(&route.url).bold(),
            route.url_name.yellow(),
            route.module_path.dimmed(),
            url_width = url_width,
            name_width = name_width,
        );
    }

    Ok(())
}

fn display_url(url: &str) -> String {
    format!("/{}", url.trim_start_matches('/'))
}
