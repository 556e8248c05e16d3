pub mod routes;
pub mod serve;

use anyhow::{Context, Result};
use samurai::Config;

use crate::RoutingArgs;

/// Loads samurai.toml and applies command-line overrides
pub fn load_config(args: &RoutingArgs) -> Result<Config> {
    let mut config = Config::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut Config, args: &RoutingArgs) {
    let routing = &mut config.routing;

    if let Some(dir) = &args.dir {
        routing.views_dir = dir.clone();
    }
    match (args.append_slash, args.no_append_slash) {
        (true, _) => routing.append_slash = true,
        (_, true) => routing.append_slash = false,
        _ => {}
    }
    if let Some(exclude) = &args.exclude {
        routing.exclude = exclude.clone();
    }
    if let Some(extension) = &args.extension {
        routing.extension = extension.trim_start_matches('.').to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("samurai.toml");
        fs::write(
            &config_path,
            "[routing]\nviews_dir = \"pages\"\nextension = \"html\"\nexclude = \"*.draft.html\"\n",
        )
        .unwrap();

        let args = RoutingArgs {
            config: config_path,
            dir: Some("views".to_string()),
            append_slash: true,
            no_append_slash: false,
            exclude: None,
            extension: Some(".jinja".to_string()),
        };

        let config = load_config(&args).unwrap();
        assert_eq!(config.routing.views_dir, "views");
        assert!(config.routing.append_slash);
        assert_eq!(config.routing.exclude, "*.draft.html");
        assert_eq!(config.routing.extension, "jinja");
    }

    #[test]
    fn test_no_append_slash_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("samurai.toml");
        fs::write(&config_path, "[routing]\nappend_slash = true\n").unwrap();

        let args = RoutingArgs {
            config: config_path.clone(),
            ..RoutingArgs::default()
        };
        assert!(load_config(&args).unwrap().routing.append_slash);

        let args = RoutingArgs {
            config: config_path,
            no_append_slash: true,
            ..RoutingArgs::default()
        };
        assert!(!load_config(&args).unwrap().routing.append_slash);
    }

    #[test]
    fn test_later_slash_flag_wins() {
        let cli = Cli::try_parse_from(["samurai", "routes", "--append-slash", "--no-append-slash"]).unwrap();
        let Commands::Routes { routing } = cli.command else {
            panic!("expected the routes command");
        };
        assert!(!routing.append_slash);
        assert!(routing.no_append_slash);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let args = RoutingArgs {
            config: temp_dir.path().join("samurai.toml"),
            ..RoutingArgs::default()
        };

        let config = load_config(&args).unwrap();
        assert_eq!(config.routing.views_dir, "views");
        assert!(!config.routing.append_slash);
    }
}
