// File: src/config.rs
// Purpose: Configuration parsing from samurai.toml

use anyhow::{Context, Result};
use samurai_router::InferOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory containing view files (default: "views")
    #[serde(default = "default_views_dir")]
    pub views_dir: String,

    /// Whether every non-root URL ends with a slash
    #[serde(default = "default_false")]
    pub append_slash: bool,

    /// Glob of view files to skip, e.g. "*_test.rs" (empty disables)
    #[serde(default)]
    pub exclude: String,

    /// Extension of view files (default: "rs")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File stem of directory index views (default: "__init__")
    #[serde(default = "default_index_stem")]
    pub index_stem: String,

    /// Directory name whose index view is served at the root (default: "views")
    #[serde(default = "default_root_dir_name")]
    pub root_dir_name: String,
}

// Default values
fn default_name() -> String {
    "samurai-app".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_views_dir() -> String {
    "views".to_string()
}

fn default_extension() -> String {
    "rs".to_string()
}

fn default_index_stem() -> String {
    "__init__".to_string()
}

fn default_root_dir_name() -> String {
    "views".to_string()
}

fn default_false() -> bool {
    false
}

// Default implementations
impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            views_dir: default_views_dir(),
            append_slash: false,
            exclude: String::new(),
            extension: default_extension(),
            index_stem: default_index_stem(),
            root_dir_name: default_root_dir_name(),
        }
    }
}

impl RoutingConfig {
    /// Options handed to the route inferer
    pub fn infer_options(&self) -> InferOptions {
        InferOptions::default()
            .with_append_slash(self.append_slash)
            .with_exclude(self.exclude.clone())
            .with_extension(self.extension.clone())
            .with_index_stem(self.index_stem.clone())
            .with_root_dir_name(self.root_dir_name.clone())
    }
}

impl Config {
    /// Load configuration from samurai.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./samurai.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("samurai.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.views_dir, "views");
        assert!(!config.routing.append_slash);
        assert!(config.routing.exclude.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.routing.extension, "rs");
        assert_eq!(config.routing.index_stem, "__init__");
    }

    #[test]
    fn test_custom_routing() {
        let toml = r#"
            [routing]
            views_dir = "app/views"
            append_slash = true
            exclude = "*_test.html"
            extension = "html"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.views_dir, "app/views");
        assert!(config.routing.append_slash);

        let options = config.routing.infer_options();
        assert!(options.append_slash);
        assert_eq!(options.exclude, "*_test.html");
        assert_eq!(options.extension, "html");
        assert_eq!(options.index_stem, "__init__");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path().join("samurai.toml")).unwrap();
        assert_eq!(config.project.name, "samurai-app");
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("samurai.toml");
        fs::write(&path, "[routing\nviews_dir = ").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
