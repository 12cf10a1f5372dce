use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the application directory under the platform config directory
const APP_CONFIG_DIR: &str = "favmerge";

/// Name of the configuration file
const CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `FAVMERGE_DISCOVERY__RECURSIVE=true`
const ENV_PREFIX: &str = "FAVMERGE_";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for the traversal policy when no flag is given
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub recursive: bool,
    pub exclude_root: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: String,
    pub color_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            color_enabled: true,
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        // Check for XDG_CONFIG_HOME override first (Linux/macOS)
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config)
                .join(APP_CONFIG_DIR)
                .join(CONFIG_FILE);
        }

        dirs::config_dir()
            .map(|d| d.join(APP_CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(".favmerge"))
            .join(CONFIG_FILE)
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// CLI flags are applied on top of the result by [`crate::settings::RunSettings`].
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: AppConfig = figment.extract().context("Failed to load configuration")?;
        crate::output::OutputFormat::from_string(&config.output.default_format)
            .context("Invalid output.default_format")?;
        Ok(config)
    }

    /// Get a configuration value by key (dot notation)
    pub fn get(&self, key: &str) -> Result<String> {
        self.list()?
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| anyhow::anyhow!("Key '{}' not found", key))
    }

    /// List all configuration values, sorted by key
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let config = self.load()?;
        let toml_string = toml::to_string(&config)?;
        let value: toml::Value = toml::from_str(&toml_string)?;

        let mut items = Vec::new();
        Self::collect_values(&value, String::new(), &mut items);
        items.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(items)
    }

    /// Recursively collect all key-value pairs from TOML
    fn collect_values(value: &toml::Value, prefix: String, items: &mut Vec<(String, String)>) {
        match value {
            toml::Value::Table(table) => {
                for (key, val) in table {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    Self::collect_values(val, new_prefix, items);
                }
            }
            toml::Value::String(s) => items.push((prefix, s.clone())),
            toml::Value::Boolean(b) => items.push((prefix, b.to_string())),
            toml::Value::Integer(i) => items.push((prefix, i.to_string())),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            let manager = ConfigManager::with_path(jail.directory().join("missing.toml"));
            let config = manager.load().map_err(|e| e.to_string())?;

            assert_eq!(config, AppConfig::default());
            assert!(!config.discovery.recursive);
            assert!(!config.discovery.exclude_root);
            assert_eq!(config.output.default_format, "text");
            assert!(config.output.color_enabled);
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [discovery]
                recursive = true

                [output]
                default_format = "json"
                "#,
            )?;
            let manager = ConfigManager::with_path(jail.directory().join("config.toml"));
            let config = manager.load().map_err(|e| e.to_string())?;

            assert!(config.discovery.recursive);
            assert!(!config.discovery.exclude_root);
            assert_eq!(config.output.default_format, "json");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[discovery]\nexclude_root = false\n")?;
            jail.set_env("FAVMERGE_DISCOVERY__EXCLUDE_ROOT", "true");
            jail.set_env("FAVMERGE_OUTPUT__COLOR_ENABLED", "false");

            let manager = ConfigManager::with_path(jail.directory().join("config.toml"));
            let config = manager.load().map_err(|e| e.to_string())?;

            assert!(config.discovery.exclude_root);
            assert!(!config.output.color_enabled);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_default_format_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[output]\ndefault_format = \"xml\"\n")?;
            let manager = ConfigManager::with_path(jail.directory().join("config.toml"));

            assert!(manager.load().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_get_and_list() {
        Jail::expect_with(|jail| {
            let manager = ConfigManager::with_path(jail.directory().join("none.toml"));

            let items = manager.list().map_err(|e| e.to_string())?;
            let keys: Vec<_> = items.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(
                keys,
                vec![
                    "discovery.exclude_root",
                    "discovery.recursive",
                    "output.color_enabled",
                    "output.default_format",
                ]
            );

            assert_eq!(
                manager.get("discovery.recursive").map_err(|e| e.to_string())?,
                "false"
            );
            assert!(manager.get("discovery.missing").is_err());
            Ok(())
        });
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = ConfigManager::new().get_config_path();
        assert!(path.ends_with(format!("{APP_CONFIG_DIR}/{CONFIG_FILE}")));
    }
}
