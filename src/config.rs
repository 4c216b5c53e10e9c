use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::services::ClientConfig;

/// Legacy variable names used by the frontend deployment for the backend URL
const LEGACY_API_URL_VARS: [&str; 2] = ["API_URL", "VITE_API_URL"];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSettings {
    /// Backend base URL. Left unset unless configured; never defaulted.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HACKMATCH__)
    /// 5. `API_URL` / `VITE_API_URL` for the backend base URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HACKMATCH__API__BASE_URL -> api.base_url
            .add_source(
                Environment::with_prefix("HACKMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_legacy_overrides(settings, legacy_base_url_from_env())?.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// `HACKMATCH__` variables and `API_URL` / `VITE_API_URL` apply on top, as with [`Settings::load`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HACKMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_legacy_overrides(settings, legacy_base_url_from_env())?.try_deserialize()
    }

    /// Client configuration derived from these settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api.base_url.clone(),
        }
    }
}

fn legacy_base_url_from_env() -> Option<String> {
    legacy_base_url(LEGACY_API_URL_VARS.iter().map(|name| std::env::var(name).ok()))
}

/// First non-blank value among the legacy URL variables, in priority order
fn legacy_base_url<I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    values
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Override `api.base_url` in the layered config with a legacy URL, if any
fn apply_legacy_overrides(settings: Config, legacy_url: Option<String>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = legacy_url {
        builder = builder.set_override("api.base_url", url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn layered(toml: &str) -> Config {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
    }

    fn parse(toml: &str) -> Settings {
        layered(toml).try_deserialize().unwrap()
    }

    fn parse_with_legacy(toml: &str, api_url: Option<&str>, vite_api_url: Option<&str>) -> Settings {
        let legacy = legacy_base_url([api_url.map(str::to_string), vite_api_url.map(str::to_string)]);
        apply_legacy_overrides(layered(toml), legacy)
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    const FILE_WITH_URL: &str = r#"
        [api]
        base_url = "https://from-file.example.com"
    "#;

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "pretty");
    }

    #[test]
    fn test_empty_config_leaves_base_url_unset() {
        let settings = parse("");
        assert!(settings.api.base_url.is_none());
        assert_eq!(settings.logging.level, "info");
        assert!(settings.client_config().api_base_url.is_none());
    }

    #[test]
    fn test_base_url_from_file() {
        let settings = parse(
            r#"
            [api]
            base_url = "https://match.example.com"

            [logging]
            format = "json"
            "#,
        );

        assert_eq!(
            settings.client_config().api_base_url.as_deref(),
            Some("https://match.example.com")
        );
        assert_eq!(settings.logging.format, "json");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_legacy_url_overrides_file_value() {
        let settings = parse_with_legacy(FILE_WITH_URL, Some("https://api-url.example.com"), None);
        assert_eq!(settings.api.base_url.as_deref(), Some("https://api-url.example.com"));
    }

    #[test]
    fn test_api_url_takes_priority_over_vite_api_url() {
        let settings = parse_with_legacy(
            "",
            Some("https://api-url.example.com"),
            Some("https://vite.example.com"),
        );
        assert_eq!(settings.api.base_url.as_deref(), Some("https://api-url.example.com"));
    }

    #[test]
    fn test_vite_api_url_used_when_api_url_unset_or_blank() {
        let unset = parse_with_legacy("", None, Some("https://vite.example.com"));
        assert_eq!(unset.api.base_url.as_deref(), Some("https://vite.example.com"));

        let blank = parse_with_legacy("", Some("  "), Some("https://vite.example.com"));
        assert_eq!(blank.api.base_url.as_deref(), Some("https://vite.example.com"));
    }

    #[test]
    fn test_blank_legacy_values_ignored() {
        let settings = parse_with_legacy(FILE_WITH_URL, Some(""), Some(" "));
        assert_eq!(settings.api.base_url.as_deref(), Some("https://from-file.example.com"));

        let settings = parse_with_legacy("", Some(""), None);
        assert!(settings.api.base_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("hackmatch-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        let settings = settings.unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "pretty");
    }
}
