use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::schema::RunwayConfig;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConfigLoadResult<T> = Result<T, ConfigLoadError>;

pub const CONFIG_PATH_ENV: &str = "RUNWAY_CONFIG_PATH";

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn discover_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            tracing::debug!("Using config path from {}: {}", CONFIG_PATH_ENV, path);
            return PathBuf::from(path);
        }

        let path = dirs::config_dir()
            .map(|dir| dir.join("runway").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".runway").join("config.toml"));
        tracing::debug!("Using default config path: {}", path.display());
        path
    }

    pub fn load_default() -> ConfigLoadResult<RunwayConfig> {
        let path = Self::discover_config_path();
        Self::load_or_default(&path)
    }

    pub fn load(path: &Path) -> ConfigLoadResult<RunwayConfig> {
        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn load_or_default(path: &Path) -> ConfigLoadResult<RunwayConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(RunwayConfig::default())
        }
    }

    pub fn parse(content: &str) -> ConfigLoadResult<RunwayConfig> {
        let config: RunwayConfig = toml::from_str(content)?;
        config.validate().map_err(ConfigLoadError::InvalidConfig)?;

        tracing::debug!(
            providers = config.providers.len(),
            page_size = config.pipelines.page_size,
            "Loaded config"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::infrastructure::config::schema::{
        LoggingConfig,
        PipelineListingConfig,
    };

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config.pipelines.page, 0);
        assert_eq!(config.pipelines.page_size, 1000);
        assert_eq!(config.pipelines.sort, "");
        assert!(config.pipelines.ascending);
        assert!(config.providers.is_empty());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_logging_section() {
        let content = r#"
[logging]
filter = "runway_core=trace"
with_target = false
"#;

        let config = ConfigLoader::parse(content).unwrap();
        assert_eq!(config.logging.filter.as_deref(), Some("runway_core=trace"));
        assert!(!config.logging.verbose);
        assert!(!config.logging.with_target);
    }

    #[test]
    fn test_parse_rejects_blank_logging_filter() {
        let result = ConfigLoader::parse("[logging]\nfilter = \" \"\n");
        assert!(matches!(result, Err(ConfigLoadError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_pipeline_listing() {
        let content = r#"
[pipelines]
page_size = 50
sort = "name"
ascending = false
"#;

        let config = ConfigLoader::parse(content).unwrap();
        assert_eq!(config.pipelines.page, 0);
        assert_eq!(config.pipelines.page_size, 50);
        assert_eq!(config.pipelines.sort, "name");
        assert!(!config.pipelines.ascending);
    }

    #[test]
    fn test_parse_with_providers() {
        let content = r#"
[providers.ocp-dev]
type = "openshift"
version = "3.11"

[providers.ocp-dev.config]
master_url = "https://ocp.example.com:8443"

[providers.local]
type = "docker"
version = "1"
"#;

        let config = ConfigLoader::parse(content).unwrap();
        let providers = config.providers();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].key.id, "ocp-dev");
        assert_eq!(providers[0].key.provider_type_key.id, "openshift");
        assert_eq!(
            providers[0].configuration.values.get("master_url").map(String::as_str),
            Some("https://ocp.example.com:8443")
        );
        assert_eq!(providers[1].key.id, "local");
    }

    #[test]
    fn test_parse_rejects_zero_page_size() {
        let content = r#"
[pipelines]
page_size = 0
"#;

        let result = ConfigLoader::parse(content);
        assert!(matches!(result, Err(ConfigLoadError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let result = ConfigLoader::parse("[pipelines\npage_size = 1");
        assert!(matches!(result, Err(ConfigLoadError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        assert!(matches!(
            ConfigLoader::load(&path),
            Err(ConfigLoadError::FileNotFound(_))
        ));

        let config = ConfigLoader::load_or_default(&path).unwrap();
        assert_eq!(config.pipelines, PipelineListingConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[pipelines]\npage = 2\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.pipelines.page, 2);
    }
}
