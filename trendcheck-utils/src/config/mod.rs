//! Configuration file loading
//!
//! Reads TOML, JSON or YAML documents into any deserializable type. The
//! format is picked from the file extension. Validation belongs to the
//! target type's `Deserialize` impl, so a value returned from here is
//! already whatever the target type considers valid.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::{Result, UtilError};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            _ => Err(UtilError::Config(format!(
                "Unsupported config format: '{extension}' (expected toml, json, yaml or yml)"
            ))),
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml => write!(f, "TOML"),
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Parse configuration from an in-memory document
pub fn load_config_str<T>(content: &str, format: ConfigFormat) -> Result<T>
where
    T: DeserializeOwned,
{
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| UtilError::Config(format!("TOML parse error: {e}"))),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| UtilError::Config(format!("JSON parse error: {e}"))),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| UtilError::Config(format!("YAML parse error: {e}"))),
    }
}

/// Load configuration from file (format auto-detected from extension)
pub fn load_config<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    load_config_str(&content, format).map_err(|e| match e {
        UtilError::Config(msg) => UtilError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct TestConfig {
        name: String,
        port: u16,
        enabled: bool,
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.JSON")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
        assert!(ConfigFormat::from_path(Path::new("a.ini")).is_err());
        assert!(ConfigFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_load_toml() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("test.toml");
        std::fs::write(&config_path, "name = \"test\"\nport = 9000\nenabled = true\n")?;

        let config: TestConfig = load_config(&config_path)?;

        assert_eq!(
            config,
            TestConfig { name: "test".to_string(), port: 9000, enabled: true }
        );
        Ok(())
    }

    #[test]
    fn test_load_yaml_partial() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("partial.yaml");
        std::fs::write(&config_path, "port: 7777\n")?;

        let config: TestConfig = load_config(&config_path)?;

        assert_eq!(config.port, 7777);
        assert_eq!(config.name, "");
        assert!(!config.enabled);
        Ok(())
    }

    #[test]
    fn test_parse_error_names_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("broken.json");
        std::fs::write(&config_path, "{ not json")?;

        let err = load_config::<TestConfig>(&config_path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("broken.json"), "{msg}");
        assert!(msg.contains("JSON parse error"), "{msg}");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config::<TestConfig>(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, UtilError::Io(_)));
    }
}
