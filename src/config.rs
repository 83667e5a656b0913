use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
    pub summary_words: Option<u32>,
    pub preview_words: Option<usize>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
default_model = "gemini-1.5-flash"
summary_words = 400
preview_words = 200
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gemini-1.5-flash"));
        assert_eq!(config.summary_words, Some(400));
        assert_eq!(config.preview_words, Some(200));
    }

    #[test]
    fn test_parse_empty_config() {
        let toml_str = "";
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.default_model.is_none());
        assert!(config.summary_words.is_none());
        assert!(config.preview_words.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"summary_words = 100"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.summary_words, Some(100));
        assert!(config.default_model.is_none());
    }
}
