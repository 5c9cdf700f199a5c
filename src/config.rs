use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::case::Language;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Skips the language selection screen when set.
    #[serde(default)]
    pub language: Option<Language>,
    /// Directory of case files replacing the built-in cases.
    #[serde(default)]
    pub cases_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("debug-detective")
        .join("debug-detective.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            cases_dir: None,
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("debug-detective")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.language, None);
        assert_eq!(config.cases_dir, None);
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.ends_with("debug-detective.log"));
    }

    #[test]
    fn test_config_reads_language_and_cases_dir() {
        let toml_str = r#"
language = "css"
cases_dir = "/tmp/cases"
log_level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.language, Some(Language::Css));
        assert_eq!(config.cases_dir, Some(PathBuf::from("/tmp/cases")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_unknown_language_rejected() {
        assert!(toml::from_str::<Config>("language = \"rust\"").is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_load_from_invalid_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "language = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
