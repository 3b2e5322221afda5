//! Configuration management for the CLI.

use crate::cli::CliFormat;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Display settings
    #[serde(default)]
    pub settings: Settings,

    /// Pipeline composition settings
    #[serde(default)]
    pub pipeline: PipelineSettings,
}

/// Global display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Command history size for the REPL
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: default_history_size(),
        }
    }
}

/// Pipeline composition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Corpus directory (built-in records when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_dir: Option<PathBuf>,

    /// Provenance ledger path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_path: Option<PathBuf>,

    /// Directory for per-session analysis documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Contradiction detector registry name
    #[serde(default = "default_detector")]
    pub detector: String,

    /// Tone analyzer registry name
    #[serde(default = "default_tone_analyzer")]
    pub tone_analyzer: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            corpus_dir: None,
            ledger_path: None,
            output_dir: None,
            detector: default_detector(),
            tone_analyzer: default_tone_analyzer(),
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

impl Config {
    /// Directory holding the default config, ledger, and output files.
    pub fn data_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".veridex"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    /// Load configuration from the default path or create defaults.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };
        Self::load_from(&path)
    }

    /// Load configuration from a specific path, defaulting when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Could not serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolved provenance ledger path.
    pub fn ledger_path(&self) -> Result<PathBuf> {
        match &self.pipeline.ledger_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("provenance.log")),
        }
    }

    /// Resolved output directory for analysis documents.
    pub fn output_dir(&self) -> Result<PathBuf> {
        match &self.pipeline.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::data_dir()?.join("output")),
        }
    }

    /// REPL history file path.
    pub fn history_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("history"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert!(config.settings.color);
        assert_eq!(config.pipeline.detector, "heuristic");
        assert_eq!(config.pipeline.tone_analyzer, "keyword");
        assert!(config.pipeline.corpus_dir.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[settings]\ncolor = false\n\n[pipeline]\ndetector = \"heuristic\"\n",
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.pipeline.tone_analyzer, "keyword");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "settings = 42").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}

fn default_true() -> bool {
    true
}

fn default_history_size() -> usize {
    1000
}

fn default_detector() -> String {
    "heuristic".to_string()
}

fn default_tone_analyzer() -> String {
    "keyword".to_string()
}
