use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::dm::ParseOptions;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MmemoryConfig {
    pub server: ServerConfig,
    pub members: MembersConfig,
    pub parser: ParserConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Display names of the two members whose DMs are archived.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MembersConfig {
    pub member1_name: String,
    pub member2_name: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ParserConfig {
    /// Extra characters tolerated around a nickname before a line stops
    /// counting as a nickname label.
    pub nickname_slack: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    pub engine: String,
    pub binary: String,
    pub language: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8787,
            log_level: "info".into(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            nickname_slack: crate::dm::DEFAULT_NICKNAME_SLACK,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: "tesseract".into(),
            binary: "tesseract".into(),
            language: "kor+eng".into(),
        }
    }
}

/// Returns `~/.mmemory/`
pub fn default_mmemory_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mmemory")
}

/// Returns the default config file path: `~/.mmemory/config.toml`
pub fn default_config_path() -> PathBuf {
    default_mmemory_dir().join("config.toml")
}

impl MmemoryConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            MmemoryConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (MMEMORY_MEMBER1, MMEMORY_MEMBER2, MMEMORY_LOG_LEVEL, MMEMORY_OCR_LANG).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MMEMORY_MEMBER1") {
            self.members.member1_name = val;
        }
        if let Ok(val) = std::env::var("MMEMORY_MEMBER2") {
            self.members.member2_name = val;
        }
        if let Ok(val) = std::env::var("MMEMORY_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("MMEMORY_OCR_LANG") {
            self.ocr.language = val;
        }
    }

    /// Parser options built from the configured member names and slack.
    pub fn parse_options(&self) -> ParseOptions {
        self.parse_options_for(None, None)
    }

    /// Like [`parse_options`](Self::parse_options), with either name replaced.
    pub fn parse_options_for(&self, member1: Option<&str>, member2: Option<&str>) -> ParseOptions {
        ParseOptions::new(
            member1.unwrap_or(&self.members.member1_name),
            member2.unwrap_or(&self.members.member2_name),
        )
        .with_nickname_slack(self.parser.nickname_slack)
    }

    /// Resolve the OCR binary, expanding `~` if needed.
    pub fn resolved_ocr_binary(&self) -> PathBuf {
        expand_tilde(&self.ocr.binary)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
