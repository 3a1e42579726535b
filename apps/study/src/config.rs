//! Environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use flashcard_core::DEFAULT_FLIP_DURATION;

use crate::error::ConfigError;

pub const BACKEND_URL_VAR: &str = "STUDY_BACKEND_URL";
pub const API_TOKEN_VAR: &str = "STUDY_API_TOKEN";
pub const CARDS_DIR_VAR: &str = "STUDY_CARDS_DIR";
pub const FLIP_DURATION_VAR: &str = "STUDY_FLIP_DURATION_MS";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Where decks are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http {
        base_url: String,
        token: Option<String>,
    },
    Directory(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceConfig,
    pub flip_duration: Duration,
    pub log_filter: String,
}

fn default_cards_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jirehs-flashcards")
        .join("decks")
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let source = match get(BACKEND_URL_VAR) {
            Some(base_url) => SourceConfig::Http {
                base_url: base_url.trim().trim_end_matches('/').to_string(),
                token: get(API_TOKEN_VAR),
            },
            None => SourceConfig::Directory(
                get(CARDS_DIR_VAR)
                    .map(PathBuf::from)
                    .unwrap_or_else(default_cards_dir),
            ),
        };

        let flip_duration = match get(FLIP_DURATION_VAR) {
            Some(value) => {
                let millis = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                    key: FLIP_DURATION_VAR,
                    value: value.clone(),
                })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_FLIP_DURATION,
        };

        let log_filter = get(LOG_FILTER_VAR).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            source,
            flip_duration,
            log_filter,
        })
    }
}
