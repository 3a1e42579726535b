//! Error types for the study screen.

use flashcard_core::DeckIdsError;
use thiserror::Error;

use crate::source::SourceError;

/// Why the initial card load produced nothing to study.
///
/// Every variant ends in the empty-deck modal; the distinction only shows
/// up in logs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid deck ids: {0}")]
    InvalidDeckIds(#[from] DeckIdsError),

    #[error("no cards in decks: {}", .0.join(", "))]
    NoCards(Vec<String>),

    #[error("failed to fetch deck {deck_id}: {source}")]
    Fetch {
        deck_id: String,
        #[source]
        source: SourceError,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
