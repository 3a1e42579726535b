//! Card sources the study screen loads decks from.

pub mod directory;
pub mod http;

use std::future::Future;

use flashcard_core::RawCard;
use serde::{Deserialize, Serialize};

pub use directory::DirectoryCardSource;
pub use http::HttpCardSource;

/// Card source errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Body of a deck's card listing, shared by every source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckCardsResponse {
    pub cards: Vec<RawCard>,
}

/// Fetches the cards of one deck.
pub trait CardSource {
    fn fetch_cards(
        &self,
        deck_id: &str,
    ) -> impl Future<Output = Result<Vec<RawCard>, SourceError>> + Send;
}
