//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using DeckIdsError.
pub type Result<T> = std::result::Result<T, DeckIdsError>;

/// Reasons a deck-id parameter cannot start a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckIdsError {
    #[error("no deck ids were supplied")]
    Missing,

    #[error("expected a single comma-separated string, got {count} values")]
    NotSingleValue { count: usize },

    #[error("deck id list is empty")]
    Empty,
}

/// Reasons a stored queue cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("review queue has no cards")]
    Empty,

    #[error("cursor {cursor} is past the end of a queue of {len} cards")]
    CursorOutOfRange { cursor: usize, len: usize },
}
