//! Core study-session library shared by the study screen and its tools.
//!
//! Provides:
//! - Card model and normalization of source records
//! - Deck-id route parameter parsing
//! - Review queue with requeue-on-miss
//! - Session state machine (single reducer)
//! - Flip animation math (ease-in-out, rotation)

pub mod error;
pub mod flip;
pub mod params;
pub mod queue;
pub mod session;
pub mod types;

pub use error::{DeckIdsError, QueueError, Result};
pub use flip::{ease_in_out, rotation_degrees, FlipAnimation, DEFAULT_FLIP_DURATION};
pub use params::{parse_deck_ids, DeckIdsParam};
pub use queue::ReviewQueue;
pub use session::{ActiveSession, SessionAction, SessionState, Transition};
pub use types::{Card, CardId, RawCard, Tally, MISSING_ANSWER, MISSING_QUESTION};
