//! Shared test doubles for the study screen integration tests.
//!
//! - `StaticCardSource` serves decks from memory and records every fetch
//! - `GatedCardSource` holds its answer until the test releases it
//! - `RecordingNavigator` collects navigation requests

#![allow(dead_code)]

pub mod fixtures;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use flashcard_core::{DeckIdsParam, RawCard};
use tokio::sync::Notify;

use jirehs_flashcards_study::navigation::{Navigator, Route};
use jirehs_flashcards_study::screen::StudyCardsScreen;
use jirehs_flashcards_study::source::{CardSource, SourceError};

/// Flip duration used by screen tests.
pub const FLIP: Duration = Duration::from_millis(300);

/// In-memory card source. Unknown decks are empty.
#[derive(Debug, Default)]
pub struct StaticCardSource {
    decks: HashMap<String, Vec<RawCard>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticCardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deck(mut self, deck_id: &str, cards: Vec<RawCard>) -> Self {
        self.decks.insert(deck_id.to_string(), cards);
        self
    }

    pub fn failing(mut self, deck_id: &str) -> Self {
        self.failing.insert(deck_id.to_string());
        self
    }

    /// Deck ids fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CardSource for StaticCardSource {
    async fn fetch_cards(&self, deck_id: &str) -> Result<Vec<RawCard>, SourceError> {
        self.calls.lock().unwrap().push(deck_id.to_string());
        if self.failing.contains(deck_id) {
            return Err(SourceError::Network("connection refused".to_string()));
        }
        Ok(self.decks.get(deck_id).cloned().unwrap_or_default())
    }
}

/// Card source that waits for `release` before answering.
#[derive(Debug, Default)]
pub struct GatedCardSource {
    cards: Vec<RawCard>,
    gate: Arc<Notify>,
}

impl GatedCardSource {
    pub fn new(cards: Vec<RawCard>) -> Self {
        Self {
            cards,
            gate: Arc::new(Notify::new()),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

impl CardSource for GatedCardSource {
    async fn fetch_cards(&self, _deck_id: &str) -> Result<Vec<RawCard>, SourceError> {
        self.gate.notified().await;
        Ok(self.cards.clone())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Screen for a single comma-separated deck-id string.
pub fn screen(deck_ids: &str) -> StudyCardsScreen<Arc<RecordingNavigator>> {
    screen_with(Some(DeckIdsParam::Single(deck_ids.to_string())))
}

pub fn screen_with(deck_ids: Option<DeckIdsParam>) -> StudyCardsScreen<Arc<RecordingNavigator>> {
    StudyCardsScreen::new(Arc::new(RecordingNavigator::default()), deck_ids, FLIP)
}
