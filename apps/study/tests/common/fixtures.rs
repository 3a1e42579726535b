//! Test fixtures and factory functions for card data.

use flashcard_core::{CardId, RawCard};

/// Raw card with both faces filled in.
pub fn raw_card(id: &str, front: &str, back: &str) -> RawCard {
    RawCard {
        id: CardId::new(id),
        front_text: Some(front.to_string()),
        back_text: Some(back.to_string()),
        status: Some(false),
    }
}

/// Raw card with only an id.
pub fn bare_card(id: &str) -> RawCard {
    RawCard {
        id: CardId::new(id),
        front_text: None,
        back_text: None,
        status: None,
    }
}

/// Generate `count` cards with ids `{prefix}-1`, `{prefix}-2`, ...
pub fn sample_deck(prefix: &str, count: usize) -> Vec<RawCard> {
    (1..=count)
        .map(|i| {
            raw_card(
                &format!("{prefix}-{i}"),
                &format!("Question {i}?"),
                &format!("Answer {i}."),
            )
        })
        .collect()
}

/// Deck body as served by the backend and stored in deck files.
pub fn deck_json(cards: &[RawCard]) -> String {
    serde_json::json!({ "cards": cards }).to_string()
}
