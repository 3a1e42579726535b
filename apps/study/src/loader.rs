//! Initial card load for a study session.

use flashcard_core::{parse_deck_ids, Card, DeckIdsParam};

use crate::error::LoadError;
use crate::source::CardSource;

/// Fetch every requested deck, one after another, and concatenate the cards.
///
/// Order is deck-list order, then the order each deck returned its cards.
/// Invalid deck ids fail before any fetch; a failure on any deck discards
/// whatever earlier decks returned.
pub async fn load_cards<S: CardSource>(
    source: &S,
    deck_ids: Option<&DeckIdsParam>,
) -> Result<Vec<Card>, LoadError> {
    let deck_ids = parse_deck_ids(deck_ids)?;

    let mut cards = Vec::new();
    for deck_id in &deck_ids {
        let raw = source
            .fetch_cards(deck_id)
            .await
            .map_err(|err| LoadError::Fetch {
                deck_id: deck_id.clone(),
                source: err,
            })?;
        tracing::debug!(deck_id = %deck_id, count = raw.len(), "Fetched deck");
        cards.extend(raw.into_iter().map(Card::from));
    }

    if cards.is_empty() {
        return Err(LoadError::NoCards(deck_ids));
    }
    Ok(cards)
}
