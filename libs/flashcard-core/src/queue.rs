//! Review queue with requeue-on-miss.

use crate::error::QueueError;
use crate::types::Card;
use serde::{Deserialize, Serialize};

/// Ordered cards for one session plus a cursor at the card being asked.
///
/// Answered entries stay in place behind the cursor so that position and
/// length keep describing "card N of M". Requeued cards are appended as
/// copies, so the same card can appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredQueue")]
pub struct ReviewQueue {
    cards: Vec<Card>,
    cursor: usize,
}

/// Wire shape of a queue, checked before it becomes a `ReviewQueue`.
#[derive(Deserialize)]
struct StoredQueue {
    cards: Vec<Card>,
    cursor: usize,
}

impl TryFrom<StoredQueue> for ReviewQueue {
    type Error = QueueError;

    fn try_from(stored: StoredQueue) -> Result<Self, Self::Error> {
        let len = stored.cards.len();
        if len == 0 {
            return Err(QueueError::Empty);
        }
        if stored.cursor >= len {
            return Err(QueueError::CursorOutOfRange {
                cursor: stored.cursor,
                len,
            });
        }
        Ok(Self {
            cards: stored.cards,
            cursor: stored.cursor,
        })
    }
}

impl ReviewQueue {
    /// Create a queue positioned at the first card. Returns `None` if empty.
    pub fn new(cards: Vec<Card>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self { cards, cursor: 0 })
    }

    /// Card currently being asked.
    pub fn current(&self) -> &Card {
        &self.cards[self.cursor]
    }

    /// Zero-based position of the current card.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total entries, including answered and requeued ones.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the current card is the tail of the queue.
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.cards.len()
    }

    /// Push a copy of the current card onto the tail.
    pub fn requeue_current(&mut self) {
        let card = self.current().clone();
        self.cards.push(card);
    }

    /// Move to the next card. Returns `false`, without moving, at the tail.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
