//! Core types for study sessions.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Shown when a card arrives without front text.
pub const MISSING_QUESTION: &str = "No question provided";

/// Shown when a card arrives without back text.
pub const MISSING_ANSWER: &str = "No answer provided";

/// Opaque card identifier.
///
/// Backends send either a JSON string or an integer; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(s) => Self(s),
            Wire::Signed(n) => Self(n.to_string()),
            Wire::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// Card record as returned by a card source, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub id: CardId,
    #[serde(default, alias = "front_text", skip_serializing_if = "Option::is_none")]
    pub front_text: Option<String>,
    #[serde(default, alias = "back_text", skip_serializing_if = "Option::is_none")]
    pub back_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl RawCard {
    /// Fill in placeholder text and a `false` status where fields are absent.
    pub fn normalize(self) -> Card {
        Card {
            card_id: self.id,
            front_text: self
                .front_text
                .unwrap_or_else(|| MISSING_QUESTION.to_string()),
            back_text: self.back_text.unwrap_or_else(|| MISSING_ANSWER.to_string()),
            status: self.status.unwrap_or(false),
        }
    }
}

/// A card under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub card_id: CardId,
    pub front_text: String,
    pub back_text: String,
    /// Carried through from the source; review logic never reads it.
    pub status: bool,
}

impl From<RawCard> for Card {
    fn from(raw: RawCard) -> Self {
        raw.normalize()
    }
}

/// Running answer counts for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: u32,
    pub incorrect: u32,
}

impl Tally {
    /// Number of answer actions taken, requeued cards included.
    pub fn attempts(&self) -> u32 {
        self.correct + self.incorrect
    }

    pub(crate) fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }
}
