//! Deck-id parameter handed over by the navigation layer.

use crate::error::{DeckIdsError, Result};
use serde::{Deserialize, Serialize};

/// Raw `deckIds` route parameter.
///
/// Only `Single` is a valid shape; `Many` shows up when a router passes the
/// parameter as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeckIdsParam {
    Single(String),
    Many(Vec<String>),
}

impl DeckIdsParam {
    /// Build a parameter from positional values, the way a router would.
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(Self::Single),
            _ => Some(Self::Many(values)),
        }
    }
}

/// Split a comma-separated deck-id parameter into individual ids.
///
/// Pieces are trimmed and blank pieces dropped; order is preserved.
pub fn parse_deck_ids(param: Option<&DeckIdsParam>) -> Result<Vec<String>> {
    let raw = match param {
        None => return Err(DeckIdsError::Missing),
        Some(DeckIdsParam::Many(values)) => {
            return Err(DeckIdsError::NotSingleValue {
                count: values.len(),
            })
        }
        Some(DeckIdsParam::Single(raw)) => raw,
    };

    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    if ids.is_empty() {
        return Err(DeckIdsError::Empty);
    }
    Ok(ids)
}
