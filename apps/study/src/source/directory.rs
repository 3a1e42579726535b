//! Local deck directory source.
//!
//! Each deck is a `{deck_id}.json` file holding the same body the backend
//! returns: `{ "cards": [...] }`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use flashcard_core::RawCard;

use super::{CardSource, DeckCardsResponse, SourceError};

#[derive(Debug, Clone)]
pub struct DirectoryCardSource {
    root: PathBuf,
}

impl DirectoryCardSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a deck file. Ids that would escape the root are refused.
    pub fn deck_path(&self, deck_id: &str) -> Option<PathBuf> {
        let escapes = deck_id.is_empty()
            || deck_id == "."
            || deck_id.contains("..")
            || deck_id.contains(['/', '\\']);
        if escapes {
            return None;
        }
        Some(self.root.join(format!("{deck_id}.json")))
    }
}

impl CardSource for DirectoryCardSource {
    async fn fetch_cards(&self, deck_id: &str) -> Result<Vec<RawCard>, SourceError> {
        let path = self
            .deck_path(deck_id)
            .ok_or_else(|| SourceError::DeckNotFound(deck_id.to_string()))?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::DeckNotFound(deck_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let body: DeckCardsResponse = serde_json::from_str(&content)
            .map_err(|e| SourceError::Parse(format!("{}: {}", path.display(), e)))?;

        Ok(body.cards)
    }
}
