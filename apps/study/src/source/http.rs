//! Backend-backed card source.

use flashcard_core::RawCard;
use reqwest::{Client, Url};

use super::{CardSource, DeckCardsResponse, SourceError};

/// Reads decks from `GET {base}/api/decks/{deck_id}/cards`.
#[derive(Debug, Clone)]
pub struct HttpCardSource {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpCardSource {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| SourceError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            token,
        })
    }

    /// URL of a deck's card listing; the deck id is percent-encoded.
    pub fn deck_url(&self, deck_id: &str) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "decks", deck_id, "cards"]);
        Ok(url)
    }
}

impl CardSource for HttpCardSource {
    async fn fetch_cards(&self, deck_id: &str) -> Result<Vec<RawCard>, SourceError> {
        let url = self.deck_url(deck_id)?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SourceError::Backend { status, message });
        }

        let body: DeckCardsResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(body.cards)
    }
}
