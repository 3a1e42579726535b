//! Study cards screen: loads decks, runs the review session and hands out
//! views of it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use flashcard_core::{DeckIdsParam, FlipAnimation, SessionAction, SessionState, Transition};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::LoadError;
use crate::loader::load_cards;
use crate::navigation::{Navigator, Route};
use crate::source::CardSource;
use crate::view::View;

/// Mutable screen state, guarded together so a tap flips both at once.
struct ScreenInner {
    state: SessionState,
    flip: FlipAnimation,
}

/// One mounted study screen.
///
/// All methods take `&self`; the session lives behind a mutex that is never
/// held across the card fetch. After [`unmount`](Self::unmount) every update,
/// including a late load result, is dropped.
pub struct StudyCardsScreen<N> {
    session_id: Uuid,
    deck_ids: Option<DeckIdsParam>,
    navigator: N,
    mounted: AtomicBool,
    inner: Mutex<ScreenInner>,
}

impl<N: Navigator> StudyCardsScreen<N> {
    pub fn new(navigator: N, deck_ids: Option<DeckIdsParam>, flip_duration: Duration) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            deck_ids,
            navigator,
            mounted: AtomicBool::new(true),
            inner: Mutex::new(ScreenInner {
                state: SessionState::Loading,
                flip: FlipAnimation::new(flip_duration),
            }),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Mark the screen as gone. Later results and actions are ignored.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            tracing::debug!(session_id = %self.session_id, "Study screen unmounted");
        }
    }

    /// Snapshot of the session state.
    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// View of the screen at `now`.
    pub async fn view(&self, now: Instant) -> View {
        let inner = self.inner.lock().await;
        View::from_state(&inner.state, &inner.flip, now)
    }

    /// Fetch the requested decks and start the session.
    ///
    /// Any load error ends in the empty-deck state; nothing is retried.
    #[tracing::instrument(skip_all, fields(session_id = %self.session_id))]
    pub async fn load<S: CardSource>(&self, source: &S) -> Transition {
        let action = match load_cards(source, self.deck_ids.as_ref()).await {
            Ok(cards) => {
                tracing::info!(count = cards.len(), "Loaded cards");
                SessionAction::Loaded(cards)
            }
            Err(err @ LoadError::Fetch { .. }) => {
                tracing::error!(error = %err, "Card retrieval failed");
                SessionAction::LoadFailed
            }
            Err(err) => {
                tracing::warn!(error = %err, "No cards to study");
                SessionAction::LoadFailed
            }
        };

        // Mounted flag is read under the lock.
        let mut inner = self.inner.lock().await;
        if !self.is_mounted() {
            tracing::debug!("Screen unmounted before cards arrived, dropping result");
            return Transition::Ignored;
        }
        inner.state.apply(action)
    }

    /// Flip the current card.
    pub async fn tap_card(&self, now: Instant) -> Transition {
        let mut inner = self.inner.lock().await;
        if !self.is_mounted() {
            return Transition::Ignored;
        }
        let transition = inner.state.apply(SessionAction::TapCard);
        if transition != Transition::Ignored {
            inner.flip.toggle(now);
        }
        transition
    }

    /// Mark the current card and move on.
    pub async fn answer(&self, correct: bool) -> Transition {
        let mut inner = self.inner.lock().await;
        if !self.is_mounted() {
            return Transition::Ignored;
        }
        let transition = inner.state.apply(SessionAction::Answer { correct });
        match transition {
            Transition::Ignored => {}
            Transition::Completed => {
                inner.flip.reset();
                if let Some(tally) = inner.state.tally() {
                    tracing::info!(
                        session_id = %self.session_id,
                        correct = tally.correct,
                        incorrect = tally.incorrect,
                        "Review complete"
                    );
                }
            }
            _ => inner.flip.reset(),
        }
        transition
    }

    /// Header close control. Navigates back while a card is showing.
    pub async fn close(&self) -> bool {
        let inner = self.inner.lock().await;
        if !self.is_mounted() {
            return false;
        }
        let active = inner.state.active().is_some();
        drop(inner);
        if active {
            self.navigator.navigate(Route::Back);
        }
        active
    }

    /// Modal action. Navigates home from the empty-deck or summary modal.
    pub async fn dismiss(&self) -> bool {
        let inner = self.inner.lock().await;
        if !self.is_mounted() {
            return false;
        }
        let terminal = inner.state.is_terminal();
        drop(inner);
        if terminal {
            self.navigator.navigate(Route::Home);
        }
        terminal
    }
}
