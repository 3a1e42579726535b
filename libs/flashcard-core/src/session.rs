//! Study session state machine.
//!
//! A session starts in `Loading`, moves to `EmptyDeck` or `Active` once cards
//! arrive, and ends in `ReviewComplete`. `EmptyDeck` and `ReviewComplete` are
//! terminal: every later action is ignored.

use crate::queue::ReviewQueue;
use crate::types::{Card, Tally};

/// Input to [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Initial fetch finished with these cards.
    Loaded(Vec<Card>),
    /// Initial fetch failed or the deck ids were unusable.
    LoadFailed,
    /// The user marked the current card.
    Answer { correct: bool },
    /// The user tapped the card to flip it.
    TapCard,
}

/// Session in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub queue: ReviewQueue,
    pub show_answer: bool,
    pub tally: Tally,
}

impl ActiveSession {
    fn new(queue: ReviewQueue) -> Self {
        Self {
            queue,
            show_answer: false,
            tally: Tally::default(),
        }
    }

    pub fn current(&self) -> &Card {
        self.queue.current()
    }

    /// Text on the visible face of the current card.
    pub fn visible_text(&self) -> &str {
        let card = self.queue.current();
        if self.show_answer {
            &card.back_text
        } else {
            &card.front_text
        }
    }
}

/// Session state for one mounted screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    EmptyDeck,
    Active(ActiveSession),
    ReviewComplete(Tally),
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Loading
    }
}

/// What an action did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The action does not apply in the current state.
    Ignored,
    /// State changed but stayed in the same phase.
    Updated,
    /// Left `Loading` for `Active`.
    Started,
    /// Left `Loading` for `EmptyDeck`.
    Empty,
    /// Moved to `ReviewComplete`.
    Completed,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::EmptyDeck | Self::ReviewComplete(_))
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        match self {
            Self::Active(session) => Some(session),
            _ => None,
        }
    }

    /// Current counts, if the session got past loading with cards.
    pub fn tally(&self) -> Option<Tally> {
        match self {
            Self::Active(session) => Some(session.tally),
            Self::ReviewComplete(tally) => Some(*tally),
            Self::Loading | Self::EmptyDeck => None,
        }
    }

    /// Apply one action.
    pub fn apply(&mut self, action: SessionAction) -> Transition {
        match self {
            Self::Loading => match action {
                SessionAction::Loaded(cards) => match ReviewQueue::new(cards) {
                    Some(queue) => {
                        *self = Self::Active(ActiveSession::new(queue));
                        Transition::Started
                    }
                    None => {
                        *self = Self::EmptyDeck;
                        Transition::Empty
                    }
                },
                SessionAction::LoadFailed => {
                    *self = Self::EmptyDeck;
                    Transition::Empty
                }
                SessionAction::Answer { .. } | SessionAction::TapCard => Transition::Ignored,
            },
            Self::Active(session) => match action {
                SessionAction::TapCard => {
                    session.show_answer = !session.show_answer;
                    Transition::Updated
                }
                SessionAction::Answer { correct } => {
                    if !answer(session, correct) {
                        return Transition::Updated;
                    }
                    let tally = session.tally;
                    *self = Self::ReviewComplete(tally);
                    Transition::Completed
                }
                SessionAction::Loaded(_) | SessionAction::LoadFailed => Transition::Ignored,
            },
            Self::EmptyDeck | Self::ReviewComplete(_) => Transition::Ignored,
        }
    }
}

/// Record an answer and move on. Returns `true` when the review is over.
///
/// A miss on a one-card deck ends the review instead of asking the card
/// again.
fn answer(session: &mut ActiveSession, correct: bool) -> bool {
    session.tally.record(correct);

    let was_last = session.queue.is_last();
    let was_single = session.queue.len() == 1;

    if !correct {
        session.queue.requeue_current();
    }
    session.show_answer = false;

    if !was_last {
        session.queue.advance();
        return false;
    }
    if correct || was_single {
        return true;
    }
    session.queue.advance();
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardId;
    use pretty_assertions::assert_eq;

    fn card(id: &str) -> Card {
        Card {
            card_id: CardId::new(id),
            front_text: format!("Question {id}"),
            back_text: format!("Answer {id}"),
            status: false,
        }
    }

    fn active(ids: &[&str]) -> SessionState {
        let mut state = SessionState::default();
        state.apply(SessionAction::Loaded(ids.iter().map(|id| card(id)).collect()));
        state
    }

    fn current_id(state: &SessionState) -> &str {
        state.active().unwrap().current().card_id.as_str()
    }

    #[test]
    fn loaded_cards_start_at_first() {
        let state = active(&["1", "2", "3"]);
        let session = state.active().unwrap();
        assert_eq!(session.queue.position(), 0);
        assert_eq!(session.queue.len(), 3);
        assert!(!session.show_answer);
        assert_eq!(session.tally, Tally::default());
    }

    #[test]
    fn loaded_without_cards_is_empty_deck() {
        let mut state = SessionState::Loading;
        assert_eq!(state.apply(SessionAction::Loaded(vec![])), Transition::Empty);
        assert_eq!(state, SessionState::EmptyDeck);
    }

    #[test]
    fn load_failure_is_empty_deck() {
        let mut state = SessionState::Loading;
        assert_eq!(state.apply(SessionAction::LoadFailed), Transition::Empty);
        assert_eq!(state, SessionState::EmptyDeck);
    }

    #[test]
    fn loading_is_left_once() {
        let mut state = active(&["1"]);
        let before = state.clone();
        assert_eq!(
            state.apply(SessionAction::Loaded(vec![card("9")])),
            Transition::Ignored
        );
        assert_eq!(state.apply(SessionAction::LoadFailed), Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn actions_while_loading_are_ignored() {
        let mut state = SessionState::Loading;
        assert_eq!(state.apply(SessionAction::TapCard), Transition::Ignored);
        assert_eq!(
            state.apply(SessionAction::Answer { correct: true }),
            Transition::Ignored
        );
        assert!(state.is_loading());
    }

    #[test]
    fn tap_toggles_answer() {
        let mut state = active(&["1"]);
        state.apply(SessionAction::TapCard);
        assert!(state.active().unwrap().show_answer);
        assert_eq!(state.active().unwrap().visible_text(), "Answer 1");
        state.apply(SessionAction::TapCard);
        assert!(!state.active().unwrap().show_answer);
        assert_eq!(state.active().unwrap().visible_text(), "Question 1");
    }

    #[test]
    fn correct_answer_keeps_length() {
        let mut state = active(&["1", "2", "3"]);
        state.apply(SessionAction::Answer { correct: true });
        let session = state.active().unwrap();
        assert_eq!(session.queue.len(), 3);
        assert_eq!(session.queue.position(), 1);
    }

    #[test]
    fn incorrect_answer_grows_queue_by_one() {
        let mut state = active(&["1", "2", "3"]);
        state.apply(SessionAction::Answer { correct: false });
        let session = state.active().unwrap();
        assert_eq!(session.queue.len(), 4);
        assert_eq!(session.queue.cards()[3].card_id.as_str(), "1");
        assert_eq!(current_id(&state), "2");
    }

    #[test]
    fn answer_hides_back_face() {
        let mut state = active(&["1", "2"]);
        state.apply(SessionAction::TapCard);
        state.apply(SessionAction::Answer { correct: false });
        assert!(!state.active().unwrap().show_answer);
    }

    #[test]
    fn both_correct_completes() {
        let mut state = active(&["Q1", "Q2"]);
        state.apply(SessionAction::Answer { correct: true });
        let transition = state.apply(SessionAction::Answer { correct: true });
        assert_eq!(transition, Transition::Completed);
        assert_eq!(
            state,
            SessionState::ReviewComplete(Tally {
                correct: 2,
                incorrect: 0
            })
        );
    }

    #[test]
    fn single_card_miss_completes_review() {
        // Preserved behaviour: a one-card deck answered wrong is not asked again.
        let mut state = active(&["Q1"]);
        let transition = state.apply(SessionAction::Answer { correct: false });
        assert_eq!(transition, Transition::Completed);
        assert_eq!(
            state,
            SessionState::ReviewComplete(Tally {
                correct: 0,
                incorrect: 1
            })
        );
    }

    #[test]
    fn missed_card_is_asked_again_at_tail() {
        let mut state = active(&["Q1", "Q2"]);

        state.apply(SessionAction::Answer { correct: false });
        assert_eq!(current_id(&state), "Q2");
        assert_eq!(state.active().unwrap().queue.len(), 3);

        state.apply(SessionAction::Answer { correct: true });
        assert_eq!(state.active().unwrap().queue.position(), 2);
        assert_eq!(current_id(&state), "Q1");

        state.apply(SessionAction::Answer { correct: true });
        assert_eq!(
            state,
            SessionState::ReviewComplete(Tally {
                correct: 2,
                incorrect: 1
            })
        );
    }

    #[test]
    fn miss_on_tail_moves_to_requeued_copy() {
        let mut state = active(&["Q1", "Q2"]);
        state.apply(SessionAction::Answer { correct: true });
        state.apply(SessionAction::Answer { correct: false });
        let session = state.active().unwrap();
        assert_eq!(session.queue.len(), 3);
        assert_eq!(session.queue.position(), 2);
        assert_eq!(current_id(&state), "Q2");
    }

    #[test]
    fn attempts_track_every_answer() {
        let mut state = active(&["a", "b", "c"]);
        let answers = [false, true, false, true, true, true];
        for (i, correct) in answers.into_iter().enumerate() {
            state.apply(SessionAction::Answer { correct });
            assert_eq!(state.tally().unwrap().attempts(), i as u32 + 1);
        }
        assert_eq!(
            state,
            SessionState::ReviewComplete(Tally {
                correct: 4,
                incorrect: 2
            })
        );
    }

    #[test]
    fn terminal_states_ignore_actions() {
        let mut complete = active(&["Q1"]);
        complete.apply(SessionAction::Answer { correct: true });
        let snapshot = complete.clone();
        for action in [
            SessionAction::TapCard,
            SessionAction::Answer { correct: false },
            SessionAction::Loaded(vec![card("x")]),
            SessionAction::LoadFailed,
        ] {
            assert_eq!(complete.apply(action), Transition::Ignored);
        }
        assert_eq!(complete, snapshot);

        let mut empty = SessionState::EmptyDeck;
        assert_eq!(empty.apply(SessionAction::TapCard), Transition::Ignored);
        assert!(empty.is_terminal());
    }
}
