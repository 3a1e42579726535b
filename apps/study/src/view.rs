//! Presentation layer: what the study screen shows for each session state.

use std::fmt::Write as _;
use std::time::Instant;

use flashcard_core::{FlipAnimation, SessionState, Tally};
use unicode_width::UnicodeWidthStr;

pub const SCREEN_TITLE: &str = "Study Cards";
pub const REVEAL_HINT: &str = "Tap the card to reveal the answer";
pub const EMPTY_DECK_TITLE: &str = "No cards available";
pub const EMPTY_DECK_SUBTITLE: &str = "There are no cards to study in the selected decks.";
pub const COMPLETE_TITLE: &str = "Review complete!";
pub const HOME_ACTION: &str = "Go home";

const MIN_CARD_WIDTH: usize = 32;

/// Rendered screen.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Modal(Modal),
    Card(CardView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Error,
    Success,
}

/// Dismissible modal; its single action navigates home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub subtitle: String,
    pub action_label: String,
}

impl Modal {
    fn empty_deck() -> Self {
        Self {
            kind: ModalKind::Error,
            title: EMPTY_DECK_TITLE.to_string(),
            subtitle: EMPTY_DECK_SUBTITLE.to_string(),
            action_label: HOME_ACTION.to_string(),
        }
    }

    fn review_complete(tally: Tally) -> Self {
        Self {
            kind: ModalKind::Success,
            title: COMPLETE_TITLE.to_string(),
            subtitle: format!(
                "Correct: {} | Incorrect: {}",
                tally.correct, tally.incorrect
            ),
            action_label: HOME_ACTION.to_string(),
        }
    }
}

/// Active card screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub face: CardFace,
    /// 1-based position of the current card.
    pub position: usize,
    pub total: usize,
    pub hint: Option<String>,
    pub incorrect: ActionButton,
    pub correct: ActionButton,
}

impl CardView {
    pub fn counter(&self) -> String {
        format!("Card {} of {}", self.position, self.total)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardFace {
    pub text: String,
    pub showing_answer: bool,
    /// Rotation of the card container.
    pub rotation_degrees: f32,
    /// Rotation of the text, kept in step with the container.
    pub text_rotation_degrees: f32,
}

impl CardFace {
    pub fn is_flipping(&self) -> bool {
        self.rotation_degrees > 0.0 && self.rotation_degrees < 180.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    /// Answer this button submits.
    pub correct: bool,
    /// External flag the button reacts to; follows answer visibility.
    pub when_change: bool,
}

impl View {
    pub fn from_state(state: &SessionState, flip: &FlipAnimation, now: Instant) -> Self {
        match state {
            SessionState::Loading => Self::Loading,
            SessionState::EmptyDeck => Self::Modal(Modal::empty_deck()),
            SessionState::ReviewComplete(tally) => Self::Modal(Modal::review_complete(*tally)),
            SessionState::Active(session) => {
                let rotation = flip.rotation_at(now);
                let show_answer = session.show_answer;
                Self::Card(CardView {
                    title: SCREEN_TITLE.to_string(),
                    face: CardFace {
                        text: session.visible_text().to_string(),
                        showing_answer: show_answer,
                        rotation_degrees: rotation,
                        text_rotation_degrees: rotation,
                    },
                    position: session.queue.position() + 1,
                    total: session.queue.len(),
                    hint: (!show_answer).then(|| REVEAL_HINT.to_string()),
                    incorrect: ActionButton {
                        label: "Incorrect".to_string(),
                        correct: false,
                        when_change: show_answer,
                    },
                    correct: ActionButton {
                        label: "Correct".to_string(),
                        correct: true,
                        when_change: show_answer,
                    },
                })
            }
        }
    }

    pub fn is_modal(&self) -> bool {
        matches!(self, Self::Modal(_))
    }

    /// Plain-text rendering for a terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Loading => out.push_str("Loading cards...\n"),
            Self::Modal(modal) => {
                let marker = match modal.kind {
                    ModalKind::Error => "!",
                    ModalKind::Success => "*",
                };
                let _ = writeln!(out, "[{marker}] {}", modal.title);
                let _ = writeln!(out, "    {}", modal.subtitle);
                let _ = writeln!(out, "    > {}", modal.action_label);
            }
            Self::Card(card) => {
                // Terminal columns, so wide CJK and emoji glyphs keep the box square.
                let width = card.face.text.width().max(MIN_CARD_WIDTH);
                let border = format!("+{}+", "-".repeat(width + 2));
                let side = if card.face.showing_answer { "Answer" } else { "Question" };

                let _ = writeln!(out, "{}  [x] close", card.title);
                let _ = writeln!(out, "{}", card.counter());
                let _ = writeln!(out, "{border}");
                let _ = writeln!(out, "| {} |", pad(side, width));
                let _ = writeln!(out, "| {} |", pad(&card.face.text, width));
                let _ = writeln!(out, "{border}");
                if let Some(hint) = &card.hint {
                    let _ = writeln!(out, "{hint}");
                }
                let _ = writeln!(
                    out,
                    "[{}]  [{}]",
                    card.incorrect.label, card.correct.label
                );
            }
        }
        out
    }
}

/// Left-align `text` in `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
