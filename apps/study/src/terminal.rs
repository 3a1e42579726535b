//! Keyboard-driven terminal front end for the study screen.

use std::future::Future;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Instant;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::navigation::{Navigator, Route};
use crate::screen::StudyCardsScreen;

const KEYS: &str = "keys: <enter>/f flip  c correct  i incorrect  x close  q quit";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip the card, or confirm the modal.
    Continue,
    Correct,
    Incorrect,
    Close,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "f" | "flip" | "ok" => Ok(Self::Continue),
            "c" | "correct" | "y" => Ok(Self::Correct),
            "i" | "incorrect" | "n" => Ok(Self::Incorrect),
            "x" | "close" => Ok(Self::Close),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Navigator that remembers where the user asked to go.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    last: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(?route, "Navigating away from study screen");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}

/// Read commands from `input` until the screen navigates away, the user
/// quits, input ends, or `shutdown` resolves. Each view is written to `out`.
///
/// The screen is unmounted on every exit path.
pub async fn drive<N, R, W, F>(
    screen: &StudyCardsScreen<N>,
    input: R,
    mut out: W,
    shutdown: F,
) -> anyhow::Result<()>
where
    N: Navigator,
    R: AsyncBufRead + Unpin,
    W: Write,
    F: Future<Output = ()>,
{
    let mut lines = input.lines();
    tokio::pin!(shutdown);

    loop {
        let view = screen.view(Instant::now()).await;
        write!(out, "{}", view.render())?;
        if !view.is_modal() {
            writeln!(out, "{KEYS}")?;
        }
        out.flush()?;

        let next = tokio::select! {
            next = lines.next_line() => next?,
            () = &mut shutdown => {
                tracing::info!("Interrupted while studying");
                break;
            }
        };
        let Some(line) = next else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        let left = match command {
            Command::Continue if view.is_modal() => screen.dismiss().await,
            Command::Continue => {
                screen.tap_card(Instant::now()).await;
                false
            }
            Command::Correct => {
                screen.answer(true).await;
                false
            }
            Command::Incorrect => {
                screen.answer(false).await;
                false
            }
            Command::Close => screen.close().await,
            Command::Quit => true,
        };

        if left {
            break;
        }
    }

    screen.unmount();
    Ok(())
}
