pub mod config;
pub mod error;
pub mod loader;
pub mod navigation;
pub mod screen;
pub mod source;
pub mod terminal;
pub mod view;

use std::time::Instant;

use flashcard_core::DeckIdsParam;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, SourceConfig};
use crate::navigation::Navigator;
use crate::screen::StudyCardsScreen;
use crate::source::{CardSource, DirectoryCardSource, HttpCardSource};
use crate::terminal::TerminalNavigator;

pub use error::{ConfigError, LoadError};
pub use loader::load_cards;
pub use navigation::Route;
pub use source::SourceError;
pub use view::View;

/// Run the study screen in the terminal.
///
/// Deck ids come from the command line: one argument is the comma-separated
/// list, anything else leads to the empty-deck modal.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let deck_ids = DeckIdsParam::from_values(std::env::args().skip(1).collect());
    let screen = StudyCardsScreen::new(TerminalNavigator::default(), deck_ids, config.flip_duration);

    match &config.source {
        SourceConfig::Http { base_url, token } => {
            tracing::info!(%base_url, "Loading cards from backend");
            let source = HttpCardSource::new(base_url, token.clone())?;
            run_screen(&screen, &source).await?;
        }
        SourceConfig::Directory(dir) => {
            let source = DirectoryCardSource::new(dir.clone());
            tracing::info!(dir = %source.root().display(), "Loading cards from directory");
            run_screen(&screen, &source).await?;
        }
    }

    if let Some(route) = screen.navigator().last_route() {
        tracing::info!(session_id = %screen.session_id(), ?route, "Study screen closed");
    }
    Ok(())
}

async fn run_screen<N, S>(screen: &StudyCardsScreen<N>, source: &S) -> anyhow::Result<()>
where
    N: Navigator,
    S: CardSource,
{
    print!("{}", screen.view(Instant::now()).await.render());

    // One Ctrl-C future covers both the load and the keyboard loop.
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(interrupt);

    tokio::select! {
        _ = screen.load(source) => {}
        () = &mut interrupt => {
            screen.unmount();
            tracing::info!("Interrupted while loading cards");
            return Ok(());
        }
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    terminal::drive(screen, stdin, std::io::stdout(), interrupt).await
}
