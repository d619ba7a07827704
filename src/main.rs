use std::io;
use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use newsdeck::adapters::{ClipboardShare, MemoryRepository};
use newsdeck::app::ArticleScreen;
use newsdeck::logging::init_tracing;
use newsdeck::storage::FavoritesStore;
use newsdeck::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use newsdeck::ui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    // Repository seeded with the bundled articles; favorites persist
    // across runs when a data dir is available.
    let mut repo = MemoryRepository::seeded();
    if let Some(path) = FavoritesStore::default_path() {
        repo = repo.with_store(FavoritesStore::new(path));
    }
    let repo = Arc::new(repo);

    // `newsdeck [post-id]` opens a specific article
    let post_id = std::env::args().nth(1).or_else(|| {
        let mut ids = repo.post_ids();
        ids.sort();
        ids.into_iter().next()
    });

    let mut screen = ArticleScreen::new(repo, Arc::new(ClipboardShare::new()));
    screen.open(post_id);

    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut screen).await;

    screen.teardown();
    leave_tui_mode(&mut io::stdout());
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut ArticleScreen,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        if screen.back_requested() {
            return Ok(());
        }

        terminal.draw(|frame| {
            let area = frame.area();
            // No post yet (loading, error, or nothing bound): draw nothing
            if let Some(view) = screen.view_state(area.width, area.height) {
                ui::render_article(frame, &view);
            }
        })?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => screen.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => tracing::warn!(%err, "terminal event stream error"),
                    None => return Ok(()),
                }
            }
            message = screen.recv() => {
                if let Some(message) = message {
                    screen.apply(message);
                    screen.drain_messages();
                }
            }
        }
    }
}
