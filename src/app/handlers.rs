//! Key-event handling for the article screen.
//!
//! Maps terminal key events to screen intents. The dialog consumes input
//! first while visible, so no bar action can fire underneath it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::ArticleScreen;

/// Lines scrolled per j/k press.
const SCROLL_STEP: u16 = 1;
/// Lines scrolled per page up/down.
const PAGE_STEP: u16 = 10;

impl ArticleScreen {
    /// Dispatch one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Dialog-first: while shown, every dismiss gesture hides it and
        // nothing else reacts.
        if self.dialog_visible() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(' ') => {
                    self.dismiss_dialog();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.on_back(),
            KeyCode::Char('l') => self.on_unimplemented_action("like"),
            KeyCode::Char('b') => self.on_toggle_favorite(),
            KeyCode::Char('s') => self.on_share(),
            KeyCode::Char('t') => self.on_unimplemented_action("text settings"),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(SCROLL_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(SCROLL_STEP),
            KeyCode::PageDown => self.scroll_down(PAGE_STEP),
            KeyCode::PageUp => self.scroll_up(PAGE_STEP),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::mock::{MockRepository, MockShare};
    use crate::app::ArticleScreen;
    use crate::models::Post;
    use crossterm::event::{KeyCode, KeyEvent};
    use std::sync::Arc;

    fn screen() -> ArticleScreen {
        let repo = Arc::new(MockRepository::new().with_post(Post {
            id: "p1".to_string(),
            title: "T".to_string(),
            url: "U".to_string(),
            publication: None,
            author: None,
            paragraphs: vec![],
        }));
        ArticleScreen::new(repo, Arc::new(MockShare::new()))
    }

    #[tokio::test]
    async fn escape_requests_back_navigation() {
        let mut screen = screen();
        screen.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(screen.back_requested());
    }

    #[tokio::test]
    async fn like_key_opens_dialog_and_escape_closes_it() {
        let mut screen = screen();
        screen.handle_key(KeyEvent::from(KeyCode::Char('l')));
        assert!(screen.dialog_visible());

        // Esc dismisses the dialog instead of navigating back
        screen.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!screen.dialog_visible());
        assert!(!screen.back_requested());
    }

    #[tokio::test]
    async fn scroll_keys_do_not_touch_dialog_state() {
        let mut screen = screen();
        screen.handle_key(KeyEvent::from(KeyCode::Char('j')));
        screen.handle_key(KeyEvent::from(KeyCode::PageDown));
        screen.handle_key(KeyEvent::from(KeyCode::Char('k')));
        assert!(!screen.dialog_visible());
    }
}
