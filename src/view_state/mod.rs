//! View state for decoupling UI rendering from screen state.
//!
//! Rendering is a pure function: data in, frame out. The UI modules take
//! an [`ArticleViewState`] borrowed from the screen instead of the screen
//! itself, so they stay functional and the `app` and `ui` modules don't
//! depend on each other's internals.
//!
//! ```text
//! ArticleScreen (owns state)
//!       │ view_state()
//!       ▼
//! ArticleViewState (borrows data)
//!       │
//!       ▼
//! ui::render_article (pure rendering)
//! ```

use crate::models::Post;

/// Everything the article renderers need for one frame.
///
/// Produced per render pass by `ArticleScreen::view_state`, which returns
/// `None` while there is no successfully fetched post — in that case no
/// visual tree is produced at all.
#[derive(Debug, Clone, Copy)]
pub struct ArticleViewState<'a> {
    /// The fetched post, borrowed from the screen's state cell
    pub post: &'a Post,
    /// Whether the post is in the latest favorites snapshot
    pub is_favorite: bool,
    /// Whether the "functionality not available" dialog is layered on top
    pub dialog_visible: bool,
    /// Body scroll offset in visual lines
    pub scroll: u16,
    /// Terminal dimensions for responsive layout
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl<'a> ArticleViewState<'a> {
    /// Caption shown in the top bar.
    pub fn top_bar_title(&self) -> String {
        self.post.published_in()
    }
}
