//! UI rendering for the newsdeck article screen.
//!
//! Renders the article reading view:
//! - Top bar with publication caption and back hint
//! - Scrollable article body, centered to a readable column on wide
//!   terminals
//! - Bottom action bar: like, bookmark, share, text settings
//! - "Functionality not available" popup layered above everything
//!
//! All render functions are pure: they take an
//! [`ArticleViewState`](crate::view_state::ArticleViewState) and draw
//! into the frame, touching no other state.

mod article;
mod bottom_bar;
mod helpers;
mod layout;
mod popup;
mod theme;

pub use article::render_article;
pub use bottom_bar::{bookmark_label, render_bottom_bar};
pub use helpers::wrapped_line_count;
pub use layout::LayoutContext;
pub use popup::{render_not_available_popup, POPUP_BODY, POPUP_TITLE};

pub use theme::{
    COLOR_ACCENT, COLOR_BAR_BG, COLOR_BORDER, COLOR_DIM, COLOR_FAVORITE, COLOR_TEXT,
};
