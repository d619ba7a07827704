//! Bottom action bar: like, bookmark, share, text settings.
//!
//! Four controls left to right. A single flexible spacer separates the
//! left cluster from the trailing text-settings control, pushing it to
//! the far edge. Like and text settings are intentionally inert
//! placeholders wired to the not-available dialog.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_BAR_BG, COLOR_DIM, COLOR_FAVORITE, COLOR_TEXT};
use crate::view_state::ArticleViewState;

/// Marker for the bookmark control, reflecting favorite state.
pub fn bookmark_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "★ bookmarked"
    } else {
        "☆ bookmark"
    }
}

fn control(key: &str, label: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{key}] "), Style::default().fg(COLOR_DIM)),
        Span::styled(label.to_string(), style),
    ])
}

/// Render the action bar into `area`.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, view: &ArticleViewState) {
    let background = Paragraph::new("").style(Style::default().bg(COLOR_BAR_BG));
    frame.render_widget(background, area);

    let bookmark = bookmark_label(view.is_favorite);
    let bookmark_style = if view.is_favorite {
        Style::default()
            .fg(COLOR_FAVORITE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT)
    };
    let plain = Style::default().fg(COLOR_TEXT);

    let like = control("l", "like", plain);
    let bookmark = control("b", bookmark, bookmark_style);
    let share = control("s", "share", plain);
    let settings = control("t", "text settings", plain);

    // One flexible spacer between the left cluster and text settings
    let [like_area, bookmark_area, share_area, _spacer, settings_area] =
        Layout::horizontal([
            Constraint::Length(like.width() as u16 + 2),
            Constraint::Length(bookmark.width() as u16 + 2),
            Constraint::Length(share.width() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(settings.width() as u16 + 1),
        ])
        .areas(area);

    frame.render_widget(Paragraph::new(like).style(Style::default().bg(COLOR_BAR_BG)), like_area);
    frame.render_widget(
        Paragraph::new(bookmark).style(Style::default().bg(COLOR_BAR_BG)),
        bookmark_area,
    );
    frame.render_widget(Paragraph::new(share).style(Style::default().bg(COLOR_BAR_BG)), share_area);
    frame.render_widget(
        Paragraph::new(settings).style(Style::default().bg(COLOR_BAR_BG)),
        settings_area,
    );
}
