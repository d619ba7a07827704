//! Article screen rendering: top bar, body, bottom bar, popup.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::bottom_bar::render_bottom_bar;
use super::helpers::wrapped_line_count;
use super::layout::LayoutContext;
use super::popup::render_not_available_popup;
use super::theme::{COLOR_ACCENT, COLOR_BAR_BG, COLOR_DIM, COLOR_TEXT};
use crate::view_state::ArticleViewState;

const TOP_BAR_HEIGHT: u16 = 1;
const BOTTOM_BAR_HEIGHT: u16 = 1;
/// Blank rows kept between the body text and the action bar
const BODY_BOTTOM_INSET: u16 = 1;

/// Render the whole article screen.
///
/// Pure: draws the tree determined by `view` and nothing else. Callers
/// skip this entirely while the screen has no post to show.
pub fn render_article(frame: &mut Frame, view: &ArticleViewState) {
    let ctx = LayoutContext::new(view.terminal_width, view.terminal_height);
    let area = frame.area();

    let [top_area, body_area, _inset, bar_area] = Layout::vertical([
        Constraint::Length(TOP_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(BODY_BOTTOM_INSET),
        Constraint::Length(BOTTOM_BAR_HEIGHT),
    ])
    .areas(area);

    render_top_bar(frame, top_area, view);
    render_body(frame, body_area, view, &ctx);
    render_bottom_bar(frame, bar_area, view);

    if view.dialog_visible {
        render_not_available_popup(frame, area, &ctx);
    }
}

fn render_top_bar(frame: &mut Frame, area: Rect, view: &ArticleViewState) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled("← back  ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            view.top_bar_title(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(Style::default().bg(COLOR_BAR_BG));
    frame.render_widget(bar, area);
}

fn body_lines(view: &ArticleViewState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            view.post.title.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(author) = &view.post.author {
        lines.push(Line::from(Span::styled(
            format!("by {author}"),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::default());
    for paragraph in &view.post.paragraphs {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(COLOR_TEXT),
        )));
        lines.push(Line::default());
    }
    lines
}

fn render_body(frame: &mut Frame, area: Rect, view: &ArticleViewState, ctx: &LayoutContext) {
    let column = ctx.reading_column(area);
    let lines = body_lines(view);

    // Clamp the scroll offset so the last page stays on screen
    let total: usize = lines
        .iter()
        .map(|line| wrapped_line_count(&line.to_string(), column.width).max(1))
        .sum();
    let max_scroll = total.saturating_sub(column.height as usize) as u16;
    let scroll = view.scroll.min(max_scroll);

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(body, column);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;

    fn view_over(post: &Post) -> ArticleViewState<'_> {
        ArticleViewState {
            post,
            is_favorite: false,
            dialog_visible: false,
            scroll: 0,
            terminal_width: 100,
            terminal_height: 30,
        }
    }

    #[test]
    fn body_starts_with_title_and_blank_separator() {
        let post = Post {
            id: "p1".into(),
            title: "Headline".into(),
            url: "https://example.com".into(),
            publication: Some("Wire".into()),
            author: Some("Ada".into()),
            paragraphs: vec!["First.".into(), "Second.".into()],
        };
        let lines = body_lines(&view_over(&post));
        assert_eq!(lines[0].to_string(), "Headline");
        assert_eq!(lines[1].to_string(), "by Ada");
        assert_eq!(lines[2].to_string(), "");
        // Each paragraph is followed by a blank line
        assert_eq!(lines[3].to_string(), "First.");
        assert_eq!(lines[5].to_string(), "Second.");
    }
}
