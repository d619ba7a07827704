//! "Functionality not available" popup.
//!
//! A centered modal with fixed explanatory text and a single dismiss
//! control. Shown for actions that exist in the bar but are not built
//! yet; dismissed by Enter, Esc or q.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_TEXT};

pub const POPUP_TITLE: &str = "Functionality not available";
pub const POPUP_BODY: &str = "This functionality is not available yet.";

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 50;
const CONTENT_HEIGHT: u16 = 4;

fn dialog_area(ctx: &LayoutContext, area: Rect) -> Rect {
    let width = if ctx.is_narrow() {
        area.width.saturating_sub(4).min(MAX_WIDTH)
    } else {
        (area.width / 2).clamp(MIN_WIDTH, MAX_WIDTH)
    };
    let height = CONTENT_HEIGHT + 2;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height.min(area.height))
}

/// Render the popup centered over `area`, clearing what's underneath.
pub fn render_not_available_popup(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let dialog = dialog_area(ctx, area);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {POPUP_TITLE} "),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let body = Paragraph::new(vec![
        Line::from(Span::styled(POPUP_BODY, Style::default().fg(COLOR_TEXT))),
        Line::default(),
        Line::from(Span::styled(
            "[Enter] Close",
            Style::default().fg(COLOR_DIM),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_is_centered_on_wide_terminals() {
        let ctx = LayoutContext::new(100, 40);
        let dialog = dialog_area(&ctx, Rect::new(0, 0, 100, 40));
        let right_slack = 100 - (dialog.x + dialog.width);
        assert!(dialog.x.abs_diff(right_slack) <= 1);
        assert!(dialog.width >= MIN_WIDTH && dialog.width <= MAX_WIDTH);
    }

    #[test]
    fn dialog_fits_narrow_terminals() {
        let ctx = LayoutContext::new(40, 12);
        let dialog = dialog_area(&ctx, Rect::new(0, 0, 40, 12));
        assert!(dialog.width <= 36);
        assert!(dialog.height <= 12);
    }
}
