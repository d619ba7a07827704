//! Responsive layout for the article screen.
//!
//! `LayoutContext` encapsulates terminal dimensions and provides the
//! sizing decisions the renderers need: whether the terminal is narrow,
//! and how to center the article body into a readable column on wide
//! terminals.

use ratatui::layout::Rect;

/// Terminal width below which no centering margin is applied
const NARROW_WIDTH: u16 = 80;

/// Maximum width of the reading column, in columns
const READING_WIDTH: u16 = 72;

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether the terminal is too narrow for wide-screen centering.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }

    /// Constrain `area` to a centered reading column.
    ///
    /// Narrow terminals keep a single-column inset; wide terminals cap
    /// the column at the reading width and split the slack evenly, so the
    /// text block stays centered however wide the window gets.
    pub fn reading_column(&self, area: Rect) -> Rect {
        if self.is_narrow() {
            return Rect {
                x: area.x + 1,
                width: area.width.saturating_sub(2),
                ..area
            };
        }
        let column = area.width.min(READING_WIDTH);
        let margin = (area.width - column) / 2;
        Rect {
            x: area.x + margin,
            width: column,
            ..area
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminal_keeps_minimal_inset() {
        let ctx = LayoutContext::new(60, 24);
        let column = ctx.reading_column(Rect::new(0, 0, 60, 20));
        assert_eq!(column.x, 1);
        assert_eq!(column.width, 58);
    }

    #[test]
    fn wide_terminal_centers_the_reading_column() {
        let ctx = LayoutContext::new(120, 40);
        let column = ctx.reading_column(Rect::new(0, 0, 120, 36));
        assert_eq!(column.width, 72);
        assert_eq!(column.x, 24);
        // Centered: equal slack on both sides
        assert_eq!(120 - (column.x + column.width), column.x);
    }
}
