//! Color theme constants for the newsdeck UI
//!
//! Defines the minimal dark reading palette used throughout the screen.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and the article title
pub const COLOR_ACCENT: Color = Color::White;

/// Body text color
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for bylines, hints and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the top and bottom bars
pub const COLOR_BAR_BG: Color = Color::Rgb(20, 20, 30);

/// Active bookmark marker
pub const COLOR_FAVORITE: Color = Color::LightYellow;

/// Background color for the not-available dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
