//! Helper functions for UI rendering.

use unicode_width::UnicodeWidthStr;

/// Estimate how many visual lines `text` occupies when word-wrapped to
/// `width` columns. Used to clamp the body scroll offset so the reader
/// can't scroll past the end of the article.
pub fn wrapped_line_count(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut lines = 0;
    for raw_line in text.split('\n') {
        if raw_line.split_whitespace().next().is_none() {
            lines += 1;
            continue;
        }
        let mut current = 0usize;
        for word in raw_line.split_whitespace() {
            let word_width = word.width();
            if current > 0 {
                if current + 1 + word_width <= width {
                    current += 1 + word_width;
                    continue;
                }
                lines += 1;
                current = 0;
            }
            if word_width <= width {
                current = word_width;
            } else {
                // Oversized words hard-wrap across full lines
                lines += word_width / width;
                current = word_width % width;
                if current == 0 {
                    lines -= 1;
                    current = width;
                }
            }
        }
        lines += 1;
    }
    lines
}
