//! Terminal setup and teardown.
//!
//! Enters and leaves TUI mode and installs a panic hook that restores
//! the terminal first, so a crash never leaves the user's shell in raw
//! mode.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Enter TUI mode: raw mode plus the alternate screen.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to a usable state.
///
/// Safe to call more than once; errors are ignored because there is
/// nothing useful to do with them during shutdown.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal before the panic
/// message prints. Call early in `main`, before entering TUI mode.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode(&mut io::stdout());
        original_hook(panic_info);
    }));
}
