//! Clipboard-backed share target.
//!
//! A terminal app has no OS share sheet, so "share" copies the post's
//! title and url to the system clipboard via `arboard`. Fire and forget:
//! clipboard failures are logged and swallowed, exactly like a dismissed
//! share chooser.

use crate::traits::{ShareRequest, ShareTarget};

#[derive(Debug, Default)]
pub struct ClipboardShare;

impl ClipboardShare {
    pub fn new() -> Self {
        Self
    }
}

impl ShareTarget for ClipboardShare {
    fn share(&self, request: ShareRequest) {
        let payload = format!("{} — {}", request.title, request.text);
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(payload)) {
            Ok(()) => tracing::debug!(title = %request.title, "copied share text to clipboard"),
            Err(err) => tracing::debug!(%err, "share to clipboard failed"),
        }
    }
}
