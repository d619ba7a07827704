//! Share capability trait abstraction.
//!
//! Sharing is an opaque external effect: the screen constructs a
//! [`ShareRequest`] and hands it off. Nothing is observed back; failures
//! (no target, user cancels) stay inside the adapter.

/// Mime type attached to every share request this screen produces.
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// A plain-text share payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Payload mime type
    pub mime: &'static str,
    /// Chooser title, the post's headline
    pub title: String,
    /// Shared text, the post's url
    pub text: String,
}

impl ShareRequest {
    /// Build a `text/plain` share request.
    pub fn plain_text(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            mime: MIME_TEXT_PLAIN,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Destination for share requests.
///
/// Fire and forget: implementations must not block the render path and
/// must swallow their own failures.
pub trait ShareTarget: Send + Sync {
    fn share(&self, request: ShareRequest);
}
