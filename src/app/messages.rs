//! ScreenMessage enum for async communication within the article screen.

use std::collections::HashSet;

use crate::models::{Post, PostId};

/// Messages delivered from background tasks (fetches, favorites
/// forwarding) to the screen on the render thread.
#[derive(Debug, Clone)]
pub enum ScreenMessage {
    /// A post fetch completed
    PostLoaded { generation: u64, post: Post },
    /// A post fetch failed
    PostLoadFailed { generation: u64, reason: String },
    /// The favorites set re-emitted
    FavoritesChanged(HashSet<PostId>),
}
