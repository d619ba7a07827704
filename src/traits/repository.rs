//! Post repository trait abstraction.
//!
//! The repository owns the post store and the favorites set. The screen
//! only ever reads snapshots and routes mutations back through
//! [`PostRepository::toggle_favorite`].

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::RepoResult;
use crate::models::{Post, PostId};

/// Source of posts and favorites state.
///
/// `observe_favorites` hands out a `watch` receiver: subscribers always
/// see the latest snapshot (initially the empty set) and may miss
/// intermediate values, which is fine since only the newest one is ever
/// rendered.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch a post by id. May suspend (network, disk); cancelled fetches
    /// are simply dropped by the caller.
    async fn get_post(&self, id: &PostId) -> RepoResult<Post>;

    /// Subscribe to favorites-set snapshots, latest value wins.
    fn observe_favorites(&self) -> watch::Receiver<HashSet<PostId>>;

    /// Flip the favorite state of `id`. Idempotent-toggle semantics: the
    /// repository applies the flip atomically and re-publishes the set.
    async fn toggle_favorite(&self, id: &PostId) -> RepoResult<()>;
}
