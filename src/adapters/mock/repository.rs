//! Mock post repository for testing.
//!
//! Configurable with posts, artificial latency and injected fetch
//! failures; records every `toggle_favorite` call so tests can assert on
//! exactly how often the screen hit the repository.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::{RepoError, RepoResult};
use crate::models::{Post, PostId};
use crate::traits::PostRepository;

#[derive(Debug)]
pub struct MockRepository {
    posts: Mutex<HashMap<PostId, Post>>,
    favorites_tx: watch::Sender<HashSet<PostId>>,
    toggle_calls: Mutex<Vec<PostId>>,
    fetch_delay: Mutex<Option<Duration>>,
    toggle_delay: Mutex<Option<Duration>>,
    fetch_error: Mutex<Option<String>>,
}

impl MockRepository {
    pub fn new() -> Self {
        let (favorites_tx, _) = watch::channel(HashSet::new());
        Self {
            posts: Mutex::new(HashMap::new()),
            favorites_tx,
            toggle_calls: Mutex::new(Vec::new()),
            fetch_delay: Mutex::new(None),
            toggle_delay: Mutex::new(None),
            fetch_error: Mutex::new(None),
        }
    }

    /// Add a post to the store.
    pub fn with_post(self, post: Post) -> Self {
        self.posts.lock().unwrap().insert(post.id.clone(), post);
        self
    }

    /// Delay every fetch by `delay`, for cancellation and staleness
    /// scenarios.
    pub fn with_fetch_delay(self, delay: Duration) -> Self {
        *self.fetch_delay.lock().unwrap() = Some(delay);
        self
    }

    /// Delay every toggle by `delay`.
    pub fn with_toggle_delay(self, delay: Duration) -> Self {
        *self.toggle_delay.lock().unwrap() = Some(delay);
        self
    }

    /// Make every fetch fail with `reason`.
    pub fn with_fetch_error(self, reason: &str) -> Self {
        *self.fetch_error.lock().unwrap() = Some(reason.to_string());
        self
    }

    /// Publish a favorites snapshot, as a backend push would.
    pub fn publish_favorites(&self, favorites: HashSet<PostId>) {
        let _ = self.favorites_tx.send(favorites);
    }

    /// Every id `toggle_favorite` was called with, in order.
    pub fn toggle_calls(&self) -> Vec<PostId> {
        self.toggle_calls.lock().unwrap().clone()
    }

    /// The favorites set as currently published.
    pub fn favorites(&self) -> HashSet<PostId> {
        self.favorites_tx.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MockRepository {
    async fn get_post(&self, id: &PostId) -> RepoResult<Post> {
        let delay = *self.fetch_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = self.fetch_error.lock().unwrap().clone() {
            return Err(RepoError::Other(reason));
        }
        self.posts
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.clone()))
    }

    fn observe_favorites(&self) -> watch::Receiver<HashSet<PostId>> {
        self.favorites_tx.subscribe()
    }

    async fn toggle_favorite(&self, id: &PostId) -> RepoResult<()> {
        let delay = *self.toggle_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.toggle_calls.lock().unwrap().push(id.clone());
        self.favorites_tx.send_modify(|favorites| {
            if !favorites.remove(id) {
                favorites.insert(id.clone());
            }
        });
        Ok(())
    }
}
