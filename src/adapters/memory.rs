//! In-memory post repository.
//!
//! Owns the post store and the favorites set. Favorites changes go
//! through the `watch` channel so every observer sees the latest
//! snapshot, and are mirrored to the [`FavoritesStore`] when one is
//! attached.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::{RepoError, RepoResult};
use crate::models::{Post, PostId};
use crate::storage::FavoritesStore;
use crate::traits::PostRepository;

pub struct MemoryRepository {
    posts: HashMap<PostId, Post>,
    favorites_tx: watch::Sender<HashSet<PostId>>,
    store: Option<FavoritesStore>,
}

impl MemoryRepository {
    /// Build a repository over the given posts, starting with no
    /// favorites.
    pub fn new(posts: Vec<Post>) -> Self {
        let posts = posts.into_iter().map(|p| (p.id.clone(), p)).collect();
        let (favorites_tx, _) = watch::channel(HashSet::new());
        Self {
            posts,
            favorites_tx,
            store: None,
        }
    }

    /// Attach a persistence store and load whatever it already holds.
    pub fn with_store(self, store: FavoritesStore) -> Self {
        let initial = store.load();
        if !initial.is_empty() {
            let _ = self.favorites_tx.send(initial);
        }
        Self {
            store: Some(store),
            ..self
        }
    }

    /// A repository seeded with the bundled sample articles.
    pub fn seeded() -> Self {
        Self::new(sample_posts())
    }

    /// Ids of every post, in no particular order.
    pub fn post_ids(&self) -> Vec<PostId> {
        self.posts.keys().cloned().collect()
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            let snapshot = self.favorites_tx.borrow().clone();
            if let Err(err) = store.save(&snapshot) {
                tracing::warn!(%err, "failed to persist favorites");
            }
        }
    }
}

#[async_trait]
impl PostRepository for MemoryRepository {
    async fn get_post(&self, id: &PostId) -> RepoResult<Post> {
        self.posts
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.clone()))
    }

    fn observe_favorites(&self) -> watch::Receiver<HashSet<PostId>> {
        self.favorites_tx.subscribe()
    }

    async fn toggle_favorite(&self, id: &PostId) -> RepoResult<()> {
        self.favorites_tx.send_modify(|favorites| {
            if !favorites.remove(id) {
                favorites.insert(id.clone());
            }
        });
        self.persist();
        Ok(())
    }
}

/// Bundled sample articles, enough to read the app without a backend.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: "terminal-renaissance".to_string(),
            title: "The quiet renaissance of the terminal".to_string(),
            url: "https://newsdeck.example/posts/terminal-renaissance".to_string(),
            publication: Some("The Deck".to_string()),
            author: Some("Mara Ilves".to_string()),
            paragraphs: vec![
                "Twenty years after everyone declared the command line dead, \
                 the most interesting interfaces being built today once again \
                 run in a terminal emulator."
                    .to_string(),
                "Part of the appeal is constraint. A grid of cells forces \
                 designers to decide what actually matters on screen, and \
                 readers notice the difference."
                    .to_string(),
                "The other part is speed. Nothing a browser renders arrives \
                 faster than a frame of styled text."
                    .to_string(),
            ],
        },
        Post {
            id: "reader-modes".to_string(),
            title: "Reader modes are eating the web".to_string(),
            url: "https://newsdeck.example/posts/reader-modes".to_string(),
            publication: Some("Longform Weekly".to_string()),
            author: Some("Deniz Aka".to_string()),
            paragraphs: vec![
                "Every major browser now ships a button whose only job is to \
                 strip away the page the publisher designed."
                    .to_string(),
                "Publishers responded by designing for the reader view \
                 itself, which may be the most honest settlement the web has \
                 reached in years."
                    .to_string(),
            ],
        },
        Post {
            id: "favorites-sync".to_string(),
            title: "Why your bookmarks never sync".to_string(),
            url: "https://newsdeck.example/posts/favorites-sync".to_string(),
            publication: None,
            author: Some("J. Okafor".to_string()),
            paragraphs: vec![
                "Bookmark sync looks like the easiest problem in software and \
                 has defeated every company that tried it."
                    .to_string(),
                "The failure mode is always the same: two devices, one \
                 toggle, and no agreement about which press came first."
                    .to_string(),
            ],
        },
    ]
}
