//! Article screen state and logic.
//!
//! This module contains the [`ArticleScreen`] struct and related types:
//! - [`ScreenMessage`] - messages from background tasks
//! - [`ScreenSnapshot`] - serializable screen state for host restoration
//!
//! The screen owns its reactive plumbing (a [`UiStateBinder`] for the
//! post fetch, a [`TaskScope`] for favorites forwarding and toggle
//! mutations) and exposes intent handlers that the key-event layer calls.
//! Rendering reads the screen only through
//! [`view_state`](ArticleScreen::view_state).

mod handlers;
mod messages;
mod snapshot;

pub use messages::ScreenMessage;
pub use snapshot::ScreenSnapshot;

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::models::{Post, PostId};
use crate::state::{TaskScope, UiState, UiStateBinder};
use crate::traits::{PostRepository, ShareRequest, ShareTarget};
use crate::view_state::ArticleViewState;

/// One mounted instance of the article screen.
pub struct ArticleScreen {
    repo: Arc<dyn PostRepository>,
    share: Arc<dyn ShareTarget>,
    rx: mpsc::UnboundedReceiver<ScreenMessage>,
    binder: UiStateBinder,
    scope: TaskScope,

    /// Latest fetch outcome; the view's single source of post data
    post_state: UiState<Post>,
    /// Latest favorites snapshot observed from the repository
    favorites: HashSet<PostId>,
    /// Whether the "functionality not available" dialog is showing
    dialog_visible: bool,
    /// Body scroll offset in visual lines
    scroll: u16,
    /// Set by the back intent; the host loop exits the screen on it
    back_requested: bool,
}

impl ArticleScreen {
    /// Mount a new screen over the given collaborators.
    ///
    /// Subscribes to the favorites stream immediately: the forwarder task
    /// sends the current snapshot first (the empty set until the
    /// repository publishes something) and then one message per change.
    pub fn new(repo: Arc<dyn PostRepository>, share: Arc<dyn ShareTarget>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let binder = UiStateBinder::new(repo.clone(), tx.clone());
        let mut scope = TaskScope::new();

        let mut favorites_rx = repo.observe_favorites();
        let forward_tx = tx;
        scope.spawn(async move {
            loop {
                let snapshot = favorites_rx.borrow_and_update().clone();
                if forward_tx
                    .send(ScreenMessage::FavoritesChanged(snapshot))
                    .is_err()
                {
                    break;
                }
                if favorites_rx.changed().await.is_err() {
                    break;
                }
            }
        });

        Self {
            repo,
            share,
            rx,
            binder,
            scope,
            post_state: UiState::Loading,
            favorites: HashSet::new(),
            dialog_visible: false,
            scroll: 0,
            back_requested: false,
        }
    }

    /// Bind the screen to a post id, starting its fetch.
    ///
    /// `None` detaches the screen: no fetch runs and nothing renders.
    pub fn open(&mut self, post_id: Option<PostId>) {
        if self.binder.bind(post_id) {
            self.post_state = UiState::Loading;
            self.scroll = 0;
        }
    }

    /// Receive the next background message. Used by the host event loop
    /// inside `tokio::select!`.
    pub async fn recv(&mut self) -> Option<ScreenMessage> {
        self.rx.recv().await
    }

    /// Apply every message currently queued. Tests and the tick path use
    /// this to settle the screen without awaiting.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
        }
    }

    /// Apply one background message to the screen state.
    pub fn apply(&mut self, message: ScreenMessage) {
        match message {
            ScreenMessage::PostLoaded { generation, post } => {
                if self.binder.is_current(generation) {
                    self.post_state = UiState::Success(post);
                } else {
                    tracing::debug!(post_id = %post.id, "discarding superseded fetch result");
                }
            }
            ScreenMessage::PostLoadFailed { generation, reason } => {
                if self.binder.is_current(generation) {
                    // TODO: handle errors
                    tracing::warn!(%reason, "post fetch failed");
                    self.post_state = UiState::Error(reason);
                }
            }
            ScreenMessage::FavoritesChanged(snapshot) => {
                self.favorites = snapshot;
            }
        }
    }

    /// Back-navigation intent.
    pub fn on_back(&mut self) {
        self.back_requested = true;
    }

    pub fn back_requested(&self) -> bool {
        self.back_requested
    }

    /// Bookmark intent: fire-and-forget toggle routed to the repository.
    ///
    /// No optimistic update; the rendered state flips only when the
    /// favorites stream re-emits. No-op when no post id is bound.
    pub fn on_toggle_favorite(&mut self) {
        let Some(id) = self.binder.key().cloned() else {
            return;
        };
        let repo = self.repo.clone();
        self.scope.spawn(async move {
            if let Err(err) = repo.toggle_favorite(&id).await {
                tracing::warn!(post_id = %id, %err, "favorite toggle failed");
            }
        });
    }

    /// Share intent: hand the post's title and url to the share target.
    pub fn on_share(&mut self) {
        if let UiState::Success(post) = &self.post_state {
            self.share
                .share(ShareRequest::plain_text(&post.title, &post.url));
        }
    }

    /// Any action that exists in the bar but is not implemented yet
    /// surfaces the dialog instead of being silently ignored.
    pub fn on_unimplemented_action(&mut self, action: &str) {
        tracing::debug!(action, "unimplemented action requested");
        self.dialog_visible = true;
    }

    /// Dismiss the "functionality not available" dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog_visible = false;
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Whether the bound post is currently in the favorites set.
    pub fn is_favorite(&self) -> bool {
        self.binder
            .key()
            .map(|id| self.favorites.contains(id))
            .unwrap_or(false)
    }

    pub fn post_state(&self) -> &UiState<Post> {
        &self.post_state
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Project the screen into render-only data.
    ///
    /// Returns `None` unless the fetch has succeeded: loading, error and
    /// the unbound case all draw nothing, deliberately alike.
    pub fn view_state(&self, terminal_width: u16, terminal_height: u16) -> Option<ArticleViewState<'_>> {
        let post = self.post_state.value()?;
        Some(ArticleViewState {
            post,
            is_favorite: self.is_favorite(),
            dialog_visible: self.dialog_visible,
            scroll: self.scroll,
            terminal_width,
            terminal_height,
        })
    }

    /// Unmount: abort every background task owned by this screen.
    ///
    /// Also happens implicitly on drop; explicit teardown lets the host
    /// unmount before the value goes out of scope.
    pub fn teardown(&mut self) {
        self.binder.shutdown();
        self.scope.shutdown();
    }
}

impl Drop for ArticleScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}
