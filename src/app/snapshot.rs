//! Serializable screen state for host-driven recreation.
//!
//! The host owns when snapshots are taken and restored; the screen only
//! defines what survives recreation: the bound post id, the dialog flag
//! and the scroll offset. Post data itself is refetched on restore.

use serde::{Deserialize, Serialize};

use crate::models::PostId;

use super::ArticleScreen;

/// What survives a screen recreation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub post_id: Option<PostId>,
    pub dialog_visible: bool,
    pub scroll: u16,
}

impl ArticleScreen {
    /// Capture the restorable parts of this screen.
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            post_id: self.binder.key().cloned(),
            dialog_visible: self.dialog_visible,
            scroll: self.scroll,
        }
    }

    /// Re-apply a snapshot to a freshly mounted screen. Rebinds the post
    /// id, which restarts its fetch.
    pub fn restore(&mut self, snapshot: ScreenSnapshot) {
        self.open(snapshot.post_id);
        self.dialog_visible = snapshot.dialog_visible;
        self.scroll = snapshot.scroll;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockRepository, MockShare};
    use std::sync::Arc;

    #[tokio::test]
    async fn snapshot_roundtrips_through_json() {
        let repo = Arc::new(MockRepository::new());
        let mut screen = ArticleScreen::new(repo.clone(), Arc::new(MockShare::new()));
        screen.open(Some("p1".to_string()));
        screen.on_unimplemented_action("like");
        screen.scroll_down(3);

        let json = serde_json::to_string(&screen.snapshot()).unwrap();
        let snapshot: ScreenSnapshot = serde_json::from_str(&json).unwrap();

        let mut restored = ArticleScreen::new(repo, Arc::new(MockShare::new()));
        restored.restore(snapshot);
        assert!(restored.dialog_visible());
        assert_eq!(restored.snapshot().post_id.as_deref(), Some("p1"));
        assert_eq!(restored.snapshot().scroll, 3);
    }
}
