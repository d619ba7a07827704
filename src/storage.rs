//! Favorites persistence.
//!
//! The favorites set is the only artifact this app persists: a small
//! JSON file under the platform data directory. Loads tolerate a missing
//! or corrupt file by starting empty; saves are best-effort and the
//! caller decides whether to surface failures (it doesn't).

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::error::{RepoError, RepoResult};
use crate::models::PostId;

/// JSON-backed store for the favorites set.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The conventional location under the platform data dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("newsdeck").join("favorites.json"))
    }

    /// Load the persisted set. Missing or unreadable files yield the
    /// empty set rather than an error.
    pub fn load(&self) -> HashSet<PostId> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(_) => return HashSet::new(),
        };
        match serde_json::from_str(&json) {
            Ok(favorites) => favorites,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "corrupt favorites file, starting empty");
                HashSet::new()
            }
        }
    }

    /// Write the set back out, creating parent directories as needed.
    pub fn save(&self, favorites: &HashSet<PostId>) -> RepoResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| RepoError::Storage(err.to_string()))?;
        }
        let json = serde_json::to_string_pretty(favorites)
            .map_err(|err| RepoError::Storage(err.to_string()))?;
        fs::write(&self.path, json).map_err(|err| RepoError::Storage(err.to_string()))
    }
}
