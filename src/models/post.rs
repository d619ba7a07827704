//! The `Post` article record.

use serde::{Deserialize, Serialize};

/// Identifier of a post. Opaque to the UI layer; assigned by whoever
/// seeds the repository.
pub type PostId = String;

/// An article as served by the repository.
///
/// Immutable once fetched: the screen receives a clone per fetch and the
/// view layer only ever borrows it for the duration of a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier, also the favorites key
    pub id: PostId,
    /// Headline
    pub title: String,
    /// Canonical link, used when sharing
    pub url: String,
    /// Publication name, if the article belongs to one
    #[serde(default)]
    pub publication: Option<String>,
    /// Byline, if known
    #[serde(default)]
    pub author: Option<String>,
    /// Body content, one entry per paragraph
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl Post {
    /// Top-bar caption for this post. The publication falls back to the
    /// empty string rather than being omitted, matching the screen's
    /// fixed "Published in" framing.
    pub fn published_in(&self) -> String {
        format!("Published in {}", self.publication.as_deref().unwrap_or(""))
    }
}
