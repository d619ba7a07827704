//! Domain models for the news reader.
//!
//! Contains the [`Post`] article record and the [`PostId`] identifier
//! used throughout the repository and UI layers.

mod post;

pub use post::{Post, PostId};
