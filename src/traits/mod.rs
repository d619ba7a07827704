//! Trait abstractions for dependency injection and testability.
//!
//! The screen never talks to concrete services; it holds `Arc<dyn ...>`
//! handles to these traits so tests can substitute the mock adapters in
//! [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`PostRepository`] - Post fetching, favorites observation and mutation
//! - [`ShareTarget`] - Platform share-sheet stand-in

pub mod repository;
pub mod share;

pub use repository::PostRepository;
pub use share::{ShareRequest, ShareTarget, MIME_TEXT_PLAIN};
