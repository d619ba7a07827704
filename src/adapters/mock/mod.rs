//! Scriptable test doubles for the trait abstractions.
//!
//! Used by unit tests and the integration tests under `tests/` to drive
//! the screen without real storage or a clipboard.

mod repository;
mod share;

pub use repository::MockRepository;
pub use share::MockShare;
