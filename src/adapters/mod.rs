//! Concrete implementations of the trait abstractions.
//!
//! - [`MemoryRepository`] - seeded in-process post store with persisted
//!   favorites
//! - [`ClipboardShare`] - share target writing to the system clipboard
//! - [`mock`] - scriptable test doubles

pub mod clipboard_share;
pub mod memory;
pub mod mock;

pub use clipboard_share::ClipboardShare;
pub use memory::MemoryRepository;
