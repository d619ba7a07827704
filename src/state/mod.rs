//! Reactive state plumbing between the repository and the screen.
//!
//! - [`UiState`] - tagged fetch outcome held by the screen's state cell
//! - [`UiStateBinder`] - keyed fetch driver with stale-result rejection
//! - [`TaskScope`] - screen-lifetime ownership of background tasks

mod binder;
mod scope;
mod ui_state;

pub use binder::UiStateBinder;
pub use scope::TaskScope;
pub use ui_state::UiState;
