//! Tagged variant over an asynchronous fetch's current outcome.

/// Latest outcome of a repository fetch.
///
/// Replaced wholesale on every emission; the view layer only reads the
/// current value. There is deliberately no "error UI" consumer yet, so
/// `Loading` and `Error` both render as nothing (see `view_state`).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState<T> {
    /// Fetch pending, or no key bound at all
    #[default]
    Loading,
    /// Fetch completed
    Success(T),
    /// Fetch failed with a human-readable reason
    Error(String),
}

impl<T> UiState<T> {
    /// The success payload, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            UiState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UiState::Success(_))
    }
}
