//! ViewState - Where a fetch view is in its load lifecycle

use crate::repository::portfolio_repository::FetchError;

/// One view's transient fetch state
///
/// Exactly one variant is active at a time; a view never shows stale data
/// next to a spinner or an error next to data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Nothing requested yet (or torn down)
    Idle,
    /// A request is outstanding
    Loading,
    /// The last request succeeded
    Loaded(T),
    /// The last request failed
    Failed(FetchError),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Name of the variant, for logging
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Failed(_) => "failed",
        }
    }
}
