//! Fetch Lifecycle - The load contract every fetch view follows
//!
//! A view asks the lifecycle for a [`RequestToken`] when it starts a load
//! and hands the token back with the outcome. Only the outcome carrying the
//! most recent token is committed:
//!
//! ```text
//!   begin() ──▶ token #1 ──────────────────────────▶ commit(#1) ─▶ Stale
//!   begin() ──▶ token #2 ──▶ commit(#2) ─▶ Loaded
//! ```
//!
//! This is pure state - the caller decides how the request actually runs.
//! Cancellation is best effort: the request still completes, its result is
//! simply never applied.

use crate::model::view_state::ViewState;
use crate::repository::portfolio_repository::FetchError;

/// Identifies one load attempt of one view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened when an outcome was handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The view now shows the data
    Loaded,
    /// The view now shows the error
    Failed,
    /// The outcome belonged to a superseded request and was dropped
    Stale,
}

impl Commit {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Commit::Stale)
    }
}

#[derive(Debug, Clone)]
pub struct FetchLifecycle<T> {
    state: ViewState<T>,
    generation: u64,
    in_flight: Option<RequestToken>,
}

impl<T> FetchLifecycle<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
            in_flight: None,
        }
    }

    /// Start a load: enter `Loading` and supersede any outstanding request
    ///
    /// Previous data or errors are dropped here so nothing stale is shown
    /// while the new request runs.
    pub fn begin(&mut self) -> RequestToken {
        let token = self.next_token();
        self.in_flight = Some(token);
        self.state = ViewState::Loading;
        token
    }

    /// Fail without sending anything (e.g. the API base is not configured)
    pub fn fail_immediately(&mut self, error: FetchError) {
        self.next_token();
        self.in_flight = None;
        self.state = ViewState::Failed(error);
    }

    /// Apply the outcome of the request identified by `token`
    pub fn commit(&mut self, token: RequestToken, outcome: Result<T, FetchError>) -> Commit {
        if self.in_flight != Some(token) {
            return Commit::Stale;
        }
        self.in_flight = None;
        match outcome {
            Ok(data) => {
                self.state = ViewState::Loaded(data);
                Commit::Loaded
            }
            Err(error) => {
                self.state = ViewState::Failed(error);
                Commit::Failed
            }
        }
    }

    /// Discard all state; any outstanding request becomes stale
    pub fn tear_down(&mut self) {
        self.next_token();
        self.in_flight = None;
        self.state = ViewState::Idle;
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Token of the request whose outcome would currently be accepted
    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    fn next_token(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}
