//! Search view - free-text search over projects and profiles
//!
//! Typing only edits the query. A search runs on explicit submit, and the
//! submit control stays disabled while one is outstanding.

use meapi_domain::{Commit, FetchLifecycle, PortfolioRepository, SearchResult, ViewState};
use tracing::{debug, warn};

use crate::fetch::{start, Completed, Connection, Fetch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPanel<'a> {
    /// Nothing searched yet
    Idle,
    /// A search is outstanding
    Searching,
    /// One error line replaces both result lists
    Failed { message: String },
    /// Both result lists, each possibly empty
    Results(&'a SearchResult),
}

pub struct SearchView<R> {
    connection: Connection<R>,
    query: String,
    lifecycle: FetchLifecycle<SearchResult>,
    on_complete: Option<Box<dyn Fn() + Send>>,
}

impl<R: PortfolioRepository> SearchView<R> {
    pub fn new(connection: Connection<R>) -> Self {
        Self {
            connection,
            query: String::new(),
            lifecycle: FetchLifecycle::new(),
            on_complete: None,
        }
    }

    /// Called after every successful search
    pub fn on_complete(mut self, callback: impl Fn() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Replace the query text (user typing); never triggers a search
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_searching()
    }

    pub fn is_searching(&self) -> bool {
        self.lifecycle.is_in_flight()
    }

    /// Submit the current query
    ///
    /// Returns `None` without touching state when the query is blank or a
    /// search is already outstanding.
    pub fn submit(&mut self) -> Option<Fetch<SearchResult>> {
        if self.query.trim().is_empty() {
            debug!("ignoring blank search");
            return None;
        }
        if self.is_searching() {
            debug!(query = %self.query, "search already in flight");
            return None;
        }
        let query = self.query.clone();
        debug!(%query, "searching");
        start(&self.connection, &mut self.lifecycle, move |repo| async move {
            repo.search(&query).await
        })
    }

    pub fn complete(&mut self, done: Completed<SearchResult>) -> Commit {
        let commit = self.lifecycle.commit(done.token, done.outcome);
        match commit {
            Commit::Loaded => {
                if let Some(on_complete) = &self.on_complete {
                    on_complete();
                }
            }
            Commit::Failed => {
                if let Some(error) = self.lifecycle.state().error() {
                    warn!(%error, "search failed");
                }
            }
            Commit::Stale => debug!(token = %done.token, "discarding stale search response"),
        }
        commit
    }

    pub fn unmount(&mut self) {
        self.lifecycle.tear_down();
    }

    pub fn state(&self) -> &ViewState<SearchResult> {
        self.lifecycle.state()
    }

    pub fn panel(&self) -> SearchPanel<'_> {
        match self.lifecycle.state() {
            ViewState::Idle => SearchPanel::Idle,
            ViewState::Loading => SearchPanel::Searching,
            ViewState::Failed(error) => SearchPanel::Failed {
                message: error.to_string(),
            },
            ViewState::Loaded(result) => SearchPanel::Results(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedPortfolio;
    use meapi_adapter::InMemoryPortfolio;
    use meapi_domain::{FetchError, Profile, ProfileId};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_typing_does_not_search() {
        let repo = Arc::new(ScriptedPortfolio::sample());
        let mut view = SearchView::new(Connection::Ready(Arc::clone(&repo)));

        view.set_query("vote");
        view.set_query("votechain");

        assert_eq!(view.query(), "votechain");
        assert_eq!(view.panel(), SearchPanel::Idle);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_is_ignored() {
        let repo = Arc::new(ScriptedPortfolio::sample());
        let mut view = SearchView::new(Connection::Ready(Arc::clone(&repo)));

        assert!(view.submit().is_none());
        view.set_query("   ");
        assert!(view.submit().is_none());

        assert_eq!(view.panel(), SearchPanel::Idle);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_keeps_previous_results() {
        let mut view = SearchView::new(Connection::ready(ScriptedPortfolio::sample()));
        view.set_query("vote");
        let fetch = view.submit().unwrap();
        view.complete(fetch.run().await);
        let before = view.state().clone();

        view.set_query("");
        assert!(view.submit().is_none());
        assert_eq!(view.state(), &before);
    }

    #[tokio::test]
    async fn test_single_flight() {
        let repo = Arc::new(ScriptedPortfolio::sample());
        let mut view = SearchView::new(Connection::Ready(Arc::clone(&repo)));
        view.set_query("python");

        let fetch = view.submit().unwrap();
        assert!(view.is_searching());
        assert!(!view.can_submit());
        assert_eq!(view.panel(), SearchPanel::Searching);

        view.set_query("django");
        assert!(view.submit().is_none());

        view.complete(fetch.run().await);
        assert!(view.can_submit());
        assert_eq!(repo.calls(), ["search:python"]);
    }

    #[tokio::test]
    async fn test_results_with_one_empty_list() {
        let repo = InMemoryPortfolio::new().with_profile(Profile::new(ProfileId::new(1), "Ada"));
        let mut view = SearchView::new(Connection::ready(repo));
        view.set_query("Ada");

        let fetch = view.submit().unwrap();
        view.complete(fetch.run().await);

        match view.panel() {
            SearchPanel::Results(result) => {
                assert!(result.projects.is_empty());
                assert_eq!(result.profiles.len(), 1);
                assert_eq!(result.profiles[0].display_name(), "Ada");
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_replaces_both_lists() {
        let repo = ScriptedPortfolio::sample()
            .with_failure("search:boom", FetchError::server(500, "search index offline"));
        let mut view = SearchView::new(Connection::ready(repo));
        view.set_query("boom");

        let fetch = view.submit().unwrap();
        assert_eq!(view.complete(fetch.run().await), Commit::Failed);
        assert_eq!(
            view.panel(),
            SearchPanel::Failed {
                message: "search index offline".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_on_complete_only_on_success() {
        let completions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&completions);
        let repo = ScriptedPortfolio::sample()
            .with_failure("search:bad", FetchError::transport("offline"));
        let mut view = SearchView::new(Connection::ready(repo)).on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        view.set_query("bad");
        let fetch = view.submit().unwrap();
        view.complete(fetch.run().await);
        view.set_query("python");
        let fetch = view.submit().unwrap();
        view.complete(fetch.run().await);

        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_search_fails_without_request() {
        let mut view: SearchView<ScriptedPortfolio> = SearchView::new(Connection::Unconfigured);
        view.set_query("anything");

        assert!(view.submit().is_none());
        match view.panel() {
            SearchPanel::Failed { message } => assert!(message.contains("MEAPI_API_BASE")),
            other => panic!("expected configuration error, got {other:?}"),
        }
        assert!(view.can_submit());
    }

    #[tokio::test]
    async fn test_unmount_discards_outstanding_search() {
        let mut view = SearchView::new(Connection::ready(ScriptedPortfolio::sample()));
        view.set_query("python");
        let fetch = view.submit().unwrap();
        view.unmount();

        assert_eq!(view.complete(fetch.run().await), Commit::Stale);
        assert_eq!(view.panel(), SearchPanel::Idle);
    }
}
