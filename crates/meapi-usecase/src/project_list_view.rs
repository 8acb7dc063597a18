//! Project list view - loads projects, optionally filtered by skill
//!
//! The filter is sent to the server; this view never filters on its own.

use meapi_domain::{Commit, FetchLifecycle, PortfolioRepository, Project, ViewState};
use tracing::{debug, warn};

use crate::fetch::{start, Completed, Connection, Fetch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectListPanel<'a> {
    /// Loading (or not loaded yet)
    Spinner,
    /// Inline error line
    Error { message: String },
    /// The server returned no projects
    Empty { filter: Option<&'a str> },
    /// Project cards, with the active filter for the banner
    Grid {
        filter: Option<&'a str>,
        projects: &'a [Project],
    },
}

impl ProjectListPanel<'_> {
    /// Text shown under the "No projects found" heading
    pub fn empty_hint(filter: Option<&str>) -> String {
        match filter {
            Some(skill) => format!("No projects match \"{skill}\""),
            None => "Start by adding some projects!".to_string(),
        }
    }

    /// "Showing N project(s) matching: <skill>", for filtered grids only
    pub fn banner(&self) -> Option<String> {
        match self {
            ProjectListPanel::Grid {
                filter: Some(skill),
                projects,
            } => {
                let count = projects.len();
                let plural = if count == 1 { "" } else { "s" };
                Some(format!("Showing {count} project{plural} matching: {skill}"))
            }
            _ => None,
        }
    }
}

pub struct ProjectListView<R> {
    connection: Connection<R>,
    filter: Option<String>,
    lifecycle: FetchLifecycle<Vec<Project>>,
    on_project_click: Option<Box<dyn Fn(&Project) + Send>>,
}

impl<R: PortfolioRepository> ProjectListView<R> {
    pub fn new(connection: Connection<R>, filter: Option<String>) -> Self {
        Self {
            connection,
            filter,
            lifecycle: FetchLifecycle::new(),
            on_project_click: None,
        }
    }

    /// Called with the full record when a card is activated
    pub fn on_project_click(mut self, callback: impl Fn(&Project) + Send + 'static) -> Self {
        self.on_project_click = Some(Box::new(callback));
        self
    }

    /// Start loading with the current filter
    pub fn mount(&mut self) -> Option<Fetch<Vec<Project>>> {
        let filter = self.filter.clone();
        debug!(?filter, "loading projects");
        start(&self.connection, &mut self.lifecycle, move |repo| async move {
            repo.projects(filter.as_deref()).await
        })
    }

    /// Change the skill filter; reloads only when it actually changed
    pub fn set_filter(&mut self, filter: Option<String>) -> Option<Fetch<Vec<Project>>> {
        if self.filter == filter {
            return None;
        }
        self.filter = filter;
        self.mount()
    }

    pub fn complete(&mut self, done: Completed<Vec<Project>>) -> Commit {
        let commit = self.lifecycle.commit(done.token, done.outcome);
        match commit {
            Commit::Loaded => {
                let count = self.state().data().map_or(0, Vec::len);
                debug!(count, filter = ?self.filter, "projects loaded");
            }
            Commit::Failed => {
                if let Some(error) = self.lifecycle.state().error() {
                    warn!(%error, "project load failed");
                }
            }
            Commit::Stale => debug!(token = %done.token, "discarding stale project response"),
        }
        commit
    }

    pub fn unmount(&mut self) {
        self.lifecycle.tear_down();
    }

    /// Activate the card at `index`; the list itself is untouched
    pub fn open_project(&self, index: usize) -> Option<&Project> {
        let project = self.state().data()?.get(index)?;
        if let Some(on_project_click) = &self.on_project_click {
            on_project_click(project);
        }
        Some(project)
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn state(&self) -> &ViewState<Vec<Project>> {
        self.lifecycle.state()
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_in_flight()
    }

    pub fn panel(&self) -> ProjectListPanel<'_> {
        let filter = self.filter.as_deref();
        match self.lifecycle.state() {
            ViewState::Idle | ViewState::Loading => ProjectListPanel::Spinner,
            ViewState::Failed(error) => ProjectListPanel::Error {
                message: error.to_string(),
            },
            ViewState::Loaded(projects) if projects.is_empty() => {
                ProjectListPanel::Empty { filter }
            }
            ViewState::Loaded(projects) => ProjectListPanel::Grid { filter, projects },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{five_projects, ScriptedPortfolio};
    use meapi_domain::FetchError;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn titles(panel: &ProjectListPanel<'_>) -> Vec<String> {
        match panel {
            ProjectListPanel::Grid { projects, .. } => {
                projects.iter().map(|p| p.title().to_string()).collect()
            }
            _ => Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_unfiltered_load() {
        let mut view = ProjectListView::new(Connection::ready(ScriptedPortfolio::sample()), None);
        assert_eq!(view.panel(), ProjectListPanel::Spinner);

        let fetch = view.mount().unwrap();
        view.complete(fetch.run().await);

        assert_eq!(titles(&view.panel()), ["Personal Portfolio", "VoteChain"]);
        assert!(view.panel().banner().is_none());
    }

    #[tokio::test]
    async fn test_filter_is_sent_to_server() {
        let repo = Arc::new(ScriptedPortfolio::new(five_projects()));
        let mut view = ProjectListView::new(Connection::Ready(Arc::clone(&repo)), None);

        let fetch = view.set_filter(Some("Python".to_string())).unwrap();
        view.complete(fetch.run().await);

        assert_eq!(repo.calls(), ["projects:Python"]);
        let panel = view.panel();
        let shown = titles(&panel);
        assert_eq!(shown, ["Scraper", "Notebook"]);
        assert_eq!(
            panel.banner().as_deref(),
            Some("Showing 2 projects matching: Python")
        );
    }

    #[tokio::test]
    async fn test_banner_count_matches_cards() {
        let mut view = ProjectListView::new(
            Connection::ready(ScriptedPortfolio::new(five_projects())),
            Some("Go".to_string()),
        );
        let fetch = view.mount().unwrap();
        view.complete(fetch.run().await);

        let panel = view.panel();
        assert_eq!(titles(&panel).len(), 1);
        assert_eq!(panel.banner().as_deref(), Some("Showing 1 project matching: Go"));
    }

    #[tokio::test]
    async fn test_empty_result_is_not_an_error() {
        let mut view = ProjectListView::new(
            Connection::ready(ScriptedPortfolio::sample()),
            Some("cobol".to_string()),
        );
        let fetch = view.mount().unwrap();
        assert_eq!(view.complete(fetch.run().await), Commit::Loaded);

        assert_eq!(view.panel(), ProjectListPanel::Empty { filter: Some("cobol") });
        assert_eq!(
            ProjectListPanel::empty_hint(Some("cobol")),
            "No projects match \"cobol\""
        );
        assert_eq!(
            ProjectListPanel::empty_hint(None),
            "Start by adding some projects!"
        );
    }

    #[tokio::test]
    async fn test_failure_is_inline_error() {
        let repo = ScriptedPortfolio::sample()
            .with_failure("projects:*", FetchError::server(502, "Bad gateway"));
        let mut view = ProjectListView::new(Connection::ready(repo), None);
        let fetch = view.mount().unwrap();
        view.complete(fetch.run().await);

        assert_eq!(
            view.panel(),
            ProjectListPanel::Error {
                message: "Bad gateway".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unconfigured_never_requests() {
        let mut view: ProjectListView<ScriptedPortfolio> =
            ProjectListView::new(Connection::Unconfigured, None);

        assert!(view.mount().is_none());
        assert!(view.set_filter(Some("Rust".to_string())).is_none());
        assert!(matches!(view.panel(), ProjectListPanel::Error { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_filter_changes_show_only_latest() {
        // A is slow, B is fast: A's response arrives last and must be ignored
        let repo = ScriptedPortfolio::new(five_projects())
            .with_delay("projects:Python", Duration::from_millis(500))
            .with_delay("projects:Rust", Duration::from_millis(10));
        let mut view = ProjectListView::new(Connection::ready(repo), None);

        let a = view.set_filter(Some("Python".to_string())).unwrap();
        let b = view.set_filter(Some("Rust".to_string())).unwrap();
        let a = tokio::spawn(a.run());
        let b = tokio::spawn(b.run());

        assert_eq!(view.complete(b.await.unwrap()), Commit::Loaded);
        assert_eq!(view.complete(a.await.unwrap()), Commit::Stale);
        assert_eq!(titles(&view.panel()), ["Kernel", "CLI"]);
        assert_eq!(view.filter(), Some("Rust"));
    }

    #[tokio::test]
    async fn test_refetch_hides_previous_cards() {
        let mut view = ProjectListView::new(Connection::ready(ScriptedPortfolio::sample()), None);
        let fetch = view.mount().unwrap();
        view.complete(fetch.run().await);

        let _pending = view.set_filter(Some("react".to_string())).unwrap();
        assert_eq!(view.panel(), ProjectListPanel::Spinner);
    }

    #[tokio::test]
    async fn test_open_project_reports_record() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let mut view = ProjectListView::new(Connection::ready(ScriptedPortfolio::sample()), None)
            .on_project_click(move |project| {
                sink.lock().unwrap().push(project.title().to_string());
            });
        let fetch = view.mount().unwrap();
        view.complete(fetch.run().await);

        let project = view.open_project(1).unwrap();
        assert_eq!(project.title(), "VoteChain");
        assert!(view.open_project(5).is_none());
        assert_eq!(*opened.lock().unwrap(), vec!["VoteChain".to_string()]);
        assert_eq!(titles(&view.panel()).len(), 2);
    }
}
