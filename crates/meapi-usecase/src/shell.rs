//! Shell - composes the views and owns the page-wide transient state
//!
//! The shell holds exactly two cross-view values: the displayed
//! notification and the active skill filter. Everything else belongs to a
//! view. All state changes happen on the task that owns the shell; fetches,
//! view callbacks and toast timers only post [`ShellEvent`]s back to it.
//!
//! ```text
//!  ProfileView ──skill click──▶ ┐
//!  ProjectListView ──open────▶  ├─ ShellEvent ─▶ Shell::handle ─▶ filter ─▶ ProjectListView
//!  SearchView ──complete─────▶  │                               └─▶ Toast
//!  fetch tasks, toast timer ─▶  ┘
//! ```

use std::sync::Arc;

use meapi_domain::{
    Category, Notification, NotificationId, PortfolioRepository, Profile, ProfileRef, Project,
    SearchResult,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::fetch::{Completed, Connection, Fetch};
use crate::notification::{DismissCallback, Toast};
use crate::profile_view::ProfileView;
use crate::project_list_view::ProjectListView;
use crate::search_view::SearchView;

pub const PROFILE_LOADED: &str = "Profile loaded successfully!";
pub const SEARCH_COMPLETED: &str = "Search completed!";

/// Everything that can change shell state after construction
#[derive(Debug)]
pub enum ShellEvent {
    ProfileFetched(Completed<Profile>),
    ProjectsFetched(Completed<Vec<Project>>),
    SearchFetched(Completed<SearchResult>),
    Notify { message: String, category: Category },
    SkillSelected(String),
    ProjectOpened(Project),
    NotificationDismissed(NotificationId),
}

pub struct Shell<R> {
    profile: ProfileView<R>,
    projects: ProjectListView<R>,
    search: SearchView<R>,
    toast: Option<Toast>,
    active_skill: Option<String>,
    on_dismiss: DismissCallback,
    events_tx: UnboundedSender<ShellEvent>,
    events_rx: UnboundedReceiver<ShellEvent>,
    next_notification: u64,
    pending: usize,
}

impl<R: PortfolioRepository> Shell<R> {
    /// Build the page and wire the view callbacks; nothing is fetched yet
    pub fn new(connection: Connection<R>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let profile = ProfileView::new(connection.clone(), ProfileRef::Default)
            .on_load(notifier(&events_tx, PROFILE_LOADED, Category::Success))
            .on_skill_click({
                let tx = events_tx.clone();
                move |name| {
                    let _ = tx.send(ShellEvent::SkillSelected(name.to_string()));
                }
            });

        let projects = ProjectListView::new(connection.clone(), None).on_project_click({
            let tx = events_tx.clone();
            move |project| {
                let _ = tx.send(ShellEvent::ProjectOpened(project.clone()));
            }
        });

        let search = SearchView::new(connection).on_complete(notifier(
            &events_tx,
            SEARCH_COMPLETED,
            Category::Success,
        ));

        let on_dismiss: DismissCallback = {
            let tx = events_tx.clone();
            Arc::new(move |id: NotificationId| {
                let _ = tx.send(ShellEvent::NotificationDismissed(id));
            })
        };

        Self {
            profile,
            projects,
            search,
            toast: None,
            active_skill: None,
            on_dismiss,
            events_tx,
            events_rx,
            next_notification: 0,
            pending: 0,
        }
    }

    /// Start the initial profile and project loads
    pub fn mount(&mut self) {
        let profile = self.profile.mount();
        self.spawn(profile, ShellEvent::ProfileFetched);
        let projects = self.projects.mount();
        self.spawn(projects, ShellEvent::ProjectsFetched);
    }

    /// Tear everything down; outstanding responses will be discarded
    pub fn unmount(&mut self) {
        self.profile.unmount();
        self.projects.unmount();
        self.search.unmount();
        self.toast = None;
    }

    /// Full page reload: every view starts over, filter and toast are gone
    pub fn reload(&mut self) {
        info!("reloading page");
        self.unmount();
        self.active_skill = None;
        self.search.set_query("");

        let profile = self.profile.mount();
        self.spawn(profile, ShellEvent::ProfileFetched);
        let projects = self
            .projects
            .set_filter(None)
            .or_else(|| self.projects.mount());
        self.spawn(projects, ShellEvent::ProjectsFetched);
    }

    pub fn handle(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::ProfileFetched(done) => {
                self.pending = self.pending.saturating_sub(1);
                self.profile.complete(done);
            }
            ShellEvent::ProjectsFetched(done) => {
                self.pending = self.pending.saturating_sub(1);
                self.projects.complete(done);
            }
            ShellEvent::SearchFetched(done) => {
                self.pending = self.pending.saturating_sub(1);
                self.search.complete(done);
            }
            ShellEvent::Notify { message, category } => self.notify(message, category),
            ShellEvent::SkillSelected(skill) => self.select_skill(skill),
            ShellEvent::ProjectOpened(project) => {
                self.notify(format!("Opening {}", project.title()), Category::Info);
            }
            ShellEvent::NotificationDismissed(id) => {
                if self.notification().map(Notification::id) == Some(id) {
                    debug!(id = id.get(), "notification dismissed");
                    self.toast = None;
                }
            }
        }
    }

    /// Wait for the next event; never `None` while the shell is alive
    pub async fn next_event(&mut self) -> Option<ShellEvent> {
        self.events_rx.recv().await
    }

    /// Process events until no fetch is outstanding and the queue is empty
    ///
    /// Toast timers are not waited for.
    pub async fn settle(&mut self) {
        loop {
            while let Ok(event) = self.events_rx.try_recv() {
                self.handle(event);
            }
            if self.pending == 0 {
                break;
            }
            match self.events_rx.recv().await {
                Some(event) => self.handle(event),
                None => break,
            }
        }
    }

    /// Show `message`, replacing (and cancelling) any current notification
    pub fn notify(&mut self, message: impl Into<String>, category: Category) {
        self.next_notification += 1;
        let notification = Notification::new(
            NotificationId::new(self.next_notification),
            message,
            category,
        );
        debug!(category = %notification.category(), message = notification.message(), "notify");
        self.toast = Some(Toast::show(notification, Arc::clone(&self.on_dismiss)));
    }

    /// Set the skill filter and refetch the project list
    pub fn select_skill(&mut self, skill: impl Into<String>) {
        let skill = skill.into();
        info!(%skill, "filtering projects");
        self.active_skill = Some(skill.clone());
        let fetch = self.projects.set_filter(Some(skill.clone()));
        self.spawn(fetch, ShellEvent::ProjectsFetched);
        self.notify(format!("Filtering projects by: {skill}"), Category::Info);
    }

    /// Activate the profile's skill token at `index`
    ///
    /// The filter changes once the resulting event is handled.
    pub fn activate_skill(&mut self, index: usize) -> Option<String> {
        self.profile.activate_skill(index).map(str::to_string)
    }

    pub fn clear_filter(&mut self) {
        if self.active_skill.take().is_none() {
            return;
        }
        info!("clearing project filter");
        let fetch = self.projects.set_filter(None);
        self.spawn(fetch, ShellEvent::ProjectsFetched);
    }

    /// Activate the project card at `index`
    pub fn open_project(&mut self, index: usize) -> Option<Project> {
        self.projects.open_project(index).cloned()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    /// Returns whether a request was sent
    pub fn submit_search(&mut self) -> bool {
        let fetch = self.search.submit();
        let started = fetch.is_some();
        self.spawn(fetch, ShellEvent::SearchFetched);
        started
    }

    pub fn close_notification(&mut self) {
        if let Some(toast) = &mut self.toast {
            toast.close();
        }
    }

    pub fn profile(&self) -> &ProfileView<R> {
        &self.profile
    }

    pub fn projects(&self) -> &ProjectListView<R> {
        &self.projects
    }

    pub fn search(&self) -> &SearchView<R> {
        &self.search
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.toast.as_ref().map(Toast::notification)
    }

    pub fn active_skill(&self) -> Option<&str> {
        self.active_skill.as_deref()
    }

    /// Number of fetches whose response has not been handled yet
    pub fn pending(&self) -> usize {
        self.pending
    }

    fn spawn<T: Send + 'static>(
        &mut self,
        fetch: Option<Fetch<T>>,
        wrap: fn(Completed<T>) -> ShellEvent,
    ) {
        let Some(fetch) = fetch else {
            return;
        };
        self.pending += 1;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(wrap(fetch.run().await));
        });
    }
}

fn notifier(
    tx: &UnboundedSender<ShellEvent>,
    message: &'static str,
    category: Category,
) -> impl Fn() + Send + 'static {
    let tx = tx.clone();
    move || {
        let _ = tx.send(ShellEvent::Notify {
            message: message.to_string(),
            category,
        });
    }
}
