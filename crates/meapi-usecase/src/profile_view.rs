//! Profile view - loads and shows one developer profile

use meapi_domain::{
    Commit, FetchLifecycle, PortfolioRepository, Profile, ProfileRef, ViewState,
};
use tracing::{debug, warn};

use crate::fetch::{start, Completed, Connection, Fetch};

/// What the profile area shows; exactly one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePanel<'a> {
    /// Placeholder bars while loading (or before the first load)
    Skeleton,
    /// The failure message plus a retry affordance
    Error { message: String },
    /// The loaded profile
    Detail(&'a Profile),
}

pub struct ProfileView<R> {
    connection: Connection<R>,
    profile: ProfileRef,
    lifecycle: FetchLifecycle<Profile>,
    on_load: Option<Box<dyn Fn() + Send>>,
    on_skill_click: Option<Box<dyn Fn(&str) + Send>>,
}

impl<R: PortfolioRepository> ProfileView<R> {
    pub fn new(connection: Connection<R>, profile: ProfileRef) -> Self {
        Self {
            connection,
            profile,
            lifecycle: FetchLifecycle::new(),
            on_load: None,
            on_skill_click: None,
        }
    }

    /// Called after every successful load
    pub fn on_load(mut self, callback: impl Fn() + Send + 'static) -> Self {
        self.on_load = Some(Box::new(callback));
        self
    }

    /// Called with the skill name when a skill token is activated
    pub fn on_skill_click(mut self, callback: impl Fn(&str) + Send + 'static) -> Self {
        self.on_skill_click = Some(Box::new(callback));
        self
    }

    /// Start loading the current profile
    pub fn mount(&mut self) -> Option<Fetch<Profile>> {
        let profile = self.profile;
        debug!(?profile, "loading profile");
        start(&self.connection, &mut self.lifecycle, move |repo| async move {
            repo.profile(profile).await
        })
    }

    /// Switch to another profile; reloads only when it actually changed
    pub fn set_profile(&mut self, profile: ProfileRef) -> Option<Fetch<Profile>> {
        if self.profile == profile {
            return None;
        }
        self.profile = profile;
        self.mount()
    }

    /// Apply a finished load
    pub fn complete(&mut self, done: Completed<Profile>) -> Commit {
        let commit = self.lifecycle.commit(done.token, done.outcome);
        match commit {
            Commit::Loaded => {
                if let Some(on_load) = &self.on_load {
                    on_load();
                }
            }
            Commit::Failed => {
                if let Some(error) = self.lifecycle.state().error() {
                    warn!(%error, "profile load failed");
                }
            }
            Commit::Stale => debug!(token = %done.token, "discarding stale profile response"),
        }
        commit
    }

    /// Forget everything; an outstanding load will be discarded
    pub fn unmount(&mut self) {
        self.lifecycle.tear_down();
    }

    /// Activate the skill token at `index`; returns the skill name
    ///
    /// Only reports upward - the view itself does not change.
    pub fn activate_skill(&self, index: usize) -> Option<&str> {
        let name = self.state().data()?.skills().get(index)?.name();
        if let Some(on_skill_click) = &self.on_skill_click {
            on_skill_click(name);
        }
        Some(name)
    }

    pub fn profile_ref(&self) -> ProfileRef {
        self.profile
    }

    pub fn state(&self) -> &ViewState<Profile> {
        self.lifecycle.state()
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_in_flight()
    }

    pub fn panel(&self) -> ProfilePanel<'_> {
        match self.lifecycle.state() {
            ViewState::Idle | ViewState::Loading => ProfilePanel::Skeleton,
            ViewState::Failed(error) => ProfilePanel::Error {
                message: error.to_string(),
            },
            ViewState::Loaded(profile) => ProfilePanel::Detail(profile),
        }
    }
}
