//! Scripted repository for view and shell tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use meapi_adapter::InMemoryPortfolio;
use meapi_domain::{
    FetchError, PortfolioRepository, Profile, ProfileId, ProfileRef, Project, ProjectId,
    SearchResult, Skill, SkillId, SkillUsage,
};

/// Wraps the in-memory portfolio with per-call delays, failures and a call log
///
/// Call keys: `profile`, `projects:<skill>` (`projects:*` unfiltered),
/// `search:<query>`, `top_skills`, `health`.
#[derive(Default)]
pub(crate) struct ScriptedPortfolio {
    inner: InMemoryPortfolio,
    delays: HashMap<String, Duration>,
    failures: HashMap<String, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedPortfolio {
    pub(crate) fn new(inner: InMemoryPortfolio) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub(crate) fn sample() -> Self {
        Self::new(InMemoryPortfolio::sample())
    }

    pub(crate) fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub(crate) fn with_failure(mut self, key: &str, error: FetchError) -> Self {
        self.failures.insert(key.to_string(), error);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    async fn enter(&self, key: String) -> Result<(), FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        match self.failures.get(&key) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl PortfolioRepository for ScriptedPortfolio {
    async fn profile(&self, profile: ProfileRef) -> Result<Profile, FetchError> {
        self.enter("profile".to_string()).await?;
        self.inner.profile(profile).await
    }

    async fn projects(&self, skill: Option<&str>) -> Result<Vec<Project>, FetchError> {
        self.enter(format!("projects:{}", skill.unwrap_or("*"))).await?;
        self.inner.projects(skill).await
    }

    async fn search(&self, query: &str) -> Result<SearchResult, FetchError> {
        self.enter(format!("search:{query}")).await?;
        self.inner.search(query).await
    }

    async fn top_skills(&self) -> Result<Vec<SkillUsage>, FetchError> {
        self.enter("top_skills".to_string()).await?;
        self.inner.top_skills().await
    }

    async fn health(&self) -> Result<(), FetchError> {
        self.enter("health".to_string()).await?;
        self.inner.health().await
    }
}

/// Five projects, two of which use "Python"
pub(crate) fn five_projects() -> InMemoryPortfolio {
    let python = Skill::new(SkillId::new(1), "Python");
    let rust = Skill::new(SkillId::new(2), "Rust");
    let go = Skill::new(SkillId::new(3), "Go");

    InMemoryPortfolio::new()
        .with_profile(
            Profile::new(ProfileId::new(1), "Ada")
                .with_skill(python.clone())
                .with_skill(rust.clone()),
        )
        .with_project(Project::new(ProjectId::new(1), "Scraper").with_skill(python.clone()))
        .with_project(Project::new(ProjectId::new(2), "Kernel").with_skill(rust.clone()))
        .with_project(Project::new(ProjectId::new(3), "Notebook").with_skill(python))
        .with_project(Project::new(ProjectId::new(4), "Proxy").with_skill(go))
        .with_project(Project::new(ProjectId::new(5), "CLI").with_skill(rust))
}
