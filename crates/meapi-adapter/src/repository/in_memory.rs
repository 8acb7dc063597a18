//! In-Memory Portfolio
//!
//! A seeded, read-only stand-in for the remote API. It answers with the
//! same filtering rules the server applies (case-insensitive exact skill
//! match for projects, substring search over titles, descriptions, names,
//! education and skill names) so views behave the same offline.

use std::collections::BTreeMap;

use meapi_domain::{
    FetchError, Link, PortfolioRepository, Profile, ProfileId, ProfileRef, Project, ProjectId,
    SearchResult, Skill, SkillId, SkillUsage,
};

/// How many entries the top-skills endpoint returns at most
const TOP_SKILLS_LIMIT: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolio {
    profiles: Vec<Profile>,
    projects: Vec<Project>,
}

impl InMemoryPortfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// The demo portfolio: one profile, two projects, three skills
    pub fn sample() -> Self {
        let python = Skill::new(SkillId::new(1), "python");
        let django = Skill::new(SkillId::new(2), "django");
        let react = Skill::new(SkillId::new(3), "react");

        let portfolio = Project::new(ProjectId::new(1), "Personal Portfolio")
            .with_description("Portfolio site")
            .with_link(Link::new("github", "https://github.com/you/portfolio"))
            .with_skill(python.clone())
            .with_skill(react);
        let votechain = Project::new(ProjectId::new(2), "VoteChain")
            .with_description("Decentralized voting POC")
            .with_link(Link::new("github", "https://github.com/you/votechain"))
            .with_skill(python.clone())
            .with_skill(django.clone());

        let profile = Profile::new(ProfileId::new(1), "Your Name")
            .with_email("you@example.com")
            .with_education("B.Tech CSE")
            .with_skill(python)
            .with_skill(django)
            .with_project(portfolio.clone())
            .with_project(votechain.clone())
            .with_link(Link::new("github", "https://github.com/you"))
            .with_link(Link::new("linkedin", "https://linkedin.com/in/you"));

        Self::new()
            .with_project(portfolio)
            .with_project(votechain)
            .with_profile(profile)
    }

    fn find_profile(&self, profile: ProfileRef) -> Result<Profile, FetchError> {
        let found = match profile {
            ProfileRef::Default => self.profiles.first(),
            ProfileRef::Id(id) => self.profiles.iter().find(|p| p.id() == id),
        };
        found.cloned().ok_or_else(|| FetchError::server(404, "Not found."))
    }

    fn filter_projects(&self, skill: Option<&str>) -> Vec<Project> {
        match skill.filter(|name| !name.is_empty()) {
            Some(name) => self
                .projects
                .iter()
                .filter(|project| {
                    project
                        .skills()
                        .iter()
                        .any(|s| s.name().eq_ignore_ascii_case(name))
                })
                .cloned()
                .collect(),
            None => self.projects.clone(),
        }
    }

    fn run_search(&self, query: &str) -> SearchResult {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResult::default();
        }
        let matches = |text: &str| text.to_lowercase().contains(&needle);
        let any_skill = |skills: &[Skill]| skills.iter().any(|s| matches(s.name()));

        let projects = self
            .projects
            .iter()
            .filter(|p| matches(p.title()) || matches(p.description()) || any_skill(p.skills()))
            .cloned()
            .collect();
        let profiles = self
            .profiles
            .iter()
            .filter(|p| {
                matches(p.display_name()) || matches(p.education()) || any_skill(p.skills())
            })
            .cloned()
            .collect();
        SearchResult::new(projects, profiles)
    }

    fn rank_skills(&self) -> Vec<SkillUsage> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for skill in self.projects.iter().flat_map(Project::skills) {
            *counts.entry(skill.name()).or_default() += 1;
        }
        let mut ranked: Vec<SkillUsage> = counts
            .into_iter()
            .map(|(name, count)| SkillUsage::new(name, count))
            .collect();
        // Stable sort keeps names alphabetical within a count
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(TOP_SKILLS_LIMIT);
        ranked
    }
}

impl PortfolioRepository for InMemoryPortfolio {
    async fn profile(&self, profile: ProfileRef) -> Result<Profile, FetchError> {
        self.find_profile(profile)
    }

    async fn projects(&self, skill: Option<&str>) -> Result<Vec<Project>, FetchError> {
        Ok(self.filter_projects(skill))
    }

    async fn search(&self, query: &str) -> Result<SearchResult, FetchError> {
        Ok(self.run_search(query))
    }

    async fn top_skills(&self) -> Result<Vec<SkillUsage>, FetchError> {
        Ok(self.rank_skills())
    }

    async fn health(&self) -> Result<(), FetchError> {
        Ok(())
    }
}
