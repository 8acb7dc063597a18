//! DTOs for the portfolio API's JSON payloads.
//!
//! The gateway decodes into these transport DTOs first, then maps into domain
//! records in one pass. Missing optional fields default rather than fail, since
//! the API omits blank values.

use serde::Deserialize;
use serde_json::{Map, Value};

use meapi_domain::{
    Link, Profile, ProfileId, Project, ProjectId, SearchResult, Skill, SkillId, SkillUsage,
};

#[derive(Debug, Deserialize)]
pub(crate) struct SkillDto {
    pub(crate) id: u64,
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectDto {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) skills: Vec<SkillDto>,
    #[serde(default)]
    pub(crate) links: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileDto {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) education: Option<String>,
    #[serde(default)]
    pub(crate) skills: Vec<SkillDto>,
    #[serde(default)]
    pub(crate) projects: Vec<ProjectDto>,
    #[serde(default)]
    pub(crate) links: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResultDto {
    #[serde(default)]
    pub(crate) projects: Vec<ProjectDto>,
    #[serde(default)]
    pub(crate) profiles: Vec<ProfileDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkillUsageDto {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) count: u64,
}

impl SkillDto {
    pub(crate) fn into_domain(self) -> Skill {
        Skill::new(SkillId::new(self.id), self.name)
    }
}

impl ProjectDto {
    pub(crate) fn into_domain(self) -> Project {
        let project = Project::new(ProjectId::new(self.id), self.title)
            .with_description(self.description.unwrap_or_default());
        let project = self
            .skills
            .into_iter()
            .fold(project, |project, skill| project.with_skill(skill.into_domain()));
        links_into_domain(self.links)
            .into_iter()
            .fold(project, Project::with_link)
    }
}

impl ProfileDto {
    pub(crate) fn into_domain(self) -> Profile {
        let profile = match self.name {
            Some(name) => Profile::new(ProfileId::new(self.id), name),
            None => Profile::unnamed(ProfileId::new(self.id)),
        }
        .with_email(self.email.unwrap_or_default())
        .with_education(self.education.unwrap_or_default());

        let profile = self
            .skills
            .into_iter()
            .fold(profile, |profile, skill| profile.with_skill(skill.into_domain()));
        let profile = self
            .projects
            .into_iter()
            .fold(profile, |profile, project| profile.with_project(project.into_domain()));
        links_into_domain(self.links)
            .into_iter()
            .fold(profile, Profile::with_link)
    }
}

impl SearchResultDto {
    pub(crate) fn into_domain(self) -> SearchResult {
        SearchResult::new(
            self.projects.into_iter().map(ProjectDto::into_domain).collect(),
            self.profiles.into_iter().map(ProfileDto::into_domain).collect(),
        )
    }
}

impl SkillUsageDto {
    pub(crate) fn into_domain(self) -> SkillUsage {
        SkillUsage::new(self.name, self.count)
    }
}

/// Keep string-valued entries only; anything else has no sensible rendering
fn links_into_domain(links: Option<Map<String, Value>>) -> Vec<Link> {
    links
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(label, value)| match value {
            Value::String(url) if !url.is_empty() => Some(Link::new(label, url)),
            _ => None,
        })
        .collect()
}
