//! Profile - The developer the playground is about
//!
//! The API serves a single profile today, but it can also be addressed by
//! ID, so lookups go through [`ProfileRef`].

use super::link::Link;
use super::project::Project;
use super::skill::Skill;

/// Shown in place of the avatar initial when the name is missing
pub const AVATAR_PLACEHOLDER: char = '?';

/// Unique identifier for a Profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId(u64);

impl ProfileId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which profile to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileRef {
    /// The profile the server considers its default
    #[default]
    Default,
    /// A specific profile
    Id(ProfileId),
}

#[derive(Debug, Clone)]
pub struct Profile {
    id: ProfileId,
    name: Option<String>,
    email: String,
    education: String,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    links: Vec<Link>,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: String::new(),
            education: String::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            links: Vec::new(),
        }
    }

    /// A profile the server returned without a name
    pub fn unnamed(id: ProfileId) -> Self {
        Self {
            name: None,
            ..Self::new(id, "")
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for display; empty when the server sent none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// First character of the name, case preserved
    pub fn avatar_glyph(&self) -> char {
        self.name
            .as_deref()
            .and_then(|name| name.chars().next())
            .unwrap_or(AVATAR_PLACEHOLDER)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Profile {}
