//! Project - A piece of work listed in the portfolio
//!
//! Projects are passed through from the API as-is. The client never
//! filters or edits them; the project list asks the server to filter.

use super::link::Link;
use super::skill::Skill;

/// Unique identifier for a Project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    skills: Vec<Skill>,
    links: Vec<Link>,
}

impl Project {
    pub fn new(id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            skills: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: attach a skill
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Builder: attach a link
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}
