//! SearchResult - Projects and profiles matching a free-text query

use super::profile::Profile;
use super::project::Project;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub projects: Vec<Project>,
    pub profiles: Vec<Profile>,
}

impl SearchResult {
    pub fn new(projects: Vec<Project>, profiles: Vec<Profile>) -> Self {
        Self { projects, profiles }
    }

    /// True when neither list has a match
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.profiles.is_empty()
    }
}
