//! Skill - A named technology attached to profiles and projects
//!
//! Skills are identified by their numeric ID. The name is what users see
//! and what the project filter matches against.

/// Unique identifier for a Skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillId(u64);

impl SkillId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SkillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skill - Identity is by ID; two skills with the same ID are the same skill
/// even if one copy carries a stale name.
#[derive(Debug, Clone)]
pub struct Skill {
    id: SkillId,
    name: String,
}

impl Skill {
    pub fn new(id: SkillId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> SkillId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Skill {}

/// How many projects use a skill, as reported by the top-skills endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillUsage {
    pub name: String,
    pub count: u64,
}

impl SkillUsage {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
