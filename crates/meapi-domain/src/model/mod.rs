//! Domain Models - The records the playground shows
//!
//! Profiles, projects and skills come from the API and are never edited
//! locally. Notifications and view state are client-side only.

pub mod link;
pub mod notification;
pub mod profile;
pub mod project;
pub mod search;
pub mod skill;
pub mod view_state;
