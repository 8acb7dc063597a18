//! # Me-API Domain Layer
//!
//! Portfolio records and the fetch lifecycle, with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Profile, Project, Skill, Notification, ...    ││
//! │  │  repository/- PortfolioRepository port + FetchError         ││
//! │  │  service/   - FetchLifecycle (staleness guard)              ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! HTTP lives in `meapi-adapter`; timers and the event loop live in
//! `meapi-usecase`.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    link::Link,
    notification::{Category, Notification, NotificationId, UnknownCategory},
    profile::{Profile, ProfileId, ProfileRef, AVATAR_PLACEHOLDER},
    project::{Project, ProjectId},
    search::SearchResult,
    skill::{Skill, SkillId, SkillUsage},
    view_state::ViewState,
};

pub use repository::portfolio_repository::{FetchError, PortfolioRepository, API_BASE_SETTING};

pub use service::fetch_lifecycle::{Commit, FetchLifecycle, RequestToken};
