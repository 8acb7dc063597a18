//! CLI Commands
//!
//! One-shot commands. Each returns `Ok(false)` when the fetch failed; the
//! failure has already been rendered by then.

pub mod health;
pub mod profile;
pub mod projects;
pub mod search;
pub mod skills;

pub use health::HealthCommand;
pub use profile::ProfileCommand;
pub use projects::ProjectsCommand;
pub use search::SearchCommand;
pub use skills::SkillsCommand;

use std::sync::Arc;

use meapi_domain::FetchError;
use meapi_usecase::Connection;

/// The repository behind a connection, or the configuration error
fn repository<R>(connection: &Connection<R>) -> Result<Arc<R>, FetchError> {
    match connection {
        Connection::Ready(repo) => Ok(Arc::clone(repo)),
        Connection::Unconfigured => Err(FetchError::configuration_missing()),
    }
}
