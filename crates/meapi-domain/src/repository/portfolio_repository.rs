//! Portfolio Repository - Read access to the remote portfolio API
//!
//! Every read a view performs goes through this port. The HTTP gateway in
//! the adapter layer implements it; tests use scripted fakes.

use core::future::Future;

use crate::model::profile::{Profile, ProfileRef};
use crate::model::project::Project;
use crate::model::search::SearchResult;
use crate::model::skill::SkillUsage;

/// Name of the setting that holds the API base URL
pub const API_BASE_SETTING: &str = "MEAPI_API_BASE";

/// Why a read failed
///
/// `Display` produces the normalized message views show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No API base is configured; nothing was sent
    ConfigurationMissing { setting: String },
    /// The request never produced a response (DNS, refused, timeout, ...)
    Transport { description: String },
    /// The server answered with a non-success status
    Server { status: u16, message: String },
    /// The server answered 2xx but the body was not what we expected
    Decode { description: String },
}

impl FetchError {
    pub fn configuration_missing() -> Self {
        FetchError::ConfigurationMissing {
            setting: API_BASE_SETTING.to_string(),
        }
    }

    pub fn transport(description: impl Into<String>) -> Self {
        FetchError::Transport {
            description: description.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        FetchError::Server {
            status,
            message: message.into(),
        }
    }

    pub fn decode(description: impl Into<String>) -> Self {
        FetchError::Decode {
            description: description.into(),
        }
    }

    pub fn is_configuration_missing(&self) -> bool {
        matches!(self, FetchError::ConfigurationMissing { .. })
    }
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FetchError::ConfigurationMissing { setting } => write!(
                f,
                "{} not set. Configure the API base URL (--api-base, {} or the config file).",
                setting, setting
            ),
            FetchError::Transport { description } => f.write_str(description),
            FetchError::Server { message, .. } => f.write_str(message),
            FetchError::Decode { description } => {
                write!(f, "Unexpected response from API: {}", description)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Portfolio Repository Trait
///
/// This is a PORT in hexagonal architecture. Filtering and searching happen
/// on the server; implementations pass the parameters through.
pub trait PortfolioRepository: Send + Sync + 'static {
    /// `GET /profile/` or `GET /profile/<id>/`
    fn profile(
        &self,
        profile: ProfileRef,
    ) -> impl Future<Output = Result<Profile, FetchError>> + Send;

    /// `GET /projects/`, with `?skill=<name>` when a filter is given
    fn projects(
        &self,
        skill: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Project>, FetchError>> + Send;

    /// `GET /search/?q=<text>`
    fn search(&self, query: &str)
        -> impl Future<Output = Result<SearchResult, FetchError>> + Send;

    /// `GET /skills/top/`
    fn top_skills(&self) -> impl Future<Output = Result<Vec<SkillUsage>, FetchError>> + Send;

    /// `GET /health/`
    fn health(&self) -> impl Future<Output = Result<(), FetchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_missing_message_is_actionable() {
        let err = FetchError::configuration_missing();
        let message = err.to_string();

        assert!(err.is_configuration_missing());
        assert!(message.starts_with("MEAPI_API_BASE not set."));
        assert!(message.contains("--api-base"));
    }

    #[test]
    fn test_server_error_shows_only_normalized_message() {
        let err = FetchError::server(404, "Not found.");
        assert_eq!(err.to_string(), "Not found.");
        assert!(!err.is_configuration_missing());
    }

    #[test]
    fn test_transport_error_shows_description() {
        let err = FetchError::transport("error sending request for url (http://localhost:1/)");
        assert_eq!(
            err.to_string(),
            "error sending request for url (http://localhost:1/)"
        );
    }

    #[test]
    fn test_decode_error_is_prefixed() {
        let err = FetchError::decode("missing field `id`");
        assert_eq!(
            err.to_string(),
            "Unexpected response from API: missing field `id`"
        );
    }
}
