//! Reqwest-backed portfolio gateway.
//!
//! This adapter owns transport details only: URL building, status and
//! error-body mapping, and JSON decoding into domain records.

use reqwest::{header, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use meapi_domain::{
    FetchError, PortfolioRepository, Profile, ProfileRef, Project, SearchResult, SkillUsage,
};

use super::dto::{ProfileDto, ProjectDto, SearchResultDto, SkillUsageDto};
use super::error_body::describe_error_body;
use crate::config::ApiConfig;

const USER_AGENT: &str = concat!("meapi/", env!("CARGO_PKG_VERSION"));

/// Portfolio gateway that performs GET requests below one base URL
#[derive(Debug, Clone)]
pub struct HttpPortfolio {
    client: Client,
    base_url: String,
}

impl HttpPortfolio {
    /// Build a gateway for `base_url` (no trailing slash)
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build a gateway from resolved configuration; `None` when no base is set
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn from_config(config: &ApiConfig) -> Result<Option<Self>, reqwest::Error> {
        config.base_url().map(Self::new).transpose()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base + path`, then query pairs percent-encoded
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|error| {
            FetchError::transport(format!("invalid request URL for {path}: {error}"))
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let error = map_status_error(status, body.as_ref());
            warn!(%url, status = status.as_u16(), %error, "request failed");
            return Err(error);
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            warn!(%url, %error, "undecodable response body");
            FetchError::decode(error.to_string())
        })
    }
}

impl PortfolioRepository for HttpPortfolio {
    async fn profile(&self, profile: ProfileRef) -> Result<Profile, FetchError> {
        let path = match profile {
            ProfileRef::Default => "/profile/".to_string(),
            ProfileRef::Id(id) => format!("/profile/{id}/"),
        };
        let url = self.endpoint(&path, &[])?;
        let dto: ProfileDto = self.get_json(url).await?;
        Ok(dto.into_domain())
    }

    async fn projects(&self, skill: Option<&str>) -> Result<Vec<Project>, FetchError> {
        let query: Vec<(&str, &str)> = skill.map(|name| ("skill", name)).into_iter().collect();
        let url = self.endpoint("/projects/", &query)?;
        let dtos: Vec<ProjectDto> = self.get_json(url).await?;
        Ok(dtos.into_iter().map(ProjectDto::into_domain).collect())
    }

    async fn search(&self, query: &str) -> Result<SearchResult, FetchError> {
        let url = self.endpoint("/search/", &[("q", query)])?;
        let dto: SearchResultDto = self.get_json(url).await?;
        Ok(dto.into_domain())
    }

    async fn top_skills(&self) -> Result<Vec<SkillUsage>, FetchError> {
        let url = self.endpoint("/skills/top/", &[])?;
        let dtos: Vec<SkillUsageDto> = self.get_json(url).await?;
        Ok(dtos.into_iter().map(SkillUsageDto::into_domain).collect())
    }

    async fn health(&self) -> Result<(), FetchError> {
        let url = self.endpoint("/health/", &[])?;
        let _: serde_json::Value = self.get_json(url).await?;
        Ok(())
    }
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::transport(format!("timeout: {error}"))
    } else {
        FetchError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> FetchError {
    FetchError::server(status.as_u16(), describe_error_body(status, body))
}
