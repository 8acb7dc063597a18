//! Connection setup shared by every command

use std::path::PathBuf;

use clap::Args;
use meapi_adapter::{ApiConfig, HttpPortfolio, InMemoryPortfolio};
use meapi_domain::{
    FetchError, PortfolioRepository, Profile, ProfileRef, Project, SearchResult, SkillUsage,
    API_BASE_SETTING,
};
use meapi_usecase::Connection;
use tracing::{debug, info};

/// Where the portfolio comes from
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectArgs {
    /// API base URL (overrides MEAPI_API_BASE and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// JSON config file with an `apiBase` key
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the built-in sample portfolio instead of the API
    #[arg(long, global = true)]
    pub demo: bool,
}

/// Either the live API or the offline sample
#[derive(Debug)]
pub enum AnyPortfolio {
    Http(HttpPortfolio),
    Demo(InMemoryPortfolio),
}

impl AnyPortfolio {
    /// Where requests go, for status output
    pub fn describe(&self) -> String {
        match self {
            AnyPortfolio::Http(gateway) => gateway.base_url().to_string(),
            AnyPortfolio::Demo(_) => "built-in sample portfolio".to_string(),
        }
    }
}

impl PortfolioRepository for AnyPortfolio {
    async fn profile(&self, profile: ProfileRef) -> Result<Profile, FetchError> {
        match self {
            AnyPortfolio::Http(repo) => repo.profile(profile).await,
            AnyPortfolio::Demo(repo) => repo.profile(profile).await,
        }
    }

    async fn projects(&self, skill: Option<&str>) -> Result<Vec<Project>, FetchError> {
        match self {
            AnyPortfolio::Http(repo) => repo.projects(skill).await,
            AnyPortfolio::Demo(repo) => repo.projects(skill).await,
        }
    }

    async fn search(&self, query: &str) -> Result<SearchResult, FetchError> {
        match self {
            AnyPortfolio::Http(repo) => repo.search(query).await,
            AnyPortfolio::Demo(repo) => repo.search(query).await,
        }
    }

    async fn top_skills(&self) -> Result<Vec<SkillUsage>, FetchError> {
        match self {
            AnyPortfolio::Http(repo) => repo.top_skills().await,
            AnyPortfolio::Demo(repo) => repo.top_skills().await,
        }
    }

    async fn health(&self) -> Result<(), FetchError> {
        match self {
            AnyPortfolio::Http(repo) => repo.health().await,
            AnyPortfolio::Demo(repo) => repo.health().await,
        }
    }
}

/// Human-readable source of a connection
pub fn describe(connection: &Connection<AnyPortfolio>) -> String {
    match connection {
        Connection::Ready(repo) => repo.describe(),
        Connection::Unconfigured => format!("not configured ({API_BASE_SETTING})"),
    }
}

/// Resolve configuration into a connection
///
/// A missing base URL is not an error here: views report it themselves.
/// An invalid one is.
pub fn connect(args: &ConnectArgs) -> anyhow::Result<Connection<AnyPortfolio>> {
    if args.demo {
        info!("using the built-in sample portfolio");
        return Ok(Connection::ready(AnyPortfolio::Demo(InMemoryPortfolio::sample())));
    }

    let config = ApiConfig::resolve(args.api_base.as_deref(), args.config.as_deref())?;
    match HttpPortfolio::from_config(&config)? {
        Some(gateway) => {
            debug!(base_url = gateway.base_url(), "connecting to API");
            Ok(Connection::ready(AnyPortfolio::Http(gateway)))
        }
        None => {
            debug!("no API base configured");
            Ok(Connection::Unconfigured)
        }
    }
}
