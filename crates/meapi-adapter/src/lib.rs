//! # Me-API Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `config` - API base URL resolution (flag, environment, config file)
//! - `gateway/` - Outbound HTTP adapter for the portfolio API
//! - `repository/` - In-memory portfolio for offline use and tests

pub mod config;
pub mod gateway;
pub mod repository;

pub use config::{ApiConfig, ConfigError, ConfigFile};
pub use gateway::HttpPortfolio;
pub use repository::in_memory::InMemoryPortfolio;
