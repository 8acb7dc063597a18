//! Outbound gateway to the remote portfolio API

mod dto;
mod error_body;
pub mod http;

pub use http::HttpPortfolio;
