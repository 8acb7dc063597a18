//! meapi health command

use clap::Args;
use console::style;
use meapi_domain::PortfolioRepository;
use meapi_usecase::Connection;

use super::repository;
use crate::app::AnyPortfolio;
use crate::progress::with_spinner;
use crate::style::{CHECK, CROSS};

/// Check that the API answers
#[derive(Debug, Args)]
pub struct HealthCommand {}

impl HealthCommand {
    pub async fn run(&self, connection: Connection<AnyPortfolio>) -> anyhow::Result<bool> {
        let outcome = match repository(&connection) {
            Ok(repo) => with_spinner("Checking API...", repo.health()).await,
            Err(error) => Err(error),
        };
        match outcome {
            Ok(()) => {
                println!("{} {}", CHECK, style("API is healthy").green());
                Ok(true)
            }
            Err(error) => {
                println!("{} {}", CROSS, error);
                Ok(false)
            }
        }
    }
}
