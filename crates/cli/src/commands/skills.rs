//! meapi skills command

use std::fmt::Write;

use clap::Args;
use console::style;
use meapi_domain::{PortfolioRepository, SkillUsage};
use meapi_usecase::Connection;

use super::repository;
use crate::app::AnyPortfolio;
use crate::progress::with_spinner;

/// Most used skills across all projects
#[derive(Debug, Args)]
pub struct SkillsCommand {}

impl SkillsCommand {
    pub async fn run(&self, connection: Connection<AnyPortfolio>) -> anyhow::Result<bool> {
        let outcome = match repository(&connection) {
            Ok(repo) => with_spinner("Loading skills...", repo.top_skills()).await,
            Err(error) => Err(error),
        };
        match outcome {
            Ok(skills) => {
                print!("{}", ranking(&skills));
                Ok(true)
            }
            Err(error) => {
                println!("{} {}", style("Error:").red().bold(), error);
                Ok(false)
            }
        }
    }
}

fn ranking(skills: &[SkillUsage]) -> String {
    if skills.is_empty() {
        return format!("{}\n", style("No skills yet").dim());
    }
    let width = skills.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, skill) in skills.iter().enumerate() {
        let plural = if skill.count == 1 { "" } else { "s" };
        let _ = writeln!(
            out,
            "{:>2}. {:<width$}  {} project{}",
            i + 1,
            skill.name,
            skill.count,
            plural,
            width = width
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use meapi_adapter::InMemoryPortfolio;

    #[test]
    fn test_ranking_lines() {
        let skills = vec![SkillUsage::new("python", 2), SkillUsage::new("react", 1)];
        assert_eq!(
            ranking(&skills),
            " 1. python  2 projects\n 2. react   1 project\n"
        );
    }

    #[test]
    fn test_empty_ranking() {
        let out = console::strip_ansi_codes(&ranking(&[])).into_owned();
        assert_eq!(out, "No skills yet\n");
    }

    #[tokio::test]
    async fn test_demo_skills() {
        let connection = Connection::ready(AnyPortfolio::Demo(InMemoryPortfolio::sample()));
        assert!(SkillsCommand {}.run(connection).await.unwrap());
    }

    #[tokio::test]
    async fn test_unconfigured_reports_failure() {
        assert!(!SkillsCommand {}.run(Connection::Unconfigured).await.unwrap());
    }
}
