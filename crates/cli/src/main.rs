//! Me-API CLI - Browse a developer portfolio from the terminal
//!
//! Usage:
//!   meapi                       - Start interactive mode
//!   meapi profile [--id N]      - Show a profile
//!   meapi projects [--skill S]  - List projects, optionally by skill
//!   meapi search <query>        - Search projects and profiles
//!   meapi skills                - Most used skills
//!   meapi health                - Check the API
//!
//! The API base comes from `--api-base`, `MEAPI_API_BASE` or `apiBase` in
//! the `--config` file, in that order. `--demo` uses built-in sample data.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cli::app::{connect, describe, ConnectArgs};
use cli::commands::{
    HealthCommand, ProfileCommand, ProjectsCommand, SearchCommand, SkillsCommand,
};
use cli::interactive::InteractiveCli;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meapi")]
#[command(about = "Me-API - Browse a developer portfolio from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    connect: ConnectArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a developer profile
    Profile(ProfileCommand),
    /// List projects
    Projects(ProjectsCommand),
    /// Search projects and profiles
    Search(SearchCommand),
    /// Most used skills
    Skills(SkillsCommand),
    /// Check that the API answers
    Health(HealthCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let connection = connect(&cli.connect)?;

    let ok = match cli.command {
        Some(Commands::Profile(cmd)) => cmd.run(connection).await?,
        Some(Commands::Projects(cmd)) => cmd.run(connection).await?,
        Some(Commands::Search(cmd)) => cmd.run(connection).await?,
        Some(Commands::Skills(cmd)) => cmd.run(connection).await?,
        Some(Commands::Health(cmd)) => cmd.run(connection).await?,
        None => {
            // No subcommand - start interactive mode
            let source = describe(&connection);
            let mut interactive = InteractiveCli::new(connection, source);
            interactive.run().await?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
