//! Interactive REPL mode
//!
//! Renders the whole page, then reads commands. Background events (fetch
//! completions, notification timers) are handled while waiting for input.

use std::io::{self, Write};

use anyhow::Context;
use console::style;
use dialoguer::Select;
use meapi_domain::PortfolioRepository;
use meapi_usecase::{Connection, Shell};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::progress::with_spinner;
use crate::render;

/// Interactive portfolio browser
pub struct InteractiveCli<R> {
    shell: Shell<R>,
    source: String,
}

impl<R: PortfolioRepository> InteractiveCli<R> {
    pub fn new(connection: Connection<R>, source: impl Into<String>) -> Self {
        Self {
            shell: Shell::new(connection),
            source: source.into(),
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("{}", style("Me-API Interactive Mode").bold());
        println!("Type /help for commands, /quit to exit");
        println!();

        self.shell.mount();
        with_spinner("Loading...", self.shell.settle()).await;
        print!("{}", render::page(&self.shell));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.prompt()?;

            let line = loop {
                tokio::select! {
                    line = lines.next_line() => break line.context("failed to read input")?,
                    event = self.shell.next_event() => {
                        if let Some(event) = event {
                            self.shell.handle(event);
                        }
                    }
                }
            };
            let Some(line) = line else {
                break;
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match self.handle_command(input).await {
                Ok(true) => break,
                Ok(false) => {
                    println!();
                    print!("{}", render::page(&self.shell));
                }
                Err(e) => println!("Error: {}", e),
            }
        }

        Ok(())
    }

    fn prompt(&self) -> io::Result<()> {
        let filter = self.shell.active_skill().unwrap_or("all projects");
        print!("[{}] > ", filter);
        io::stdout().flush()
    }

    /// Handle one line of input; returns `true` to exit
    ///
    /// Lines that do not start with `/` are searched for.
    pub async fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        if !input.starts_with('/') {
            self.search(input);
            self.shell.settle().await;
            return Ok(false);
        }

        let (cmd, arg) = match input.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => print_help(),
            "/skill" | "/s" => self.skill(arg).await?,
            "/clear" => self.shell.clear_filter(),
            "/search" => self.search(arg),
            "/open" => self.open(arg),
            "/retry" | "/reload" => self.shell.reload(),
            "/close" => self.shell.close_notification(),
            "/status" => self.print_status(),
            _ => println!("Unknown command: {}", cmd),
        }

        self.shell.settle().await;
        Ok(false)
    }

    async fn skill(&mut self, arg: &str) -> anyhow::Result<()> {
        if arg.is_empty() {
            return self.pick_skill().await;
        }
        match arg.parse::<usize>() {
            Ok(n) => {
                let index = n.checked_sub(1);
                if index.and_then(|i| self.shell.activate_skill(i)).is_none() {
                    println!("No skill [{}]", n);
                }
            }
            Err(_) => self.shell.select_skill(arg),
        }
        Ok(())
    }

    async fn pick_skill(&mut self) -> anyhow::Result<()> {
        let names: Vec<String> = self
            .shell
            .profile()
            .state()
            .data()
            .map(|profile| profile.skills().iter().map(|s| s.name().to_string()).collect())
            .unwrap_or_default();
        if names.is_empty() {
            println!("No skills to choose from");
            return Ok(());
        }

        let picked = tokio::task::spawn_blocking(move || {
            Select::new()
                .with_prompt("Filter projects by skill")
                .items(&names)
                .default(0)
                .interact_opt()
        })
        .await??;

        if let Some(index) = picked {
            self.shell.activate_skill(index);
        }
        Ok(())
    }

    fn search(&mut self, query: &str) {
        if self.shell.search().is_searching() {
            println!("A search is already running");
            return;
        }
        self.shell.set_search_query(query);
        if !self.shell.submit_search() && query.trim().is_empty() {
            println!("Usage: /search <text>");
        }
    }

    fn open(&mut self, arg: &str) {
        let opened = arg
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.shell.open_project(index));
        match opened {
            Some(project) => {
                if let Some(link) = project.links().first() {
                    println!("{}: {}", link.label, link.url);
                }
            }
            None => println!("No project [{}]", arg),
        }
    }

    fn print_status(&self) {
        println!("Status:");
        println!("  API: {}", self.source);
        println!("  Profile: {}", self.shell.profile().state().label());
        println!("  Projects: {}", self.shell.projects().state().label());
        println!("  Search: {}", self.shell.search().state().label());
        println!(
            "  Filter: {}",
            self.shell.active_skill().unwrap_or("(none)")
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /skill [name|n]  - Filter projects by skill (picker without argument)");
    println!("  /clear           - Clear the skill filter");
    println!("  /search <text>   - Search projects and profiles (plain text works too)");
    println!("  /open <n>        - Open project [n]");
    println!("  /retry           - Reload the page");
    println!("  /close           - Dismiss the notification");
    println!("  /status          - Show current status");
    println!("  /quit            - Exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use meapi_adapter::InMemoryPortfolio;
    use meapi_usecase::SearchPanel;

    async fn mounted() -> InteractiveCli<InMemoryPortfolio> {
        let mut cli = InteractiveCli::new(Connection::ready(InMemoryPortfolio::sample()), "test");
        cli.shell.mount();
        cli.shell.settle().await;
        cli
    }

    // ============== Exit Commands ==============

    #[tokio::test]
    async fn test_handle_quit_command() {
        let mut cli = mounted().await;
        assert!(cli.handle_command("/quit").await.unwrap());
    }

    #[tokio::test]
    async fn test_handle_exit_command() {
        let mut cli = mounted().await;
        assert!(cli.handle_command("/exit").await.unwrap());
    }

    #[tokio::test]
    async fn test_handle_q_command() {
        let mut cli = mounted().await;
        assert!(cli.handle_command("/q").await.unwrap());
    }

    // ============== Informational Commands ==============

    #[tokio::test]
    async fn test_handle_help_command() {
        let mut cli = mounted().await;
        assert!(!cli.handle_command("/help").await.unwrap());
        assert!(!cli.handle_command("/h").await.unwrap());
    }

    #[tokio::test]
    async fn test_handle_status_command() {
        let mut cli = mounted().await;
        assert!(!cli.handle_command("/status").await.unwrap());
    }

    #[tokio::test]
    async fn test_handle_unknown_command() {
        let mut cli = mounted().await;
        assert!(!cli.handle_command("/unknown").await.unwrap());
        assert!(!cli.handle_command("/").await.unwrap());
    }

    // ============== Skill Filter ==============

    #[tokio::test]
    async fn test_skill_by_name() {
        let mut cli = mounted().await;
        cli.handle_command("/skill react").await.unwrap();

        assert_eq!(cli.shell.active_skill(), Some("react"));
        assert_eq!(cli.shell.projects().filter(), Some("react"));
    }

    #[tokio::test]
    async fn test_skill_by_index() {
        let mut cli = mounted().await;
        cli.handle_command("/skill 2").await.unwrap();

        assert_eq!(cli.shell.active_skill(), Some("django"));
        assert_eq!(
            cli.shell.notification().unwrap().message(),
            "Filtering projects by: django"
        );
    }

    #[tokio::test]
    async fn test_skill_index_out_of_range() {
        let mut cli = mounted().await;
        cli.handle_command("/skill 9").await.unwrap();
        cli.handle_command("/skill 0").await.unwrap();

        assert!(cli.shell.active_skill().is_none());
    }

    #[tokio::test]
    async fn test_clear_filter() {
        let mut cli = mounted().await;
        cli.handle_command("/skill python").await.unwrap();
        cli.handle_command("/clear").await.unwrap();

        assert!(cli.shell.active_skill().is_none());
        assert!(cli.shell.projects().filter().is_none());
    }

    // ============== Search ==============

    #[tokio::test]
    async fn test_plain_text_searches() {
        let mut cli = mounted().await;
        cli.handle_command("vote").await.unwrap();

        match cli.shell.search().panel() {
            SearchPanel::Results(result) => assert_eq!(result.projects.len(), 1),
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_without_text_does_nothing() {
        let mut cli = mounted().await;
        cli.handle_command("/search").await.unwrap();
        cli.handle_command("/search    ").await.unwrap();

        assert_eq!(cli.shell.search().panel(), SearchPanel::Idle);
    }

    // ============== Projects And Page ==============

    #[tokio::test]
    async fn test_open_project() {
        let mut cli = mounted().await;
        cli.handle_command("/open 2").await.unwrap();

        assert_eq!(
            cli.shell.notification().unwrap().message(),
            "Opening VoteChain"
        );
    }

    #[tokio::test]
    async fn test_open_invalid_project() {
        let mut cli = mounted().await;
        cli.handle_command("/close").await.unwrap();
        cli.handle_command("/open x").await.unwrap();
        cli.handle_command("/open 7").await.unwrap();

        assert!(cli.shell.notification().is_none());
    }

    #[tokio::test]
    async fn test_close_notification() {
        let mut cli = mounted().await;
        assert!(cli.shell.notification().is_some());

        cli.handle_command("/close").await.unwrap();
        assert!(cli.shell.notification().is_none());
    }

    #[tokio::test]
    async fn test_retry_reloads_page() {
        let mut cli = mounted().await;
        cli.handle_command("/skill python").await.unwrap();
        cli.handle_command("/retry").await.unwrap();

        assert!(cli.shell.active_skill().is_none());
        assert!(cli.shell.profile().state().data().is_some());
        assert_eq!(
            cli.shell.notification().unwrap().message(),
            "Profile loaded successfully!"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_page_renders_errors() {
        let mut cli: InteractiveCli<InMemoryPortfolio> =
            InteractiveCli::new(Connection::Unconfigured, "not configured");
        cli.shell.mount();
        cli.shell.settle().await;

        let page = console::strip_ansi_codes(&render::page(&cli.shell)).into_owned();
        assert!(page.contains("MEAPI_API_BASE not set"));
        assert!(!cli.handle_command("/status").await.unwrap());
    }
}
