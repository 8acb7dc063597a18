//! meapi projects command

use clap::Args;
use meapi_usecase::{Connection, ProjectListView};

use crate::app::AnyPortfolio;
use crate::progress::with_spinner;
use crate::render;

#[derive(Debug, Args)]
pub struct ProjectsCommand {
    /// Only projects using this skill (matched by the server)
    #[arg(long)]
    pub skill: Option<String>,
}

impl ProjectsCommand {
    pub async fn run(&self, connection: Connection<AnyPortfolio>) -> anyhow::Result<bool> {
        let mut view = ProjectListView::new(connection, self.skill.clone());
        if let Some(fetch) = view.mount() {
            let done = with_spinner("Loading projects...", fetch.run()).await;
            view.complete(done);
        }
        print!("{}", render::project_panel(&view.panel()));
        Ok(view.state().data().is_some())
    }
}
