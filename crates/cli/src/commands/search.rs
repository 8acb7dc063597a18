//! meapi search command

use clap::Args;
use meapi_usecase::{Connection, SearchView};

use crate::app::AnyPortfolio;
use crate::progress::with_spinner;
use crate::render;

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Text to look for in projects and profiles
    pub query: String,
}

impl SearchCommand {
    pub async fn run(&self, connection: Connection<AnyPortfolio>) -> anyhow::Result<bool> {
        let mut view = SearchView::new(connection);
        view.set_query(self.query.as_str());
        let Some(fetch) = view.submit() else {
            if view.state().is_idle() {
                anyhow::bail!("search query is empty");
            }
            print!("{}", render::search_panel(&view.panel()));
            return Ok(false);
        };

        let done = with_spinner("Searching...", fetch.run()).await;
        view.complete(done);
        print!("{}", render::search_panel(&view.panel()));
        Ok(view.state().data().is_some())
    }
}
