//! meapi profile command

use clap::Args;
use meapi_domain::{ProfileId, ProfileRef};
use meapi_usecase::{Connection, ProfileView};

use crate::app::AnyPortfolio;
use crate::progress::with_spinner;
use crate::render;

#[derive(Debug, Args)]
pub struct ProfileCommand {
    /// Profile id (defaults to the site owner)
    #[arg(long)]
    pub id: Option<u64>,
}

impl ProfileCommand {
    pub fn target(&self) -> ProfileRef {
        self.id
            .map_or(ProfileRef::Default, |id| ProfileRef::Id(ProfileId::new(id)))
    }

    pub async fn run(&self, connection: Connection<AnyPortfolio>) -> anyhow::Result<bool> {
        let mut view = ProfileView::new(connection, self.target());
        if let Some(fetch) = view.mount() {
            let done = with_spinner("Loading profile...", fetch.run()).await;
            view.complete(done);
        }
        print!("{}", render::profile_panel(&view.panel()));
        Ok(view.state().data().is_some())
    }
}
