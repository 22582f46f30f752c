mod catalog;
mod cli;
mod config;
mod discover;
mod error;
mod exclusions;
mod session;
mod ui;

use anyhow::Result;
use clap::Parser;

use catalog::CatalogClient;
use cli::{Cli, Command};
use config::StumbleConfig;
use discover::FetchOutcome;
use error::StumbleError;
use exclusions::ExclusionSet;
use session::Session;
use ui::DiscoverProgress;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = StumbleConfig::load()?;
    if config.api_key.is_empty() {
        return Err(StumbleError::Config(
            "no API key: set CAT_API_KEY or api_key in stumble.toml".into(),
        )
        .into());
    }

    let client = CatalogClient::with_base_url(config.api_key, config.api_url);

    match cli.command {
        Some(Command::Discover { bans }) => {
            let mut exclusions = ExclusionSet::new();
            for value in bans {
                exclusions.add(value);
            }

            let progress = DiscoverProgress::start();
            let outcome = discover::discover(&client, &exclusions, |state| {
                progress.update_state(state);
            })
            .await;
            progress.complete(&outcome, cli.verbose);

            if matches!(outcome, FetchOutcome::TransportError(_)) {
                std::process::exit(1);
            }
        }
        Some(Command::Interactive) | None => {
            Session::new(client, cli.verbose).run().await?;
        }
    }

    Ok(())
}
