pub mod board;
pub mod cli;
pub mod convert;
pub mod core;
pub mod error;
pub mod providers;
pub mod store;

pub use error::Error;

use crate::core::config::AppConfig;
use crate::providers::FrankfurterProvider;
use crate::store::SqliteHistoryStore;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// A user-facing operation, decoupled from the clap surface so integration
/// tests can drive the full flow.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        from: String,
        to: String,
        amount: String,
    },
    Rates {
        base: Option<String>,
    },
    Currencies,
    History,
    ClearHistory {
        yes: bool,
    },
    SetBase {
        currency: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = Arc::new(FrankfurterProvider::new(&config.provider.base_url));
    let store = Arc::new(SqliteHistoryStore::open(config.default_data_path()?)?);

    match command {
        AppCommand::Convert { from, to, amount } => {
            cli::convert::run(provider, store, &from, &to, &amount).await
        }
        AppCommand::Rates { base } => cli::rates::run(provider.as_ref(), &store, base.as_deref()).await,
        AppCommand::Currencies => cli::currencies::run(provider.as_ref()).await,
        AppCommand::History => cli::history::list(store.as_ref()).await,
        AppCommand::ClearHistory { yes } => cli::history::clear(store.as_ref(), yes).await,
        AppCommand::SetBase { currency } => cli::rates::set_base(&store, &currency),
    }
}
