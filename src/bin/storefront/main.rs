//! Storefront cart replay tool
//!
//! Loads a product catalogue, replays a scripted list of cart actions through
//! a [`CartStore`] and prints the resulting cart.

use std::{fs, io};

use thiserror::Error;
use tracing::info;

use storefront::prelude::*;

use crate::{config::Config, observability::ObservabilityError};

mod config;
mod observability;

/// Errors that stop a replay.
#[derive(Debug, Error)]
enum AppError {
    /// Invalid command line or environment configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] clap::Error),

    /// Logging could not be initialised.
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    /// Fixtures could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// JSON action records could not be decoded.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The cart summary could not be produced.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// The JSON action file could not be read.
    #[error("Failed to read actions: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) if !error.use_stderr() => {
            // --help and --version
            error.print()?;
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    observability::init(&config)?;

    let mut fixture = Fixture::with_base_path(&config.fixtures);

    fixture.load_products(&config.catalogue)?;

    let currency = fixture.currency()?;

    let actions = if let Some(path) = &config.json {
        CartAction::list_from_json(&fs::read_to_string(path)?)?
    } else {
        fixture.load_actions(&config.actions)?.take_actions()
    };

    let mut store = CartStore::new();

    store.dispatch_all(actions);

    info!(
        dispatched = store.dispatched(),
        items = store.state().len(),
        "replay finished"
    );

    CartSummary::new(store.state(), currency)?.write_to(io::stdout().lock())?;

    Ok(())
}
