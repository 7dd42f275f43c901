//! Terminal presentation of the feeds.
//!
//! Each command behaves like a screen appearing: it triggers one refresh of
//! the feeds it shows, then renders whatever the store holds.

pub mod render;

use anyhow::{bail, Context, Result};
use chrono::Local;
use log::info;
use serde::Serialize;

use crate::config::{Command, Config};
use crate::error_handling::RefreshError;
use crate::fetch::HttpFetcher;
use crate::initialization::init_client;
use crate::models::FeedSnapshot;
use crate::normalize::Feed;
use crate::reference::{find_neighborhood, NEIGHBORHOODS};
use crate::store::{FeedState, FeedStore, FieldOfficeStore, InvasionStore};

pub use render::{render_field_offices, render_invasions, render_streets, StoreStatus};

fn status_of<F: Feed>(store: &FeedStore<F>) -> (FeedState, Option<RefreshError>) {
    (store.state(), store.last_error())
}

/// Fails when the first load of a store did not produce anything to show.
fn ensure_loaded<F: Feed>(store: &FeedStore<F>) -> Result<()> {
    if store.state() == FeedState::Uninitialized {
        match store.last_error() {
            Some(error) => bail!("Could not load {} feed: {}", F::ENDPOINT, error),
            None => bail!("{} feed was never refreshed", F::ENDPOINT),
        }
    }
    Ok(())
}

fn to_json<T: Serialize>(snapshot: &FeedSnapshot<T>) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    json.push('\n');
    Ok(json)
}

/// Runs one CLI command and returns the text to print.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the neighborhood filter matches
/// nothing, or a feed could not be loaded at all. A failed refresh is not an
/// error by itself once a store has data.
pub async fn run_command(config: &Config, command: &Command) -> Result<String> {
    match command {
        Command::Streets { neighborhood } => match neighborhood {
            Some(name) => {
                let found = find_neighborhood(name)
                    .with_context(|| format!("Unknown neighborhood '{}'", name))?;
                Ok(render_streets(Some(found)))
            }
            None => Ok(render_streets(NEIGHBORHOODS)),
        },
        Command::Invasions { json } => {
            let store = InvasionStore::from_config(config)
                .context("Failed to initialize invasions feed")?;
            let _ = store.refresh().await;
            ensure_loaded(&store)?;
            if *json {
                return to_json(&store.current());
            }
            let (state, last_error) = status_of(&store);
            Ok(render_invasions(
                &store.current(),
                StoreStatus {
                    state,
                    last_error: last_error.as_ref(),
                },
                &Local,
            ))
        }
        Command::FieldOffices { json } => {
            let store = FieldOfficeStore::from_config(config)
                .context("Failed to initialize field offices feed")?;
            let _ = store.refresh().await;
            ensure_loaded(&store)?;
            if *json {
                return to_json(&store.current());
            }
            let (state, last_error) = status_of(&store);
            Ok(render_field_offices(
                &store.current(),
                StoreStatus {
                    state,
                    last_error: last_error.as_ref(),
                },
                &Local,
            ))
        }
        Command::Status => {
            let client = init_client(config).context("Failed to initialize HTTP client")?;
            let invasions = InvasionStore::new(HttpFetcher::new(client.clone(), config)?);
            let offices = FieldOfficeStore::new(HttpFetcher::new(client, config)?);

            let _ = futures::join!(invasions.refresh(), offices.refresh());
            info!(
                "Status refresh finished: invasions {}, field offices {}",
                invasions.state(),
                offices.state()
            );
            if let (Err(inv_err), Err(fo_err)) =
                (ensure_loaded(&invasions), ensure_loaded(&offices))
            {
                bail!("{}; {}", inv_err, fo_err);
            }

            let (inv_state, inv_error) = status_of(&invasions);
            let (fo_state, fo_error) = status_of(&offices);
            let mut out = String::from("== Invasions ==\n");
            out.push_str(&render_invasions(
                &invasions.current(),
                StoreStatus {
                    state: inv_state,
                    last_error: inv_error.as_ref(),
                },
                &Local,
            ));
            out.push_str("\n== Field Offices ==\n");
            out.push_str(&render_field_offices(
                &offices.current(),
                StoreStatus {
                    state: fo_state,
                    last_error: fo_error.as_ref(),
                },
                &Local,
            ));
            Ok(out)
        }
    }
}
