use std::collections::HashSet;

use crate::models::markets_model::{EntryDefect, MarketsEntry};
use crate::models::CoinRecord;
use crate::state::SnapshotStore;
use crate::utils::coingecko::{CoinGecko, PER_PAGE};
use thiserror::Error;
use tracing::{error, info};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load cryptocurrency data.";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response body is not a coin list: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("coin {id:?} is malformed: {defect:?}")]
    Malformed { id: String, defect: EntryDefect },
    #[error("coin id {0:?} appears more than once")]
    DuplicateId(String),
}

/// Validates a decoded response, keeping the order the API returned. Entries
/// past the requested page size are dropped.
pub fn records_from_entries(entries: Vec<MarketsEntry>) -> Result<Vec<CoinRecord>, LoadError> {
    let limit = PER_PAGE as usize;
    let mut seen = HashSet::with_capacity(limit);
    let mut records = Vec::with_capacity(entries.len().min(limit));

    for entry in entries.into_iter().take(limit) {
        if !seen.insert(entry.id.clone()) {
            return Err(LoadError::DuplicateId(entry.id));
        }
        let id = entry.id.clone();
        let record = entry
            .into_record()
            .map_err(|defect| LoadError::Malformed { id, defect })?;
        records.push(record);
    }

    Ok(records)
}

pub async fn fetch_snapshot(coingecko: &CoinGecko) -> Result<Vec<CoinRecord>, LoadError> {
    let entries = coingecko.fetch_markets().await?;
    records_from_entries(entries)
}

/// One-shot startup load. Publishes either the coin list or the static error
/// message into `store`, never both, and never retries.
pub async fn load_snapshot(coingecko: &CoinGecko, store: &SnapshotStore) -> Result<usize, LoadError> {
    info!(url = %coingecko.markets_url(), "Loading market snapshot");

    match fetch_snapshot(coingecko).await {
        Ok(coins) => {
            let count = coins.len();
            store.publish_coins(coins);
            info!(count, "Market snapshot loaded");
            Ok(count)
        }
        Err(err) => {
            error!(error = %err, "Error loading market snapshot");
            store.publish_error(LOAD_FAILED_MESSAGE);
            Err(err)
        }
    }
}
