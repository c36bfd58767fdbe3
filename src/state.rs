use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::models::{CoinRecord, MarketView, Snapshot};

/// Single shared cell holding the published snapshot. Every write replaces the
/// value inside one `send_modify` call, so readers only ever observe whole snapshots
/// and always the latest one.
#[derive(Clone)]
pub struct SnapshotStore {
    tx: Arc<watch::Sender<MarketView>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(MarketView::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn publish_coins(&self, coins: Vec<CoinRecord>) {
        self.tx.send_modify(|view| {
            view.snapshot = next_snapshot(&view.snapshot, coins);
        });
    }

    pub fn publish_error(&self, message: &str) {
        self.tx.send_modify(|view| {
            view.error = Some(message.to_string());
        });
    }

    /// Replaces the coin list with `f(current)`. Empty snapshots are left
    /// untouched and `false` is returned.
    pub fn apply<F>(&self, f: F) -> bool
    where
        F: FnOnce(&[CoinRecord]) -> Vec<CoinRecord>,
    {
        self.tx.send_if_modified(|view| {
            if view.snapshot.is_empty() {
                return false;
            }
            let coins = f(&view.snapshot.coins);
            view.snapshot = next_snapshot(&view.snapshot, coins);
            true
        })
    }

    pub fn current(&self) -> MarketView {
        self.tx.borrow().clone()
    }
}

fn next_snapshot(previous: &Snapshot, coins: Vec<CoinRecord>) -> Snapshot {
    Snapshot {
        coins,
        updated_at: Some(Utc::now()),
        generation: previous.generation + 1,
    }
}
