use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
pub mod markets_model;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoinRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub price_change_percentage_24h: f64,
}

/// Ordered coin list as currently published. Row numbering follows `coins` order.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Snapshot {
    pub coins: Vec<CoinRecord>,
    pub updated_at: Option<DateTime<Utc>>,
    pub generation: u64,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

/// Everything the view reads: the snapshot plus the user-visible load error, if any.
#[derive(Serialize, Debug, Clone, Default)]
pub struct MarketView {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub error: Option<String>,
}
