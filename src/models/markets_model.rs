use serde::{Deserialize, Serialize};

use super::CoinRecord;

/// One element of the `/coins/markets` response as CoinGecko sends it.
/// Numeric fields stay optional here so that nulls surface as validation errors
/// instead of opaque decode failures.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MarketsEntry {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryDefect {
    MissingField(&'static str),
    NonFinite(&'static str),
    NonPositivePrice(f64),
}

impl MarketsEntry {
    pub fn into_record(self) -> Result<CoinRecord, EntryDefect> {
        let current_price = finite(self.current_price, "current_price")?;
        if current_price <= 0.0 {
            return Err(EntryDefect::NonPositivePrice(current_price));
        }
        let market_cap = finite(self.market_cap, "market_cap")?;
        let total_volume = finite(self.total_volume, "total_volume")?;
        let price_change_percentage_24h = match self.price_change_percentage_24h {
            Some(value) if !value.is_finite() => {
                return Err(EntryDefect::NonFinite("price_change_percentage_24h"))
            }
            Some(value) => value,
            None => 0.0,
        };

        Ok(CoinRecord {
            id: self.id,
            name: self.name,
            symbol: self.symbol,
            image: self.image,
            current_price,
            market_cap,
            total_volume,
            price_change_percentage_24h,
        })
    }
}

fn finite(value: Option<f64>, field: &'static str) -> Result<f64, EntryDefect> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(EntryDefect::NonFinite(field)),
        None => Err(EntryDefect::MissingField(field)),
    }
}
