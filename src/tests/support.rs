use crate::models::CoinRecord;
use crate::simulator::{Direction, FluctuationSource};

pub fn coin(id: &str, price: f64, change: f64) -> CoinRecord {
    CoinRecord {
        id: id.to_string(),
        name: format!("{} coin", id),
        symbol: id.chars().take(3).collect(),
        image: format!("https://assets.example/{}.png", id),
        current_price: price,
        market_cap: price * 1_000_000.0,
        total_volume: price * 25_000.0,
        price_change_percentage_24h: change,
    }
}

pub fn markets_json(count: usize) -> String {
    let entries: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("coin-{}", i),
                "name": format!("Coin {}", i),
                "symbol": format!("c{}", i),
                "image": format!("https://assets.example/coin-{}.png", i),
                "current_price": 1000.0 / (i as f64 + 1.0),
                "market_cap": 5.0e9 - i as f64 * 1.0e7,
                "total_volume": 2.5e8,
                "price_change_percentage_24h": if i % 2 == 0 { 1.25 } else { -0.5 },
                "sparkline_in_7d": null
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// Replays a fixed list of draws, cycling when it runs out.
pub struct ScriptedSource {
    draws: Vec<(f64, Direction)>,
    next: usize,
    pending_direction: Option<Direction>,
}

impl ScriptedSource {
    pub fn new(draws: Vec<(f64, Direction)>) -> Self {
        assert!(!draws.is_empty());
        Self {
            draws,
            next: 0,
            pending_direction: None,
        }
    }

    pub fn repeat(magnitude: f64, direction: Direction) -> Self {
        Self::new(vec![(magnitude, direction)])
    }
}

impl FluctuationSource for ScriptedSource {
    fn next_magnitude(&mut self) -> f64 {
        let (magnitude, direction) = self.draws[self.next % self.draws.len()];
        self.next += 1;
        self.pending_direction = Some(direction);
        magnitude
    }

    fn next_direction(&mut self) -> Direction {
        self.pending_direction
            .take()
            .expect("next_magnitude must be drawn first")
    }
}
