use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::{
    sync::oneshot,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::models::CoinRecord;
use crate::state::SnapshotStore;
use crate::utils::round_two_decimals;

pub const TICK_PERIOD: Duration = Duration::from_millis(1500);
pub const MIN_MAGNITUDE: f64 = 0.1;
pub const MAX_MAGNITUDE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn signed(self, magnitude: f64) -> f64 {
        match self {
            Direction::Up => magnitude,
            Direction::Down => -magnitude,
        }
    }
}

/// Supplies the per-coin draws for a tick.
pub trait FluctuationSource {
    /// Percentage magnitude in `[0.1, 1.5]`, rounded to 2 decimals.
    fn next_magnitude(&mut self) -> f64;
    fn next_direction(&mut self) -> Direction;
}

pub struct RandomFluctuation {
    rng: StdRng,
}

impl RandomFluctuation {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFluctuation {
    fn default() -> Self {
        Self::new()
    }
}

impl FluctuationSource for RandomFluctuation {
    fn next_magnitude(&mut self) -> f64 {
        round_two_decimals(self.rng.gen_range(MIN_MAGNITUDE..=MAX_MAGNITUDE))
    }

    fn next_direction(&mut self) -> Direction {
        if self.rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Moves one coin by a single draw. Only the price and the 24h change move;
/// the change is a running sum of signed magnitudes.
pub fn fluctuate(coin: &CoinRecord, magnitude: f64, direction: Direction) -> CoinRecord {
    let delta = direction.signed(magnitude);
    let factor = 1.0 + delta / 100.0;

    let mut current_price = coin.current_price * factor;
    if !current_price.is_finite() {
        current_price = coin.current_price;
    }
    if current_price <= 0.0 {
        current_price = f64::MIN_POSITIVE;
    }

    CoinRecord {
        current_price,
        price_change_percentage_24h: coin.price_change_percentage_24h + delta,
        ..coin.clone()
    }
}

pub fn perturb<S: FluctuationSource + ?Sized>(coins: &[CoinRecord], source: &mut S) -> Vec<CoinRecord> {
    coins
        .iter()
        .map(|coin| {
            let magnitude = source.next_magnitude();
            let direction = source.next_direction();
            fluctuate(coin, magnitude, direction)
        })
        .collect()
}

/// Owned handle of a running simulation. Whoever holds it owns the timer:
/// `stop` consumes it, and dropping it without `stop` aborts the task.
pub struct SimulationHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<u64>>,
}

impl SimulationHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops ticking and waits for the task. Returns the number of ticks applied;
    /// ticks that fired on an empty snapshot are not counted.
    pub async fn stop(mut self) -> u64 {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        let Some(task) = self.task.take() else {
            return 0;
        };
        match task.await {
            Ok(ticks) => {
                info!(ticks, "Price simulation stopped");
                ticks
            }
            Err(err) => {
                warn!(error = %err, "Price simulation task ended abnormally");
                0
            }
        }
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

pub fn start_simulation<S>(store: SnapshotStore, source: S) -> SimulationHandle
where
    S: FluctuationSource + Send + 'static,
{
    start_simulation_with_period(store, source, TICK_PERIOD)
}

pub fn start_simulation_with_period<S>(
    store: SnapshotStore,
    mut source: S,
    period: Duration,
) -> SimulationHandle
where
    S: FluctuationSource + Send + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut ticks: u64 = 0;
        info!(period_ms = period.as_millis() as u64, "Price simulation started");

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                _ = interval.tick() => {
                    if store.apply(|coins| perturb(coins, &mut source)) {
                        ticks += 1;
                        debug!(tick = ticks, "Simulated price tick");
                    }
                }
            }
        }
        ticks
    });

    SimulationHandle {
        shutdown: Some(shutdown_tx),
        task: Some(task),
    }
}
