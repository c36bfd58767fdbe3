mod config;
mod fetcher;
mod models;
mod render;
mod routes;
mod simulator;
mod state;
mod tests;
mod utils;
use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use config::Config;
use fetcher::load_snapshot;
use simulator::{start_simulation, RandomFluctuation};
use state::SnapshotStore;
use std::io;
use tracing::info;
use utils::coingecko::CoinGecko;

#[actix_web::main]
async fn main() -> io::Result<()> {
    utils::init_tracing();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let coingecko = CoinGecko::init(&config).map_err(io::Error::other)?;
    let store = SnapshotStore::new();

    let loader_store = store.clone();
    tokio::spawn(async move { load_snapshot(&coingecko, &loader_store).await.ok() });

    let source = match config.simulation_seed {
        Some(seed) => RandomFluctuation::seeded(seed),
        None => RandomFluctuation::new(),
    };
    let simulation = start_simulation(store.clone(), source);

    let store_data = Data::new(store);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(Cors::permissive())
            .configure(routes::coins::init)
    })
    .bind((config.host.as_str(), config.port))?;
    info!(host = %config.host, port = config.port, "Serving coin table");

    let result = server.run().await;

    info!(running = simulation.is_running(), "Server stopped, stopping price simulation");
    simulation.stop().await;
    result
}
