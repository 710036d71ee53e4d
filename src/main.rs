use crate::config::Config;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod dashboard;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lima_housing=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1️⃣ Read configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the listings. A failure is rendered to users with a retry button.
    let workers = config.max_workers;
    let state = Arc::new(AppState::load(config));

    // 3️⃣ Start the server
    info!("Starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, sharing the state with every worker
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
