mod app;
mod config;
mod error;
mod routes;
mod state;

use crate::state::AppState;
use dotenvy::dotenv;
use soletrack_core::generate_window;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let days = config::window_days_from_env()?;
    let readings = generate_window(days);
    info!(days, readings = readings.len(), "generated insole series");

    let state = Arc::new(AppState { readings });
    let app = app::axum_app(state);

    let addr = config::server_addr_from_env()?;
    info!(%addr, "soletrack started");
    println!(
        "soletrack started at http://{}",
        addr.to_string().replace("0.0.0.0", "127.0.0.1")
    );
    let tcp_listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(tcp_listener, app).await?;
    Ok(())
}
