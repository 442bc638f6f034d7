use std::net::SocketAddr;

use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use tufan_server::config::Config;
use tufan_server::routes::create_routes;
use tufan_server::services::{CatalogStore, RecommenderClient};
use tufan_server::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => CatalogStore::from_path(path),
        None => CatalogStore::seeded(),
    }
    .expect("Failed to load event catalog");

    let recommender = RecommenderClient::new(&config.ml_service_url, config.ml_service_timeout)
        .expect("Failed to build ML service client");

    tracing::info!(
        ml_service_url = recommender.base_url(),
        timeout_secs = config.ml_service_timeout.as_secs(),
        "ML service client ready"
    );

    let state = AppState::new(catalog, recommender, config.pricing);
    let app: Router = create_routes(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
