//! Soilcast HTTP Server Binary
//!
//! This is the main entry point for the soilcast REST API server.
//! It initializes the repository, the imagery backend and the model store,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin soilcast-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)
//! - `SOILCAST_REGIONS_FILE`: Extra regions, TOML, merged over the built-ins
//! - `SOILCAST_*`: Extraction tunables, see [`soilcast::config`]

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use soilcast::config::ExtractionConfig;
use soilcast::db;
use soilcast::http::{create_router, AppState};
use soilcast::models::region::RegionCatalog;
use soilcast::services::ensemble::{InMemoryModelStore, LinearPredictor, MODEL_NAMES};
use soilcast::sources::SyntheticImageService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Soilcast HTTP Server");

    // Initialize global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    let config = ExtractionConfig::from_env().map_err(anyhow::Error::msg)?;
    let catalog = load_catalog()?;
    info!("Region catalog loaded: {} region(s)", catalog.regions().len());

    // Deterministic local backend and demo models. A production deployment
    // swaps these seams for the remote imagery client and trained artifacts.
    let image_service = Arc::new(SyntheticImageService::new(config.seed));
    let model_store = Arc::new(demo_model_store(&catalog));

    let state = AppState::new(repository, image_service, model_store, catalog, config);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog() -> anyhow::Result<RegionCatalog> {
    match env::var("SOILCAST_REGIONS_FILE") {
        Ok(path) => {
            let contents = std::fs::read_to_string(&path)?;
            Ok(RegionCatalog::from_toml_str(&contents)?)
        }
        Err(_) => Ok(RegionCatalog::builtin()),
    }
}

/// Linear stand-ins for the trained ensemble, one full set per region.
///
/// Feature schema matches what the extraction history produces for the
/// SMAP-legacy path: `[Year, Month]` after the target column is dropped.
fn demo_model_store(catalog: &RegionCatalog) -> InMemoryModelStore {
    let mut store = InMemoryModelStore::new();
    for region in catalog.regions() {
        for (i, name) in MODEL_NAMES.iter().enumerate() {
            // Mild seasonal slope, slightly different per model.
            let month_weight = 0.002 + i as f64 * 0.0005;
            store.register(
                region.name.clone(),
                *name,
                Arc::new(LinearPredictor::new(
                    vec!["Year".to_string(), "Month".to_string()],
                    vec![0.0, month_weight],
                    0.2,
                )),
            );
        }
    }
    store
}
