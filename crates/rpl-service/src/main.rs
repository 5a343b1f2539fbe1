//! Registry HTTP server binary.

use std::sync::Arc;
use std::time::Instant;

use rpl_catalog::Catalog;
use rpl_service::{build_router, ensure_export_file, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let export = ensure_export_file(&config).await?;

    let catalog = Arc::new(Catalog::new());
    tracing::info!(file = %export.display(), "loading registry export");
    let started = Instant::now();
    catalog.load_from_file(&export)?;

    let stats = catalog.statistics();
    tracing::info!(
        products = stats.product_count,
        indexed_codes = stats.indexed_code_count,
        as_of_date = %stats.as_of_date,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "catalog ready"
    );

    let app = build_router(Arc::clone(&catalog));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "starting HTTP server");

    axum::serve(listener, app).await?;

    Ok(())
}
