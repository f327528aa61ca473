//! Eligibility API server binary.
//!
//! Loads the catalogs, installs logging and serves the eligibility router.
//!
//! # Environment Variables
//! - `ELIGIBILITY_ADDR`: Server address (default: "0.0.0.0:3000")
//! - `ELIGIBILITY_CATALOG_DIR`: Directory holding `restriction_codes.yaml` and
//!   `leave_types.yaml`; the builtin catalogs are used when unset
//! - `RUST_LOG`: Log filter (default: "eligibility_engine=info")

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eligibility_engine::api::{create_router, AppState};
use eligibility_engine::config::CatalogLoader;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eligibility_engine=info,eligibility_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match std::env::var("ELIGIBILITY_CATALOG_DIR") {
        Ok(dir) => {
            tracing::info!(catalog_dir = %dir, "Loading catalogs");
            CatalogLoader::load(&dir)?
        }
        Err(_) => {
            tracing::info!("Using builtin catalogs");
            CatalogLoader::builtin()?
        }
    };

    let catalog = loader.into_catalog();
    tracing::info!(
        restriction_codes = catalog.restriction_codes().len(),
        leave_types = catalog.leave_types().len(),
        critical_codes = %catalog.critical_codes().join(","),
        "Catalogs ready"
    );

    let app = create_router(AppState::new(catalog));

    let addr = std::env::var("ELIGIBILITY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("-- Starting eligibility API on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
