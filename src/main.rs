use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gigbook::config::settings::AppConfig;
use gigbook::infrastructure::db::memory::MemoryStore;
use gigbook::infrastructure::db::pool::{connect_to_db, run_migrations};
use gigbook::infrastructure::db::postgres::PgStore;
use gigbook::infrastructure::db::store::EntityStore;
use gigbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gigbook=info,tower_http=info")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new();

    let store: Arc<dyn EntityStore> = match &config.database_url {
        Some(url) => {
            let pool = connect_to_db(url, config.db_max_connections)
                .await
                .context("connecting to PostgreSQL")?;
            run_migrations(&pool).await.context("running migrations")?;
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL is not set, listings are kept in memory and lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = config.bind_address();
    let app = gigbook::app::create_app(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
