use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use admin_server::config::AppConfig;
use admin_server::state::AppState;
use admin_server::{build_router, database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = database::init_db(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    info!("Database connected and schema synced");

    seed::seed_role_permissions(&db)
        .await
        .context("Failed to seed roles")?;
    seed::seed_admin(&db, &config.auth)
        .await
        .context("Failed to seed admin principal")?;
    seed::ensure_indexes(&db).await?;

    let blob_store = match database::init_blob_store(&config.storage).await {
        Ok(store) => {
            info!(backend = ?config.storage.backend, "Object storage ready");
            Some(store)
        }
        Err(e) => {
            error!(
                backend = ?config.storage.backend,
                error = %e,
                "Object storage unavailable; deletion endpoints will report a configuration error"
            );
            None
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        db,
        config,
        blob_store,
    };
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
