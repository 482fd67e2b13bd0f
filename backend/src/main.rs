use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use umamibox_server::config::Config;
use umamibox_server::i18n::CatalogStore;
use umamibox_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,umamibox_server=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env().context("Invalid server configuration")?;
    let catalogs = CatalogStore::load(&config.messages_dir, config.default_locale)
        .context("Failed to load message catalogs")?;
    tracing::info!(
        "Serving bundle from {} with default locale '{}'",
        config.static_dir.display(),
        config.default_locale.code()
    );

    let port = config.port;
    let state = Arc::new(AppState { config, catalogs });
    let app = build_router(state);

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
