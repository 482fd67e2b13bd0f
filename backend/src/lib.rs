use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod i18n;
pub mod handlers {
    pub mod locale_handlers;
    pub mod newsletter_handlers;
}

use config::Config;
use handlers::{locale_handlers, newsletter_handlers};
use i18n::CatalogStore;

pub struct AppState {
    pub config: Config,
    pub catalogs: CatalogStore,
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/locales", get(locale_handlers::get_locales))
        .route("/api/messages/{locale}", get(locale_handlers::get_messages))
        .route("/api/newsletter", post(newsletter_handlers::subscribe));

    // Client-side routes (/, /vi, ...) all resolve to the single-page bundle.
    let static_dir = &state.config.static_dir;
    let bundle = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let mut app = Router::new()
        .merge(api_routes)
        .fallback_service(bundle)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    if let Some(frontend_url) = &state.config.frontend_url {
        match frontend_url.parse() {
            Ok(origin) => {
                app = app.layer(
                    CorsLayer::new()
                        .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
                        .allow_origin(AllowOrigin::exact(origin))
                        .allow_headers([
                            axum::http::header::CONTENT_TYPE,
                            axum::http::header::ACCEPT,
                            axum::http::header::ORIGIN,
                        ]),
                );
            }
            Err(e) => tracing::warn!("Ignoring invalid FRONTEND_URL {}: {}", frontend_url, e),
        }
    }

    app.with_state(state)
}
