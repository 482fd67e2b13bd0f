use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::i18n::Locale;
use crate::AppState;

#[derive(Serialize)]
pub struct LocalesResponse {
    locales: Vec<Locale>,
    default: Locale,
}

pub async fn get_locales(State(state): State<Arc<AppState>>) -> Json<LocalesResponse> {
    Json(LocalesResponse {
        locales: Locale::ALL.to_vec(),
        default: state.catalogs.default_locale(),
    })
}

/// Serves the catalog for `locale`; unsupported codes get the default locale's catalog.
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    let (resolved, catalog) = state.catalogs.resolve(&locale);
    if resolved.code() != locale.to_ascii_lowercase() {
        tracing::debug!("Unknown locale '{}', serving '{}'", locale, resolved.code());
    }
    (
        [(header::CONTENT_LANGUAGE, resolved.code())],
        Json(catalog.clone()),
    )
}
