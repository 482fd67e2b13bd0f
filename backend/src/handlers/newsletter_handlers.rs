use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::AppError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts a footer newsletter sign-up. Nothing is stored.
///
/// Bodies that are not JSON or lack an `email` string get the same JSON 400 as a bad address.
pub async fn subscribe(
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected newsletter body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;
    let email = request.email.trim();
    if !is_valid_email(email) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    tracing::info!("Newsletter subscription accepted");
    tracing::debug!("Newsletter subscriber: {}", email);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("chef@umamibox.vn"));
        assert!(is_valid_email("a.b+c@mail.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@umamibox.vn"));
        assert!(!is_valid_email("spaces in@umamibox.vn"));
        assert!(!is_valid_email("chef@localhost"));
    }
}
