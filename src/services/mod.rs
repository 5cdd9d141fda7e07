//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod card;
pub mod user;

// Re-exports per facilitare l'import
pub use auth::{signin, signup};
pub use card::{create_card, delete_card, dislike_card, like_card, list_cards};
pub use user::{get_me, get_user_by_id, list_users, update_avatar, update_profile};

use crate::core::{AppError, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}

/// Fallback per path sconosciuti: 404 nella stessa forma degli altri errori
pub async fn not_found_fallback() -> AppError {
    AppError::not_found("Requested resource not found")
}

/// Parsing degli id nei path: un id non numerico è un errore di forma (400),
/// distinto dal 404 di un id ben formato ma assente
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("Malformed {} id", what)))
}
