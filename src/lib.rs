//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post, put},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::not_found_fallback;

    Router::new()
        .route("/", get(root))
        .merge(configure_auth_routes())
        .nest("/users", configure_user_routes(state.clone()))
        .nest("/cards", configure_card_routes(state.clone()))
        .fallback(not_found_fallback)
        .with_state(state)
}

/// Configura le routes pubbliche (signup, signin): niente middleware di
/// autenticazione, qui non esiste ancora un'identità
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/// Configura le routes per la gestione degli utenti (tutte autenticate)
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_users))
        .route("/me", get(get_me).patch(update_profile))
        .route("/me/avatar", patch(update_avatar))
        .route("/{user_id}", get(get_user_by_id))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes per la gestione delle cards (tutte autenticate)
fn configure_card_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_cards).post(create_card))
        .route("/{card_id}", delete(delete_card))
        .route("/{card_id}/likes", put(like_card).delete(dislike_card))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
