//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository, la JWT secret e tutto lo stato condiviso
//! necessario per gestire l'applicazione.

use crate::repositories::{CardRepository, UserRepository};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione delle cards
    pub card: CardRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    pub fn new(pool: SqlitePool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            card: CardRepository::new(pool),
            jwt_secret,
        }
    }
}
