//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod card;
pub mod user;

// Re-exports per facilitare l'import
pub use card::Card;
pub use user::User;
