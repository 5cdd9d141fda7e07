//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//!
//! Le query sono runtime-checked (`sqlx::query_as` senza macro `query_as!`):
//! il database è SQLite e lo schema vive in `migrations/`, quindi non c'è un
//! server attivo in fase di compilazione contro cui verificare le query.

pub mod card;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use card::CardRepository;
pub use user::UserRepository;
