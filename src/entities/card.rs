//! Card entity - Post condiviso (immagine + titolo) con owner immutabile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Card {
    pub card_id: i64,
    pub name: String,
    pub link: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// L'owner viene fissato alla creazione e non cambia mai
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}
