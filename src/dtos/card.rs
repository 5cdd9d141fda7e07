//! Card DTOs - Data Transfer Objects per le cards

use crate::dtos::validate_http_url;
use crate::entities::Card;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rappresentazione della card esposta al client, con la lista dei like
#[derive(Serialize, Deserialize, Debug)]
pub struct CardDTO {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub owner: i64,
    pub likes: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<(Card, Vec<i64>)> for CardDTO {
    fn from((card, likes): (Card, Vec<i64>)) -> Self {
        Self {
            id: card.card_id,
            name: card.name,
            link: card.link,
            owner: card.owner_id,
            likes,
            created_at: card.created_at,
        }
    }
}

/// DTO per creare una nuova card; l'owner arriva dall'identità autenticata,
/// mai dal client
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCardDTO {
    #[validate(length(min = 2, max = 30, message = "must be between 2 and 30 characters"))]
    pub name: String,

    #[validate(custom(function = validate_http_url))]
    pub link: String,
}
