//! Card services - Creazione, like e cancellazione delle cards

use super::parse_id;
use crate::core::{AppError, AppState, ValidatedJson};
use crate::dtos::{CardDTO, CreateCardDTO};
use crate::entities::{Card, User};
use crate::repositories::{Delete, Read};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_cards(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CardDTO>>, AppError> {
    debug!("Listing all cards");
    let cards = state.card.list_all().await?;
    let mut likes_by_card = state.card.likes_by_card().await?;

    let cards_dto = cards
        .into_iter()
        .map(|card| {
            let likes = likes_by_card.remove(&card.card_id).unwrap_or_default();
            CardDTO::from((card, likes))
        })
        .collect::<Vec<_>>();

    info!("Found {} cards", cards_dto.len());
    Ok(Json(cards_dto))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedJson(body): ValidatedJson<CreateCardDTO>,
) -> Result<Json<CardDTO>, AppError> {
    debug!("Creating card");
    // l'owner è l'identità autenticata, il client non può sceglierlo
    let card = state.card.create(current_user.user_id, &body).await?;
    info!("Card {} created", card.card_id);
    Ok(Json(CardDTO::from((card, Vec::new()))))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, card_id = %card_id))]
pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(card_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    debug!("Deleting card");
    let card_id = parse_id(&card_id, "card")?;

    // 1. Esistenza prima dell'ownership: una card assente è 404, non 403
    // 2. Solo l'owner può cancellare
    let card = read_card(&state, &card_id).await?;

    if !card.is_owned_by(current_user.user_id) {
        warn!("User is not the owner of card {}", card_id);
        return Err(AppError::forbidden("Only the owner can delete a card"));
    }

    state.card.delete(&card_id).await?;
    info!("Card {} deleted", card_id);
    Ok(Json(serde_json::json!({ "message": "Card deleted" })))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, card_id = %card_id))]
pub async fn like_card(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(card_id): Path<String>,
) -> Result<Json<CardDTO>, AppError> {
    debug!("Liking card");
    let card_id = parse_id(&card_id, "card")?;

    // like idempotente: ripetere il like della stessa card è un no-op
    let card = read_card(&state, &card_id).await?;
    state.card.add_like(&card_id, &current_user.user_id).await?;

    let likes = state.card.likes(&card_id).await?;
    Ok(Json(CardDTO::from((card, likes))))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, card_id = %card_id))]
pub async fn dislike_card(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(card_id): Path<String>,
) -> Result<Json<CardDTO>, AppError> {
    debug!("Removing like from card");
    let card_id = parse_id(&card_id, "card")?;

    let card = read_card(&state, &card_id).await?;
    state
        .card
        .remove_like(&card_id, &current_user.user_id)
        .await?;

    let likes = state.card.likes(&card_id).await?;
    Ok(Json(CardDTO::from((card, likes))))
}

/// Lookup con esistenza verificata: l'assenza è un 404 esplicito
async fn read_card(state: &AppState, card_id: &i64) -> Result<Card, AppError> {
    match state.card.read(card_id).await? {
        Some(card) => Ok(card),
        None => {
            warn!("Card {} not found", card_id);
            Err(AppError::not_found("Card not found"))
        }
    }
}
