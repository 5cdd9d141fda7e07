//! User services - Profili utente
//!
//! Le mutazioni (`update_profile`, `update_avatar`) operano sempre
//! sull'identità autenticata presa dall'Extension, mai su un id del client.

use super::parse_id;
use crate::core::{AppError, AppState, ValidatedJson};
use crate::dtos::{UpdateAvatarDTO, UpdateUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::{Read, Update};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserDTO>>, AppError> {
    debug!("Listing all users");
    let users = state.user.list_all().await?;
    info!("Found {} users", users.len());
    let users_dto = users.into_iter().map(UserDTO::from).collect::<Vec<_>>();
    Ok(Json(users_dto))
}

/// Il profilo dell'utente autenticato (già risolto dal middleware)
#[instrument(skip(current_user), fields(user_id = %current_user.user_id))]
pub async fn get_me(Extension(current_user): Extension<User>) -> Json<UserDTO> {
    Json(UserDTO::from(current_user))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDTO>, AppError> {
    debug!("Fetching user by ID");
    let user_id = parse_id(&user_id, "user")?;

    match state.user.read(&user_id).await? {
        Some(user) => Ok(Json(UserDTO::from(user))),
        None => {
            warn!("User not found");
            Err(AppError::not_found("User not found"))
        }
    }
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedJson(body): ValidatedJson<UpdateUserDTO>,
) -> Result<Json<UserDTO>, AppError> {
    debug!("Updating own profile");
    let updated = state.user.update(&current_user.user_id, &body).await?;
    info!("Profile updated");
    Ok(Json(UserDTO::from(updated)))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn update_avatar(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    ValidatedJson(body): ValidatedJson<UpdateAvatarDTO>,
) -> Result<Json<UserDTO>, AppError> {
    debug!("Updating own avatar");
    let updated = state
        .user
        .update_avatar(&current_user.user_id, &body.avatar)
        .await?;
    info!("Avatar updated");
    Ok(Json(UserDTO::from(updated)))
}
