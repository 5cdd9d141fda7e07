//! Auth services - Registrazione e apertura sessione

use crate::core::auth::session_cookie_value;
use crate::core::{AppError, AppState, ValidatedJson, encode_jwt};
use crate::dtos::{LoginDTO, RegisterUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// Email sconosciuta e password sbagliata devono essere indistinguibili
const BAD_CREDENTIALS: &str = "Incorrect email or password";

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<RegisterUserDTO>,
) -> Result<Json<UserDTO>, AppError> {
    debug!("Registering new user");
    // 1. Il body è già validato (email, lunghezza password, URL avatar)
    // 2. Hashare la password: nel DB non entra mai in chiaro
    // 3. Inserire l'utente; l'email duplicata emerge dal vincolo UNIQUE
    //    e diventa 409 tramite From<sqlx::Error>
    // 4. Ritornare il DTO (senza hash) come risposta JSON
    let password_hash = User::hash_password(&body.password)?;

    let new_user = RegisterUserDTO {
        password: password_hash,
        ..body
    };

    let created_user = state.user.create(&new_user).await?;
    info!("User {} registered", created_user.user_id);

    Ok(Json(UserDTO::from(created_user)))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn signin(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("User sign-in attempt");
    // 1. Cercare l'utente per email
    // 2. Verificare la password contro l'hash memorizzato
    // 3. Entrambi i fallimenti producono lo stesso 401: non va rivelato
    //    se l'email esiste oppure no
    // 4. Emettere il token e impostare il cookie di sessione HttpOnly
    let user = match state.user.find_by_email(&body.email).await? {
        Some(user) => user,
        None => {
            warn!("Sign-in with unknown email");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Sign-in with wrong password for user {}", user.user_id);
        return Err(AppError::unauthorized(BAD_CREDENTIALS));
    }

    let token = encode_jwt(user.user_id, &state.jwt_secret)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&session_cookie_value(&token))
            .map_err(|_| AppError::internal_server_error("Internal server error"))?,
    );

    info!("Session opened for user {}", user.user_id);
    Ok((
        StatusCode::OK,
        headers,
        Json(serde_json::json!({ "token": token })),
    ))
}
