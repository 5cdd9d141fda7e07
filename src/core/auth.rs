use crate::core::{AppError, AppState};
use crate::repositories::Read;
use axum::{
    body::Body,
    extract::{Request, State},
    http,
    http::Response,
    middleware::Next,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Durata fissa della sessione: il token e il cookie scadono insieme
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Nome del cookie che trasporta il token di sessione
pub const SESSION_COOKIE: &str = "jwt";

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub id: i64,
}

#[instrument(skip(secret), fields(id = %id))]
pub fn encode_jwt(id: i64, secret: &str) -> Result<String, AppError> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let exp = (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp() as usize;
    let iat = now.timestamp() as usize;
    let claims = Claims { iat, exp, id };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| {
        warn!("Failed to encode JWT token: {:?}", e);
        AppError::internal_server_error("Internal server error")
    })
}

/// Verifica firma e scadenza del token. Qualsiasi fallimento diventa lo
/// stesso 401 tramite `From<jsonwebtoken::errors::Error>`.
#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, AppError> {
    debug!("Decoding JWT token");
    let data = decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(data)
}

/// Estrae il valore del cookie di sessione dall'header Cookie
fn extract_session_cookie(header: &str) -> Option<&str> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE).and_then(|rest| rest.strip_prefix('=')))
}

/// Costruisce il valore Set-Cookie per una sessione appena aperta
pub fn session_cookie_value(token: &str) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}",
        SESSION_COOKIE, token, TOKEN_TTL_SECS
    )
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let token = req
        .headers()
        .get(http::header::COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(extract_session_cookie)
        .ok_or_else(|| {
            warn!("Missing session cookie");
            AppError::unauthorized("Authorization required")
        })?
        .to_string();

    let token_data = decode_jwt(&token, &state.jwt_secret).map_err(|e| {
        warn!("Failed to verify session token");
        e
    })?;

    // L'identità risolta è la riga utente, non il solo id del claim:
    // un token valido per un utente rimosso non autentica nessuno
    let current_user = match state.user.read(&token_data.claims.id).await? {
        Some(user) => {
            info!("User authenticated: {}", user.user_id);
            user
        }
        None => {
            warn!("User {} from token not found in database", token_data.claims.id);
            return Err(AppError::unauthorized("Authorization required"));
        }
    };
    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}
