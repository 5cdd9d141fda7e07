use axum_test::TestServer;
use mesto_server::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Secret di firma usata solo nei test
pub const TEST_JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, TEST_JWT_SECRET.to_string()))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = mesto_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing, valido per un'ora
pub fn create_test_jwt(user_id: i64, jwt_secret: &str) -> String {
    create_test_jwt_with_ttl(user_id, 3600, jwt_secret)
}

/// Genera un JWT token con TTL arbitrario (negativo = token già scaduto)
pub fn create_test_jwt_with_ttl(user_id: i64, ttl_secs: i64, jwt_secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        id: i64,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now();
    let expiration = (now + Duration::seconds(ttl_secs)).timestamp() as usize;

    let claims = Claims {
        id: user_id,
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Valore dell'header Cookie che trasporta il token di sessione
pub fn session_cookie(token: &str) -> String {
    format!("jwt={}", token)
}

/// Registra un utente via API e ritorna il suo id
pub async fn signup_user(server: &TestServer, email: &str, password: &str) -> i64 {
    let response = server
        .post("/signup")
        .json(&serde_json::json!({
            "email": email,
            "password": password
        }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("signup response should contain the user id")
}
