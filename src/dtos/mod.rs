//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities),
//! e portano le regole di validazione dichiarative applicate da `ValidatedJson`.

pub mod card;
pub mod user;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

// Re-exports per facilitare l'import
pub use card::{CardDTO, CreateCardDTO};
pub use user::{LoginDTO, RegisterUserDTO, UpdateAvatarDTO, UpdateUserDTO, UserDTO};

lazy_static! {
    // URL assoluto con schema http/https; richiede un host con almeno un punto
    static ref HTTP_URL_RE: Regex = Regex::new(
        r"^https?://(www\.)?[\w\-]+(\.[\w\-]+)+[\w\-._~:/?#\[\]@!$&'()*+,;=%]*$"
    )
    .expect("HTTP_URL_RE is a valid regex");
}

/// Valida che il campo sia un URL assoluto http/https.
/// Qualsiasi altro schema (ftp, file, ...) è un errore di validazione.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    if HTTP_URL_RE.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("url");
        err.message = Some("must be an absolute http(s) URL".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url_accepts_http_and_https() {
        assert!(validate_http_url("https://example.com/a.png").is_ok());
        assert!(validate_http_url("http://www.example.com/photo?id=1#top").is_ok());
    }

    #[test]
    fn test_http_url_rejects_other_schemes() {
        assert!(validate_http_url("ftp://x").is_err());
        assert!(validate_http_url("file:///etc/passwd").is_err());
        assert!(validate_http_url("example.com/a.png").is_err());
        assert!(validate_http_url("").is_err());
    }
}
