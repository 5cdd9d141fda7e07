//! User DTOs - Data Transfer Objects per utenti

use crate::dtos::validate_http_url;
use crate::entities::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rappresentazione dell'utente esposta al client
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.user_id,
            email: value.email,
            name: value.name,
            about: value.about,
            avatar: value.avatar,
            // la password hashata non ha un campo: mai esposta al client!!!
        }
    }
}

/// DTO per la signup: profilo opzionale, email e password obbligatori
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegisterUserDTO {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "must be at least 8 characters long"))]
    pub password: String,

    #[validate(length(min = 2, max = 30, message = "must be between 2 and 30 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 2, max = 30, message = "must be between 2 and 30 characters"))]
    pub about: Option<String>,

    #[validate(custom(function = validate_http_url))]
    pub avatar: Option<String>,
}

/// DTO per il login (solo email e password)
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct LoginDTO {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// DTO per l'aggiornamento del profilo (campi assenti = invariati)
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct UpdateUserDTO {
    #[validate(length(min = 2, max = 30, message = "must be between 2 and 30 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 2, max = 30, message = "must be between 2 and 30 characters"))]
    pub about: Option<String>,
}

/// DTO per l'aggiornamento del solo avatar
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct UpdateAvatarDTO {
    #[validate(custom(function = validate_http_url))]
    pub avatar: String,
}
