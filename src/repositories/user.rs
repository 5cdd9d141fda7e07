//! UserRepository - Repository per la gestione degli utenti

use super::{Create, Read, Update};
use crate::dtos::{RegisterUserDTO, UpdateUserDTO};
use crate::entities::User;
use crate::entities::user::{DEFAULT_ABOUT, DEFAULT_AVATAR, DEFAULT_NAME};
use sqlx::{Error, SqlitePool};

pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }

    /// L'email è univoca: usata come identità al login
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, email, password, name, about, avatar FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    /// Lista completa degli utenti registrati
    pub async fn list_all(&self) -> Result<Vec<User>, Error> {
        let users = sqlx::query_as::<_, User>(
            "SELECT user_id, email, password, name, about, avatar FROM users ORDER BY user_id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(users)
    }

    /// Aggiorna il solo avatar; `RowNotFound` se l'utente non esiste
    pub async fn update_avatar(&self, id: &i64, avatar: &str) -> Result<User, Error> {
        sqlx::query("UPDATE users SET avatar = ? WHERE user_id = ?")
            .bind(avatar)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Create<User, RegisterUserDTO> for UserRepository {
    /// Il campo `password` del DTO deve già contenere l'hash bcrypt:
    /// l'hashing è responsabilità del service, qui si persiste e basta.
    /// I campi di profilo assenti prendono i default classici.
    async fn create(&self, data: &RegisterUserDTO) -> Result<User, Error> {
        let name = data.name.as_deref().unwrap_or(DEFAULT_NAME);
        let about = data.about.as_deref().unwrap_or(DEFAULT_ABOUT);
        let avatar = data.avatar.as_deref().unwrap_or(DEFAULT_AVATAR);

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, name, about, avatar) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING user_id, email, password, name, about, avatar",
        )
        .bind(&data.email)
        .bind(&data.password)
        .bind(name)
        .bind(about)
        .bind(avatar)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Read<User, i64> for UserRepository {
    async fn read(&self, id: &i64) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, email, password, name, about, avatar FROM users WHERE user_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Update<User, UpdateUserDTO, i64> for UserRepository {
    /// Aggiornamento parziale di name/about: i campi `None` restano invariati
    async fn update(&self, id: &i64, data: &UpdateUserDTO) -> Result<User, Error> {
        let current_user = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.name.is_none() && data.about.is_none() {
            return Ok(current_user);
        }

        let name = data.name.as_deref().unwrap_or(&current_user.name);
        let about = data.about.as_deref().unwrap_or(&current_user.about);

        sqlx::query("UPDATE users SET name = ?, about = ? WHERE user_id = ?")
            .bind(name)
            .bind(about)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users")))]
    async fn test_create_applies_profile_defaults(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = UserRepository::new(pool);

        let dto = RegisterUserDTO {
            email: "diver@example.com".to_string(),
            password: "not-a-real-hash".to_string(),
            name: None,
            about: None,
            avatar: None,
        };

        let user = repo.create(&dto).await?;
        assert_eq!(user.name, DEFAULT_NAME);
        assert_eq!(user.about, DEFAULT_ABOUT);
        assert_eq!(user.avatar, DEFAULT_AVATAR);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users")))]
    async fn test_create_duplicate_email_is_unique_violation(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let repo = UserRepository::new(pool);

        let dto = RegisterUserDTO {
            email: "alice@example.com".to_string(),
            password: "not-a-real-hash".to_string(),
            name: None,
            about: None,
            avatar: None,
        };

        let err = repo.create(&dto).await.expect_err("duplicate email must fail");
        match err {
            Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("expected database error, got {:?}", other),
        }

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users")))]
    async fn test_partial_update_keeps_missing_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = UserRepository::new(pool);

        let dto = UpdateUserDTO {
            name: Some("Alice Cousteau".to_string()),
            about: None,
        };

        let updated = repo.update(&1, &dto).await?;
        assert_eq!(updated.name, "Alice Cousteau");
        assert_eq!(updated.about, "Marine biologist");

        Ok(())
    }
}
