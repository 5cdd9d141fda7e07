//! CardRepository - Repository per cards e relativi like
//!
//! I like vivono nella tabella di join `card_likes` con chiave primaria
//! composta (card_id, user_id): l'inserimento è `INSERT OR IGNORE`, quindi
//! like e dislike sono idempotenti per costruzione.

use super::{Delete, Read};
use crate::dtos::CreateCardDTO;
use crate::entities::Card;
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use std::collections::HashMap;

pub struct CardRepository {
    connection_pool: SqlitePool,
}

impl CardRepository {
    pub fn new(connection_pool: SqlitePool) -> CardRepository {
        Self { connection_pool }
    }

    /// Crea una card con owner preso dall'identità autenticata
    pub async fn create(&self, owner_id: i64, data: &CreateCardDTO) -> Result<Card, Error> {
        let card = sqlx::query_as::<_, Card>(
            "INSERT INTO cards (name, link, owner_id, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING card_id, name, link, owner_id, created_at",
        )
        .bind(&data.name)
        .bind(&data.link)
        .bind(owner_id)
        .bind(Utc::now())
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(card)
    }

    /// Tutte le cards, dalla più recente
    pub async fn list_all(&self) -> Result<Vec<Card>, Error> {
        let cards = sqlx::query_as::<_, Card>(
            "SELECT card_id, name, link, owner_id, created_at FROM cards ORDER BY card_id DESC",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(cards)
    }

    /// Aggiunge il like di `user_id` alla card (no-op se già presente)
    pub async fn add_like(&self, card_id: &i64, user_id: &i64) -> Result<(), Error> {
        sqlx::query("INSERT OR IGNORE INTO card_likes (card_id, user_id) VALUES (?, ?)")
            .bind(card_id)
            .bind(user_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Rimuove il like di `user_id` dalla card (no-op se assente)
    pub async fn remove_like(&self, card_id: &i64, user_id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM card_likes WHERE card_id = ? AND user_id = ?")
            .bind(card_id)
            .bind(user_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Gli user_id che hanno messo like alla card
    pub async fn likes(&self, card_id: &i64) -> Result<Vec<i64>, Error> {
        let likes = sqlx::query_scalar::<_, i64>(
            "SELECT user_id FROM card_likes WHERE card_id = ? ORDER BY user_id",
        )
        .bind(card_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(likes)
    }

    /// Mappa card_id -> like, in una sola query (per la lista delle cards)
    pub async fn likes_by_card(&self) -> Result<HashMap<i64, Vec<i64>>, Error> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT card_id, user_id FROM card_likes ORDER BY card_id, user_id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        let mut likes_by_card: HashMap<i64, Vec<i64>> = HashMap::new();
        for (card_id, user_id) in rows {
            likes_by_card.entry(card_id).or_default().push(user_id);
        }

        Ok(likes_by_card)
    }
}

impl Read<Card, i64> for CardRepository {
    async fn read(&self, id: &i64) -> Result<Option<Card>, Error> {
        let card = sqlx::query_as::<_, Card>(
            "SELECT card_id, name, link, owner_id, created_at FROM cards WHERE card_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(card)
    }
}

impl Delete<i64> for CardRepository {
    /// Cancella la card e i suoi like
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM card_likes WHERE card_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        sqlx::query("DELETE FROM cards WHERE card_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "cards")))]
    async fn test_add_like_is_idempotent(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = CardRepository::new(pool);

        repo.add_like(&2, &1).await?;
        repo.add_like(&2, &1).await?;

        assert_eq!(repo.likes(&2).await?, vec![1]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "cards")))]
    async fn test_remove_like_missing_is_noop(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = CardRepository::new(pool);

        // la card 2 non ha like nel fixture
        repo.remove_like(&2, &1).await?;
        assert!(repo.likes(&2).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "cards")))]
    async fn test_delete_removes_card_and_likes(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = CardRepository::new(pool);

        repo.delete(&1).await?;

        assert!(repo.read(&1).await?.is_none());
        assert!(repo.likes(&1).await?.is_empty());
        Ok(())
    }
}
