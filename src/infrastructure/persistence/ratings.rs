use crate::domain::entities::{ChatRating, RatingView};
use crate::domain::errors::DomainResult;
use crate::domain::ports::rating_repository::RatingRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

fn view_from_row(row: &sqlx::any::AnyRow) -> DomainResult<RatingView> {
    Ok(RatingView {
        rating: ChatRating {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            operator_id: row.try_get("operator_id")?,
            rated_by: row.try_get("rated_by")?,
            score: row.try_get("score")?,
            comment: row.try_get("comment")?,
            created_at: row.try_get("created_at")?,
        },
        rater_name: row.try_get("rater_name").ok(),
        client_name: row.try_get("client_name").ok(),
        client_phone: row.try_get("client_phone").ok(),
    })
}

const VIEW_QUERY: &str = "SELECT r.id, r.chat_id, r.operator_id, r.rated_by, r.score, r.comment,
                                 r.created_at, s.name AS rater_name,
                                 c.client_name, c.client_phone
                          FROM chat_ratings r
                          LEFT JOIN staff s ON r.rated_by = s.id
                          LEFT JOIN chats c ON r.chat_id = c.id";

#[async_trait]
impl RatingRepository for Database {
    async fn upsert_rating(&self, rating: &ChatRating) -> DomainResult<ChatRating> {
        sqlx::query(
            "INSERT INTO chat_ratings (id, chat_id, operator_id, rated_by, score, comment, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(chat_id) DO UPDATE SET
                 score = excluded.score,
                 comment = excluded.comment,
                 rated_by = excluded.rated_by,
                 created_at = excluded.created_at",
        )
        .bind(&rating.id)
        .bind(&rating.chat_id)
        .bind(&rating.operator_id)
        .bind(&rating.rated_by)
        .bind(rating.score)
        .bind(&rating.comment)
        .bind(&rating.created_at)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            "SELECT id, chat_id, operator_id, rated_by, score, comment, created_at
             FROM chat_ratings WHERE chat_id = ?",
        )
        .bind(&rating.chat_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(ChatRating {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            operator_id: row.try_get("operator_id")?,
            rated_by: row.try_get("rated_by")?,
            score: row.try_get("score")?,
            comment: row.try_get("comment")?,
            created_at: row.try_get("created_at")?,
        })
    }

    async fn get_rating_by_chat(&self, chat_id: &str) -> DomainResult<Option<RatingView>> {
        let row = sqlx::query(&format!("{} WHERE r.chat_id = ?", VIEW_QUERY))
            .bind(chat_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(view_from_row).transpose()
    }

    async fn list_ratings_for_operator(&self, operator_id: &str) -> DomainResult<Vec<RatingView>> {
        let rows = sqlx::query(&format!(
            "{} WHERE r.operator_id = ? ORDER BY r.created_at DESC",
            VIEW_QUERY
        ))
        .bind(operator_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(view_from_row).collect()
    }

    async fn list_ratings(&self) -> DomainResult<Vec<RatingView>> {
        let rows = sqlx::query(&format!("{} ORDER BY r.created_at DESC", VIEW_QUERY))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(view_from_row).collect()
    }
}
