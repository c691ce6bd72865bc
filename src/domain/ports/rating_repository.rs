use crate::domain::entities::{ChatRating, RatingView};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait RatingRepository: Send + Sync {
    /// One rating per chat: a second submission replaces score, comment and
    /// rater on the existing row.
    async fn upsert_rating(&self, rating: &ChatRating) -> DomainResult<ChatRating>;

    async fn get_rating_by_chat(&self, chat_id: &str) -> DomainResult<Option<RatingView>>;

    /// Most recent first.
    async fn list_ratings_for_operator(&self, operator_id: &str) -> DomainResult<Vec<RatingView>>;

    async fn list_ratings(&self) -> DomainResult<Vec<RatingView>>;
}
