use std::sync::Arc;

use crate::domain::entities::{ChatRating, RateChatRequest, RatingView};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{ChatRepository, RatingRepository};

#[derive(Clone)]
pub struct RatingService {
    rating_repo: Arc<dyn RatingRepository>,
    chat_repo: Arc<dyn ChatRepository>,
}

impl RatingService {
    pub fn new(rating_repo: Arc<dyn RatingRepository>, chat_repo: Arc<dyn ChatRepository>) -> Self {
        Self {
            rating_repo,
            chat_repo,
        }
    }

    /// Rate a chat's handling. A repeated submission for the same chat
    /// replaces the earlier rating.
    pub async fn rate_chat(&self, request: RateChatRequest) -> DomainResult<ChatRating> {
        self.chat_repo
            .get_chat_by_id(&request.chat_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Chat {} not found", request.chat_id)))?;

        let rating = ChatRating::new(
            request.chat_id,
            request.operator_id,
            request.rated_by,
            request.score,
            request.comment,
        );
        self.rating_repo.upsert_rating(&rating).await
    }

    pub async fn for_chat(&self, chat_id: &str) -> DomainResult<Option<RatingView>> {
        self.rating_repo.get_rating_by_chat(chat_id).await
    }

    pub async fn for_operator(&self, operator_id: &str) -> DomainResult<Vec<RatingView>> {
        self.rating_repo.list_ratings_for_operator(operator_id).await
    }

    pub async fn all(&self) -> DomainResult<Vec<RatingView>> {
        self.rating_repo.list_ratings().await
    }
}
