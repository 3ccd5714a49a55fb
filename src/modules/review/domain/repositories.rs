use async_trait::async_trait;

use super::entities::{NewReview, Review};

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create_new(&self, review: NewReview) -> Option<Review>;

    /// All reviews of a movie in posting order, one query
    async fn for_movie(&self, movie_id: i32) -> Vec<Review>;

    async fn get_all(&self) -> Vec<Review>;

    async fn update(&self, id: i32, review: NewReview) -> bool;

    /// Delete a review; children keep their rows with the parent
    /// reference nulled
    async fn delete(&self, id: i32) -> bool;
}
