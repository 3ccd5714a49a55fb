use async_trait::async_trait;

use super::entities::{ExternalRating, ExternalScores, RatingStar};
use crate::modules::catalog::domain::entities::MovieCard;

#[async_trait]
pub trait RatingStarRepository: Send + Sync {
    async fn create_new(&self, value: i16) -> Option<RatingStar>;

    /// All stars, highest value first
    async fn get_all(&self) -> Vec<RatingStar>;
}

/// Repository contract for visitor ratings.
///
/// Row uniqueness per (ip, movie) is delegated to the store's upsert;
/// the application layer never checks-then-inserts.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Create the (ip, movie) rating or overwrite its star value
    async fn update_or_create(&self, ip: &str, movie_id: i32, star_id: i32) -> bool;

    /// The star value this ip gave the movie, if any
    async fn get_star_value(&self, ip: &str, movie_id: i32) -> Option<i16>;

    /// Mean star value across all ratings of the movie, one decimal;
    /// `None` when the movie has no ratings
    async fn average_for_movie(&self, movie_id: i32) -> Option<f32>;

    /// Remove the (ip, movie) rating if present
    async fn delete(&self, ip: &str, movie_id: i32) -> bool;
}

#[async_trait]
pub trait OtherSourcesRatingRepository: Send + Sync {
    async fn get_by_movie(&self, movie_id: i32) -> Option<ExternalRating>;

    async fn create_new(&self, movie_id: i32, scores: &ExternalScores) -> bool;

    /// Movie cards ordered by the stored IMDb score
    async fn movie_cards_sorted_by_imdb(&self, descending: bool) -> Vec<MovieCard>;
}
