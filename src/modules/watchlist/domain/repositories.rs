use async_trait::async_trait;

use super::entities::UserProfile;
use crate::modules::catalog::domain::entities::Movie;

#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    async fn get_profile(&self, user_id: i32) -> Option<UserProfile>;

    async fn create_profile(&self, user_id: i32) -> Option<UserProfile>;

    async fn add_movie(&self, user_profile_id: i32, movie_id: i32) -> bool;

    /// All watchlisted movies, newest world premiere first
    async fn user_movies(&self, user_profile_id: i32) -> Vec<Movie>;

    /// Most recently watchlisted movies, newest addition first
    async fn recent_movies(&self, user_profile_id: i32, number: i64) -> Vec<Movie>;

    async fn contains_movie(&self, user_profile_id: i32, movie_id: i32) -> bool;
}
