use std::sync::Arc;

use crate::log_error;
use crate::modules::catalog::domain::entities::Movie;
use crate::modules::watchlist::domain::{
    entities::UserProfile, repositories::WatchlistRepository,
};
use crate::shared::cache::{self, keys, Cache};

const RECENT_MOVIES_DEFAULT: i64 = 5;

/// Watchlist operations for registered users.
///
/// A missing profile is a recoverable condition: it is created on first
/// access and the triggering operation retried once.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepository>,
    cache: Arc<dyn Cache>,
}

impl WatchlistService {
    pub fn new(repository: Arc<dyn WatchlistRepository>, cache: Arc<dyn Cache>) -> Self {
        Self { repository, cache }
    }

    /// The user's profile, created lazily when absent
    async fn profile_or_create(&self, user_id: i32) -> Option<UserProfile> {
        if let Some(profile) = self.repository.get_profile(user_id).await {
            return Some(profile);
        }
        log_error!(
            "User {} has no profile; creating one on first watchlist access",
            user_id
        );
        self.repository.create_profile(user_id).await
    }

    pub async fn add_movie_to_watchlist(&self, user_id: i32, movie_id: i32) -> bool {
        let Some(profile) = self.profile_or_create(user_id).await else {
            return false;
        };
        if self.repository.add_movie(profile.id, movie_id).await {
            cache::reset_cache(self.cache.as_ref(), "user_movie");
            return true;
        }
        false
    }

    /// All watchlisted movies, newest world premiere first
    pub async fn all_user_movies(&self, user_id: i32) -> Vec<Movie> {
        match self.profile_or_create(user_id).await {
            Some(profile) => self.repository.user_movies(profile.id).await,
            None => Vec::new(),
        }
    }

    /// Most recently watchlisted movies (60 s cache)
    pub async fn most_recently_added_user_movies(&self, user_id: i32) -> Vec<Movie> {
        if let Some(movies) =
            cache::get_json(self.cache.as_ref(), keys::CACHE_FOR_USER_ADDED_MOVIES)
        {
            return movies;
        }

        let Some(profile) = self.repository.get_profile(user_id).await else {
            return Vec::new();
        };
        let movies = self
            .repository
            .recent_movies(profile.id, RECENT_MOVIES_DEFAULT)
            .await;

        cache::set_json(
            self.cache.as_ref(),
            keys::CACHE_FOR_USER_ADDED_MOVIES,
            &movies,
            keys::CACHE_TTL,
        );
        movies
    }

    pub async fn is_movie_in_watchlist(&self, user_id: i32, movie_id: i32) -> bool {
        match self.profile_or_create(user_id).await {
            Some(profile) => self.repository.contains_movie(profile.id, movie_id).await,
            None => false,
        }
    }
}
