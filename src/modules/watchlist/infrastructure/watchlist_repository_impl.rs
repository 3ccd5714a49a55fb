use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_error;
use crate::modules::catalog::domain::entities::Movie;
use crate::modules::catalog::infrastructure::models::MovieRow;
use crate::modules::catalog::infrastructure::persistence::load_movies_with_relations;
use crate::modules::watchlist::domain::{
    entities::UserProfile, repositories::WatchlistRepository,
};
use crate::modules::watchlist::infrastructure::models::{
    NewUserProfileRow, NewWatchlistEntryRow, UserProfileRow,
};
use crate::schema::{movies, user_profile_movies, user_profiles};
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct WatchlistRepositoryImpl {
    db: Arc<Database>,
}

impl WatchlistRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WatchlistRepository for WatchlistRepositoryImpl {
    async fn get_profile(&self, user_id: i32) -> Option<UserProfile> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Option<UserProfile>> {
            let mut conn = db.get_connection()?;
            let row = user_profiles::table
                .filter(user_profiles::user_id.eq(user_id))
                .first::<UserProfileRow>(&mut conn)
                .optional()?;
            Ok(row.map(UserProfileRow::into))
        })
        .await;
        match result {
            Ok(Ok(profile)) => profile,
            Ok(Err(e)) => {
                log_error!("User profile lookup failed: {}", e);
                None
            }
            Err(e) => {
                log_error!("User profile lookup failed: {}", e);
                None
            }
        }
    }

    async fn create_profile(&self, user_id: i32) -> Option<UserProfile> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<UserProfile> {
            let mut conn = db.get_connection()?;
            let row: UserProfileRow = diesel::insert_into(user_profiles::table)
                .values(NewUserProfileRow { user_id })
                .get_result(&mut conn)?;
            Ok(row.into())
        })
        .await;
        match result {
            Ok(Ok(profile)) => Some(profile),
            Ok(Err(e)) => {
                log_error!("Failed to create user profile: {}", e);
                None
            }
            Err(e) => {
                log_error!("Failed to create user profile: {}", e);
                None
            }
        }
    }

    async fn add_movie(&self, user_profile_id: i32, movie_id: i32) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // Re-adding an already watchlisted movie is a no-op
            diesel::insert_into(user_profile_movies::table)
                .values(NewWatchlistEntryRow {
                    user_profile_id,
                    movie_id,
                })
                .on_conflict((
                    user_profile_movies::user_profile_id,
                    user_profile_movies::movie_id,
                ))
                .do_nothing()
                .execute(&mut conn)?;
            Ok(())
        })
        .await;
        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log_error!("Failed to add movie {} to watchlist: {}", movie_id, e);
                false
            }
            Err(e) => {
                log_error!("Failed to add movie {} to watchlist: {}", movie_id, e);
                false
            }
        }
    }

    async fn user_movies(&self, user_profile_id: i32) -> Vec<Movie> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<Movie>> {
            let mut conn = db.get_connection()?;
            let watchlisted = user_profile_movies::table
                .filter(user_profile_movies::user_profile_id.eq(user_profile_id))
                .select(user_profile_movies::movie_id);
            let rows = movies::table
                .filter(movies::id.eq_any(watchlisted))
                .order(movies::world_premiere.desc())
                .load::<MovieRow>(&mut conn)?;
            load_movies_with_relations(&mut conn, rows)
        })
        .await;
        match result {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                log_error!("Watchlist listing failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Watchlist listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn recent_movies(&self, user_profile_id: i32, number: i64) -> Vec<Movie> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<Movie>> {
            let mut conn = db.get_connection()?;
            let rows = user_profile_movies::table
                .inner_join(movies::table)
                .filter(user_profile_movies::user_profile_id.eq(user_profile_id))
                .order(user_profile_movies::added.desc())
                .limit(number)
                .select(movies::all_columns)
                .load::<MovieRow>(&mut conn)?;
            load_movies_with_relations(&mut conn, rows)
        })
        .await;
        match result {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                log_error!("Recent watchlist listing failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Recent watchlist listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn contains_movie(&self, user_profile_id: i32, movie_id: i32) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let matching: i64 = user_profile_movies::table
                .filter(user_profile_movies::user_profile_id.eq(user_profile_id))
                .filter(user_profile_movies::movie_id.eq(movie_id))
                .count()
                .get_result(&mut conn)?;
            Ok(matching > 0)
        })
        .await;
        match result {
            Ok(Ok(contained)) => contained,
            Ok(Err(e)) => {
                log_error!("Watchlist membership check failed: {}", e);
                false
            }
            Err(e) => {
                log_error!("Watchlist membership check failed: {}", e);
                false
            }
        }
    }
}
