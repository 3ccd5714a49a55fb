use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::watchlist::domain::entities::{UserProfile, WatchlistEntry};
use crate::schema::{user_profile_movies, user_profiles};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = user_profiles)]
pub struct UserProfileRow {
    pub id: i32,
    pub user_id: i32,
}

#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = user_profiles)]
pub struct NewUserProfileRow {
    pub user_id: i32,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = user_profile_movies)]
pub struct WatchlistEntryRow {
    pub id: i32,
    pub user_profile_id: i32,
    pub movie_id: i32,
    pub added: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = user_profile_movies)]
pub struct NewWatchlistEntryRow {
    pub user_profile_id: i32,
    pub movie_id: i32,
}

impl From<UserProfileRow> for UserProfile {
    fn from(row: UserProfileRow) -> Self {
        UserProfile {
            id: row.id,
            user_id: row.user_id,
        }
    }
}

impl From<WatchlistEntryRow> for WatchlistEntry {
    fn from(row: WatchlistEntryRow) -> Self {
        WatchlistEntry {
            id: row.id,
            user_profile_id: row.user_profile_id,
            movie_id: row.movie_id,
            added: row.added,
        }
    }
}
