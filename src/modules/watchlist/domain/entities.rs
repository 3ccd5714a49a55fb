use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user profile row carrying the watchlist relation.
/// Created lazily on first watchlist access when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i32,
    pub user_id: i32,
}

/// One watchlisted movie with the time it was added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: i32,
    pub user_profile_id: i32,
    pub movie_id: i32,
    pub added: DateTime<Utc>,
}
