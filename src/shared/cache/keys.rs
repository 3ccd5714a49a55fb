use std::time::Duration;

/// Aggregate read paths are memoized for a short, fixed window
pub const CACHE_TTL: Duration = Duration::from_secs(60);

pub const CACHE_FOR_NEW_MOVIES: &str = "most_recently_added_movies";
pub const CACHE_FOR_GENRES: &str = "genres";
pub const CACHE_FOR_YEARS: &str = "years";
pub const CACHE_FOR_USER_ADDED_MOVIES: &str = "last_added_user_movies";
