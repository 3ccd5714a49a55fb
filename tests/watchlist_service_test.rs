//! Watchlist service tests: self-healing profile creation and the
//! "user_movie" cache reset on mutation.

mod utils;

use std::sync::Arc;

use kinorate::modules::watchlist::domain::entities::UserProfile;
use kinorate::modules::watchlist::WatchlistService;
use kinorate::shared::cache::{keys, Cache, MemoryCache};

use utils::factories;
use utils::mocks::MockWatchlistRepo;

#[tokio::test]
async fn adding_a_movie_uses_the_existing_profile() {
    let mut repo = MockWatchlistRepo::new();
    repo.expect_get_profile()
        .returning(|user_id| Some(UserProfile { id: 11, user_id }));
    repo.expect_create_profile().times(0);
    repo.expect_add_movie()
        .withf(|profile_id, movie_id| *profile_id == 11 && *movie_id == 7)
        .times(1)
        .returning(|_, _| true);

    let service = WatchlistService::new(Arc::new(repo), Arc::new(MemoryCache::new()));
    assert!(service.add_movie_to_watchlist(1, 7).await);
}

#[tokio::test]
async fn missing_profile_is_created_and_the_operation_retried() {
    let mut repo = MockWatchlistRepo::new();
    repo.expect_get_profile().times(1).returning(|_| None);
    repo.expect_create_profile()
        .withf(|user_id| *user_id == 1)
        .times(1)
        .returning(|user_id| Some(UserProfile { id: 12, user_id }));
    repo.expect_add_movie()
        .withf(|profile_id, _| *profile_id == 12)
        .times(1)
        .returning(|_, _| true);

    let service = WatchlistService::new(Arc::new(repo), Arc::new(MemoryCache::new()));
    assert!(service.add_movie_to_watchlist(1, 7).await);
}

#[tokio::test]
async fn adding_a_movie_resets_the_user_movie_cache_key() {
    let mut repo = MockWatchlistRepo::new();
    repo.expect_get_profile()
        .returning(|user_id| Some(UserProfile { id: 11, user_id }));
    repo.expect_add_movie().returning(|_, _| true);

    let cache = Arc::new(MemoryCache::new());
    cache.set(
        keys::CACHE_FOR_USER_ADDED_MOVIES,
        serde_json::json!([1, 2]),
        keys::CACHE_TTL,
    );
    // An unrelated key must survive
    cache.set(
        keys::CACHE_FOR_GENRES,
        serde_json::json!(["drama"]),
        keys::CACHE_TTL,
    );

    let service = WatchlistService::new(Arc::new(repo), cache.clone());
    assert!(service.add_movie_to_watchlist(1, 7).await);

    assert!(cache.get(keys::CACHE_FOR_USER_ADDED_MOVIES).is_none());
    assert!(cache.get(keys::CACHE_FOR_GENRES).is_some());
}

#[tokio::test]
async fn failed_add_leaves_the_cache_alone() {
    let mut repo = MockWatchlistRepo::new();
    repo.expect_get_profile()
        .returning(|user_id| Some(UserProfile { id: 11, user_id }));
    repo.expect_add_movie().returning(|_, _| false);

    let cache = Arc::new(MemoryCache::new());
    cache.set(
        keys::CACHE_FOR_USER_ADDED_MOVIES,
        serde_json::json!([1, 2]),
        keys::CACHE_TTL,
    );

    let service = WatchlistService::new(Arc::new(repo), cache.clone());
    assert!(!service.add_movie_to_watchlist(1, 7).await);
    assert!(cache.get(keys::CACHE_FOR_USER_ADDED_MOVIES).is_some());
}

#[tokio::test]
async fn recent_user_movies_are_cached_for_the_ttl_window() {
    let mut repo = MockWatchlistRepo::new();
    repo.expect_get_profile()
        .times(1)
        .returning(|user_id| Some(UserProfile { id: 11, user_id }));
    repo.expect_recent_movies()
        .times(1)
        .returning(|_, _| vec![factories::movie(7, "Inception", 2010)]);

    let service = WatchlistService::new(Arc::new(repo), Arc::new(MemoryCache::new()));

    let first = service.most_recently_added_user_movies(1).await;
    let second = service.most_recently_added_user_movies(1).await;
    assert_eq!(first, second);
    assert_eq!(first[0].title, "Inception");
}

#[tokio::test]
async fn membership_check_self_heals_a_missing_profile() {
    let mut repo = MockWatchlistRepo::new();
    repo.expect_get_profile().times(1).returning(|_| None);
    repo.expect_create_profile()
        .times(1)
        .returning(|user_id| Some(UserProfile { id: 13, user_id }));
    repo.expect_contains_movie()
        .withf(|profile_id, movie_id| *profile_id == 13 && *movie_id == 7)
        .times(1)
        .returning(|_, _| false);

    let service = WatchlistService::new(Arc::new(repo), Arc::new(MemoryCache::new()));
    assert!(!service.is_movie_in_watchlist(1, 7).await);
}
