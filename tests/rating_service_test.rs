//! Rating service tests: upsert delegation, star bounds, and the lazy
//! at-most-once external rating population.

mod utils;

use std::sync::Arc;

use kinorate::modules::rating::domain::entities::ExternalRating;
use kinorate::modules::rating::RatingService;
use kinorate::shared::errors::AppError;

use utils::factories;
use utils::mocks::{
    scores, MockOtherSourcesRatingRepo, MockProvider, MockRatingRepo, MockRatingStarRepo,
};

fn service(
    rating_repo: MockRatingRepo,
    star_repo: MockRatingStarRepo,
    other_repo: MockOtherSourcesRatingRepo,
    provider: MockProvider,
) -> RatingService {
    RatingService::new(
        Arc::new(rating_repo),
        Arc::new(star_repo),
        Arc::new(other_repo),
        Arc::new(provider),
    )
}

#[tokio::test]
async fn rating_upsert_passes_ip_movie_and_star_through() {
    let mut rating_repo = MockRatingRepo::new();
    rating_repo
        .expect_update_or_create()
        .withf(|ip, movie_id, star_id| ip == "1.2.3.4" && *movie_id == 7 && *star_id == 5)
        .times(1)
        .returning(|_, _, _| true);

    let service = service(
        rating_repo,
        MockRatingStarRepo::new(),
        MockOtherSourcesRatingRepo::new(),
        MockProvider::new(),
    );

    let mut form = factories::rating_form(7, 5);
    assert!(service.update_or_create_rating(&mut form, "1.2.3.4").await);
    assert!(form.is_valid());
}

#[tokio::test]
async fn failed_upsert_reports_a_form_error() {
    let mut rating_repo = MockRatingRepo::new();
    rating_repo
        .expect_update_or_create()
        .returning(|_, _, _| false);

    let service = service(
        rating_repo,
        MockRatingStarRepo::new(),
        MockOtherSourcesRatingRepo::new(),
        MockProvider::new(),
    );

    let mut form = factories::rating_form(7, 5);
    assert!(!service.update_or_create_rating(&mut form, "1.2.3.4").await);
    assert!(!form.is_valid());
}

#[tokio::test]
async fn rating_star_outside_scale_is_rejected() {
    let service = service(
        MockRatingRepo::new(),
        MockRatingStarRepo::new(),
        MockOtherSourcesRatingRepo::new(),
        MockProvider::new(),
    );

    let mut form = factories::rating_star_form(6);
    assert!(!service.create_rating_star(&mut form).await);
    assert!(form
        .field_error("value")
        .expect("error on value")
        .contains("between 0 and 5"));
}

#[tokio::test]
async fn rating_star_on_scale_is_created() {
    let mut star_repo = MockRatingStarRepo::new();
    star_repo
        .expect_create_new()
        .withf(|value| *value == 4)
        .times(1)
        .returning(|value| {
            Some(kinorate::modules::rating::domain::entities::RatingStar { id: 1, value })
        });

    let service = service(
        MockRatingRepo::new(),
        star_repo,
        MockOtherSourcesRatingRepo::new(),
        MockProvider::new(),
    );

    let mut form = factories::rating_star_form(4);
    assert!(service.create_rating_star(&mut form).await);
}

#[tokio::test]
async fn stored_external_rating_is_served_without_a_fetch() {
    let mut other_repo = MockOtherSourcesRatingRepo::new();
    other_repo.expect_get_by_movie().times(1).returning(|movie_id| {
        Some(ExternalRating {
            id: 1,
            movie_id,
            scores: scores("8.8"),
        })
    });
    // No expectation on the provider: a fetch would panic the test
    let provider = MockProvider::new();

    let service = service(
        MockRatingRepo::new(),
        MockRatingStarRepo::new(),
        other_repo,
        provider,
    );

    let movie = factories::movie(7, "Inception", 2010);
    let result = service.external_rating(&movie).await;
    assert_eq!(result.unwrap().imdb, "8.8");
}

#[tokio::test]
async fn read_miss_fetches_once_and_persists() {
    let mut other_repo = MockOtherSourcesRatingRepo::new();
    // Miss, then the freshly persisted row
    let mut lookups = 0;
    other_repo.expect_get_by_movie().returning(move |movie_id| {
        lookups += 1;
        if lookups == 1 {
            None
        } else {
            Some(ExternalRating {
                id: 1,
                movie_id,
                scores: scores("8.8"),
            })
        }
    });
    other_repo
        .expect_create_new()
        .withf(|movie_id, stored| *movie_id == 7 && stored.imdb == "8.8")
        .times(1)
        .returning(|_, _| true);

    let mut provider = MockProvider::new();
    provider
        .expect_fetch_rating()
        .withf(|title| title == "Inception")
        .times(1)
        .returning(|_| Ok(scores("8.8")));

    let service = service(
        MockRatingRepo::new(),
        MockRatingStarRepo::new(),
        other_repo,
        provider,
    );

    let movie = factories::movie(7, "Inception", 2010);
    let result = service.external_rating(&movie).await;
    assert_eq!(result.unwrap().imdb, "8.8");
}

#[tokio::test]
async fn second_read_is_a_no_op_once_a_row_exists() {
    let mut other_repo = MockOtherSourcesRatingRepo::new();
    let mut lookups = 0;
    other_repo.expect_get_by_movie().returning(move |movie_id| {
        lookups += 1;
        if lookups == 1 {
            None
        } else {
            Some(ExternalRating {
                id: 1,
                movie_id,
                scores: scores("8.8"),
            })
        }
    });
    other_repo.expect_create_new().times(1).returning(|_, _| true);

    let mut provider = MockProvider::new();
    // Exactly one provider call across both reads
    provider
        .expect_fetch_rating()
        .times(1)
        .returning(|_| Ok(scores("8.8")));

    let service = service(
        MockRatingRepo::new(),
        MockRatingStarRepo::new(),
        other_repo,
        provider,
    );

    let movie = factories::movie(7, "Inception", 2010);
    assert!(service.external_rating(&movie).await.is_some());
    assert!(service.external_rating(&movie).await.is_some());
}

#[tokio::test]
async fn provider_failure_degrades_to_no_external_rating() {
    let mut other_repo = MockOtherSourcesRatingRepo::new();
    other_repo.expect_get_by_movie().returning(|_| None);
    // Nothing is persisted on failure
    other_repo.expect_create_new().times(0);

    let mut provider = MockProvider::new();
    provider
        .expect_fetch_rating()
        .returning(|_| Err(AppError::ExternalServiceError("provider down".to_string())));

    let service = service(
        MockRatingRepo::new(),
        MockRatingStarRepo::new(),
        other_repo,
        provider,
    );

    let movie = factories::movie(7, "Inception", 2010);
    assert!(service.external_rating(&movie).await.is_none());
}

#[tokio::test]
async fn backfill_skips_movies_that_already_have_a_rating() {
    let mut other_repo = MockOtherSourcesRatingRepo::new();
    other_repo.expect_get_by_movie().returning(|movie_id| {
        Some(ExternalRating {
            id: 1,
            movie_id,
            scores: scores("7.0"),
        })
    });
    let provider = MockProvider::new(); // a fetch would panic

    let service = service(
        MockRatingRepo::new(),
        MockRatingStarRepo::new(),
        other_repo,
        provider,
    );

    service.backfill_external_rating("Inception", 7).await;
}

#[tokio::test]
async fn average_rating_is_delegated() {
    let mut rating_repo = MockRatingRepo::new();
    rating_repo
        .expect_average_for_movie()
        .withf(|movie_id| *movie_id == 7)
        .returning(|_| Some(4.5));

    let service = service(
        rating_repo,
        MockRatingStarRepo::new(),
        MockOtherSourcesRatingRepo::new(),
        MockProvider::new(),
    );

    assert_eq!(service.average_movie_rating(7).await, Some(4.5));
}
