//! Validator behavior against mocked repositories: field-set matching,
//! derived-age bounds, and natural-key uniqueness on creation.

mod utils;

use std::sync::Arc;

use chrono::NaiveDate;

use kinorate::modules::catalog::domain::validators::{
    ActorDirectorValidator, CategoryValidator, MovieValidator,
};
use kinorate::shared::forms::{FieldValue, Form, FormData};

use utils::factories;
use utils::mocks::{MockActorDirectorRepo, MockCategoryRepo, MockMovieRepo};

#[tokio::test]
async fn duplicate_title_and_year_fails_with_field_error_on_title() {
    let mut repo = MockMovieRepo::new();
    repo.expect_exists_with_same_params().returning(|_| true);

    let validator = MovieValidator::new(Arc::new(repo), true);
    let mut form = factories::movie_form("Inception", NaiveDate::from_ymd_opt(2010, 7, 16).unwrap());

    assert!(!validator.can_be_saved(&mut form).await);
    let message = form.field_error("title").expect("error lands on title");
    assert!(message.contains("already exists"));
    assert!(message.contains("Inception"));
    assert!(message.contains("2010"));
}

#[tokio::test]
async fn fresh_title_and_year_passes_validation() {
    let mut repo = MockMovieRepo::new();
    repo.expect_exists_with_same_params().returning(|_| false);

    let validator = MovieValidator::new(Arc::new(repo), true);
    let mut form = factories::movie_form("Inception", NaiveDate::from_ymd_opt(2010, 7, 16).unwrap());

    assert!(validator.can_be_saved(&mut form).await);
    assert!(form.is_valid());
}

#[tokio::test]
async fn uniqueness_is_not_checked_on_update() {
    // A repository probe here would panic: no expectation is registered
    let repo = MockMovieRepo::new();

    let validator = MovieValidator::new(Arc::new(repo), false);
    let mut form = factories::movie_form("Inception", NaiveDate::from_ymd_opt(2010, 7, 16).unwrap());

    assert!(validator.can_be_saved(&mut form).await);
}

#[tokio::test]
async fn missing_movie_field_is_a_mismatch() {
    let repo = MockMovieRepo::new();
    let validator = MovieValidator::new(Arc::new(repo), true);

    let mut form = factories::movie_form("Heat", NaiveDate::from_ymd_opt(1995, 12, 15).unwrap());
    let mut data = FormData::new();
    for field in [
        "title", "tagline", "description", "poster", "country", "directors", "actors", "genres",
        "world_premiere", "budget", "fees_in_usa", "fees_in_world", "category",
        // "draft" left out
    ] {
        if let Some(value) = form.data.get(field) {
            data.insert(field, value.clone());
        }
    }
    form = Form::new(data);

    assert!(!validator.can_be_saved(&mut form).await);
    assert!(form
        .errors()
        .iter()
        .any(|e| e.field.is_none() && e.message == "Mismatch filled fields"));
}

#[tokio::test]
async fn extra_movie_field_is_a_mismatch() {
    let repo = MockMovieRepo::new();
    let validator = MovieValidator::new(Arc::new(repo), true);

    let mut form = factories::movie_form("Heat", NaiveDate::from_ymd_opt(1995, 12, 15).unwrap());
    form.data.insert("rating", FieldValue::Int(5));

    assert!(!validator.can_be_saved(&mut form).await);
    assert!(!form.is_valid());
}

#[tokio::test]
async fn actor_age_outside_bounds_is_rejected() {
    let repo = MockActorDirectorRepo::new();
    let validator = ActorDirectorValidator::new(Arc::new(repo), true);

    // 200 years dead
    let mut form = factories::actor_form(
        "Old Timer",
        NaiveDate::from_ymd_opt(1700, 1, 1).unwrap(),
        Some(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()),
    );

    assert!(!validator.can_be_saved(&mut form).await);
    let message = form.field_error("birth_date").expect("error on birth_date");
    assert!(message.contains("between 0 and 130"));
}

#[tokio::test]
async fn actor_age_is_derived_from_dates_not_supplied() {
    let mut repo = MockActorDirectorRepo::new();
    repo.expect_exists_with_same_params().returning(|_| false);
    let validator = ActorDirectorValidator::new(Arc::new(repo), true);

    let mut form = factories::actor_form(
        "Al Pacino",
        NaiveDate::from_ymd_opt(1940, 4, 25).unwrap(),
        None,
    );

    assert!(validator.can_be_saved(&mut form).await);
}

#[tokio::test]
async fn duplicate_actor_name_fails_on_creation() {
    let mut repo = MockActorDirectorRepo::new();
    repo.expect_exists_with_same_params().returning(|_| true);
    let validator = ActorDirectorValidator::new(Arc::new(repo), true);

    let mut form = factories::actor_form(
        "Al Pacino",
        NaiveDate::from_ymd_opt(1940, 4, 25).unwrap(),
        None,
    );

    assert!(!validator.can_be_saved(&mut form).await);
    let message = form.field_error("name").expect("error on name");
    assert!(message.contains("already exists"));
}

#[tokio::test]
async fn duplicate_category_name_short_circuits_before_url_check() {
    let mut repo = MockCategoryRepo::new();
    // First probe (name) answers true; the url probe must never run
    repo.expect_exists_with_same_params()
        .times(1)
        .returning(|_| true);
    let validator = CategoryValidator::new(Arc::new(repo), true);

    let mut form = factories::named_slug_form("Films", "films");

    assert!(!validator.can_be_saved(&mut form).await);
    assert!(form.field_error("name").is_some());
    assert!(form.field_error("url").is_none());
}

#[tokio::test]
async fn category_url_must_be_slug_shaped() {
    let repo = MockCategoryRepo::new();
    let validator = CategoryValidator::new(Arc::new(repo), true);

    let mut form = factories::named_slug_form("Films", "not a slug!");

    assert!(!validator.can_be_saved(&mut form).await);
    assert!(form
        .field_error("url")
        .expect("error on url")
        .contains("invalid characters"));
}
