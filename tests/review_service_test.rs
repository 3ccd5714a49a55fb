//! Review service tests: creation with client-supplied parent, tree
//! assembly, and parent deletion leaving replies in place.

mod utils;

use std::sync::Arc;

use chrono::Utc;

use kinorate::modules::review::domain::entities::Review;
use kinorate::modules::review::ReviewService;
use kinorate::shared::forms::{FieldValue, Form, FormData};

use utils::factories;
use utils::mocks::MockReviewRepo;

fn review(id: i32, movie_id: i32, parent_id: Option<i32>) -> Review {
    Review {
        id,
        email: "viewer@example.com".to_string(),
        name: format!("viewer-{}", id),
        text: "text".to_string(),
        added: Utc::now(),
        parent_id,
        movie_id,
    }
}

#[tokio::test]
async fn review_is_created_with_the_supplied_parent() {
    let mut repo = MockReviewRepo::new();
    repo.expect_create_new()
        .withf(|new_review| {
            new_review.movie_id == 7
                && new_review.parent_id == Some(3)
                && new_review.name == "viewer"
        })
        .times(1)
        .returning(|new_review| {
            Some(Review {
                id: 10,
                email: new_review.email,
                name: new_review.name,
                text: new_review.text,
                added: Utc::now(),
                parent_id: new_review.parent_id,
                movie_id: new_review.movie_id,
            })
        });

    let service = ReviewService::new(Arc::new(repo));
    let mut form = factories::review_form("viewer");

    assert!(service.create_review(&mut form, 7, Some(3)).await);
}

#[tokio::test]
async fn review_form_with_wrong_field_set_is_rejected() {
    let repo = MockReviewRepo::new();
    let service = ReviewService::new(Arc::new(repo));

    let mut form = Form::new(
        FormData::new()
            .with("name", FieldValue::text("viewer"))
            .with("email", FieldValue::text("viewer@example.com")),
        // "text" missing
    );

    assert!(!service.create_review(&mut form, 7, None).await);
    assert!(!form.is_valid());
}

#[tokio::test]
async fn movie_reviews_come_back_as_a_tree() {
    let mut repo = MockReviewRepo::new();
    repo.expect_for_movie().times(1).returning(|movie_id| {
        vec![
            review(1, movie_id, None),
            review(2, movie_id, Some(1)),
            review(3, movie_id, None),
            review(4, movie_id, Some(2)),
        ]
    });

    let service = ReviewService::new(Arc::new(repo));
    let tree = service.movie_reviews(7).await;

    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].review.id, 1);
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].children[0].review.id, 4);
}

#[tokio::test]
async fn delete_is_delegated_to_the_repository() {
    let mut repo = MockReviewRepo::new();
    repo.expect_delete()
        .withf(|id| *id == 5)
        .times(1)
        .returning(|_| true);

    let service = ReviewService::new(Arc::new(repo));
    assert!(service.delete_review(5).await);
}
