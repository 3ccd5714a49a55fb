use std::sync::Arc;

use crate::modules::review::domain::{
    entities::{NewReview, Review},
    repositories::ReviewRepository,
    tree::{build_review_tree, ReviewNode},
};
use crate::shared::forms::Form;

const REVIEW_FIELDS: &[&str] = &["name", "email", "text"];

pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    /// Create a review for a movie, optionally attached to a parent review.
    ///
    /// The parent id is taken from the client as-is; it is not checked to
    /// belong to the same movie. Known gap, kept until the intended behavior
    /// is settled.
    pub async fn create_review(
        &self,
        form: &mut Form,
        movie_id: i32,
        parent_id: Option<i32>,
    ) -> bool {
        if !form.is_valid() {
            form.add_error(None, "The review form was filled out incorrectly");
            return false;
        }
        if form.data.len() != REVIEW_FIELDS.len()
            || !REVIEW_FIELDS.iter().all(|field| form.data.contains(field))
        {
            form.add_error(None, "The review form was filled out incorrectly");
            return false;
        }
        let (Some(name), Some(email), Some(text)) = (
            form.data.get_text("name").map(str::to_string),
            form.data.get_text("email").map(str::to_string),
            form.data.get_text("text").map(str::to_string),
        ) else {
            form.add_error(None, "The review form was filled out incorrectly");
            return false;
        };

        let new_review = NewReview {
            name,
            email,
            text,
            movie_id,
            parent_id,
        };

        if self.repository.create_new(new_review).await.is_some() {
            return true;
        }
        form.add_error(None, "The review form was filled out incorrectly");
        false
    }

    /// A movie's reviews assembled into a reply tree
    pub async fn movie_reviews(&self, movie_id: i32) -> Vec<ReviewNode> {
        let reviews = self.repository.for_movie(movie_id).await;
        build_review_tree(reviews)
    }

    pub async fn all_reviews(&self) -> Vec<Review> {
        self.repository.get_all().await
    }

    pub async fn update_review(&self, review_id: i32, review: NewReview) -> bool {
        self.repository.update(review_id, review).await
    }

    /// Delete a review; replies survive with their parent reference nulled
    pub async fn delete_review(&self, review_id: i32) -> bool {
        self.repository.delete(review_id).await
    }
}
