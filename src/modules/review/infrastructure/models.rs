use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::review::domain::entities::{NewReview, Review};
use crate::schema::reviews;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct ReviewRow {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub text: String,
    pub added: DateTime<Utc>,
    pub parent_id: Option<i32>,
    pub movie_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct NewReviewRow {
    pub email: String,
    pub name: String,
    pub text: String,
    pub parent_id: Option<i32>,
    pub movie_id: i32,
}

/// Update payload; the movie and parent references stay fixed
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct ReviewChangeset {
    pub email: String,
    pub name: String,
    pub text: String,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            email: row.email,
            name: row.name,
            text: row.text,
            added: row.added,
            parent_id: row.parent_id,
            movie_id: row.movie_id,
        }
    }
}

impl From<&NewReview> for NewReviewRow {
    fn from(review: &NewReview) -> Self {
        Self {
            email: review.email.clone(),
            name: review.name.clone(),
            text: review.text.clone(),
            parent_id: review.parent_id,
            movie_id: review.movie_id,
        }
    }
}

impl From<&NewReview> for ReviewChangeset {
    fn from(review: &NewReview) -> Self {
        Self {
            email: review.email.clone(),
            name: review.name.clone(),
            text: review.text.clone(),
        }
    }
}
