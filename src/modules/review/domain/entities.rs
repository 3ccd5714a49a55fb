use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor review; `parent_id` forms the reply tree.
/// Deleting a parent nulls the children's reference, it never cascades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub text: String,
    pub added: DateTime<Utc>,
    pub parent_id: Option<i32>,
    pub movie_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub email: String,
    pub name: String,
    pub text: String,
    pub movie_id: i32,
    pub parent_id: Option<i32>,
}
