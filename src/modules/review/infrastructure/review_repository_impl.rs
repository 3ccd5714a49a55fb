use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_error;
use crate::modules::review::domain::{
    entities::{NewReview, Review},
    repositories::ReviewRepository,
};
use crate::modules::review::infrastructure::models::{NewReviewRow, ReviewChangeset, ReviewRow};
use crate::schema::reviews;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create_new(&self, review: NewReview) -> Option<Review> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Review> {
            let mut conn = db.get_connection()?;
            let row: ReviewRow = diesel::insert_into(reviews::table)
                .values(NewReviewRow::from(&review))
                .get_result(&mut conn)?;
            Ok(row.into())
        })
        .await;
        match result {
            Ok(Ok(created)) => Some(created),
            Ok(Err(e)) => {
                log_error!("Failed to create review: {}", e);
                None
            }
            Err(e) => {
                log_error!("Failed to create review: {}", e);
                None
            }
        }
    }

    async fn for_movie(&self, movie_id: i32) -> Vec<Review> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<Review>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .filter(reviews::movie_id.eq(movie_id))
                .order(reviews::added.asc())
                .load::<ReviewRow>(&mut conn)?;
            Ok(rows.into_iter().map(ReviewRow::into).collect())
        })
        .await;
        match result {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                log_error!("Review listing failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Review listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn get_all(&self) -> Vec<Review> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<Review>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .order(reviews::added.asc())
                .load::<ReviewRow>(&mut conn)?;
            Ok(rows.into_iter().map(ReviewRow::into).collect())
        })
        .await;
        match result {
            Ok(Ok(found)) => found,
            Ok(Err(e)) => {
                log_error!("Review listing failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Review listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn update(&self, id: i32, review: NewReview) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            Ok(diesel::update(reviews::table.find(id))
                .set(ReviewChangeset::from(&review))
                .execute(&mut conn)?)
        })
        .await;
        match result {
            Ok(Ok(updated)) => updated > 0,
            Ok(Err(e)) => {
                log_error!("Failed to update review {}: {}", id, e);
                false
            }
            Err(e) => {
                log_error!("Failed to update review {}: {}", id, e);
                false
            }
        }
    }

    async fn delete(&self, id: i32) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            // Replies outlive the deleted parent; only the reference is cleared
            conn.transaction::<usize, diesel::result::Error, _>(|conn| {
                diesel::update(reviews::table.filter(reviews::parent_id.eq(id)))
                    .set(reviews::parent_id.eq(None::<i32>))
                    .execute(conn)?;
                diesel::delete(reviews::table.find(id)).execute(conn)
            })
            .map_err(Into::into)
        })
        .await;
        match result {
            Ok(Ok(deleted)) => deleted > 0,
            Ok(Err(e)) => {
                log_error!("Failed to delete review {}: {}", id, e);
                false
            }
            Err(e) => {
                log_error!("Failed to delete review {}: {}", id, e);
                false
            }
        }
    }
}
