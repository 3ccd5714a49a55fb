use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_error;
use crate::modules::rating::domain::{entities::RatingStar, repositories::RatingStarRepository};
use crate::modules::rating::infrastructure::models::{NewRatingStarRow, RatingStarRow};
use crate::schema::rating_stars;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct RatingStarRepositoryImpl {
    db: Arc<Database>,
}

impl RatingStarRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingStarRepository for RatingStarRepositoryImpl {
    async fn create_new(&self, value: i16) -> Option<RatingStar> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<RatingStar> {
            let mut conn = db.get_connection()?;
            let row: RatingStarRow = diesel::insert_into(rating_stars::table)
                .values(NewRatingStarRow { value })
                .get_result(&mut conn)?;
            Ok(row.into())
        })
        .await;
        match result {
            Ok(Ok(star)) => Some(star),
            Ok(Err(e)) => {
                log_error!("Failed to create rating star: {}", e);
                None
            }
            Err(e) => {
                log_error!("Failed to create rating star: {}", e);
                None
            }
        }
    }

    async fn get_all(&self) -> Vec<RatingStar> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<RatingStar>> {
            let mut conn = db.get_connection()?;
            let rows = rating_stars::table
                .order(rating_stars::value.desc())
                .load::<RatingStarRow>(&mut conn)?;
            Ok(rows.into_iter().map(RatingStarRow::into).collect())
        })
        .await;
        match result {
            Ok(Ok(stars)) => stars,
            Ok(Err(e)) => {
                log_error!("Rating star listing failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Rating star listing failed: {}", e);
                Vec::new()
            }
        }
    }
}
