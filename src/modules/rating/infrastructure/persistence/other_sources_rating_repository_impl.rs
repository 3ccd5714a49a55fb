use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_error;
use crate::modules::catalog::domain::entities::MovieCard;
use crate::modules::catalog::infrastructure::models::MovieRow;
use crate::modules::rating::domain::{
    entities::{ExternalRating, ExternalScores},
    repositories::OtherSourcesRatingRepository,
};
use crate::modules::rating::infrastructure::models::{
    NewOtherSourcesRatingRow, OtherSourcesRatingRow,
};
use crate::schema::{movies, other_sources_ratings};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct OtherSourcesRatingRepositoryImpl {
    db: Arc<Database>,
}

impl OtherSourcesRatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtherSourcesRatingRepository for OtherSourcesRatingRepositoryImpl {
    async fn get_by_movie(&self, movie_id: i32) -> Option<ExternalRating> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Option<ExternalRating>> {
            let mut conn = db.get_connection()?;
            let row = other_sources_ratings::table
                .filter(other_sources_ratings::movie_id.eq(movie_id))
                .first::<OtherSourcesRatingRow>(&mut conn)
                .optional()?;
            Ok(row.map(OtherSourcesRatingRow::into_entity))
        })
        .await;
        match result {
            Ok(Ok(rating)) => rating,
            Ok(Err(e)) => {
                log_error!("External rating lookup failed: {}", e);
                None
            }
            Err(e) => {
                log_error!("External rating lookup failed: {}", e);
                None
            }
        }
    }

    async fn create_new(&self, movie_id: i32, scores: &ExternalScores) -> bool {
        let db = Arc::clone(&self.db);
        let rating = match serde_json::to_value(scores) {
            Ok(value) => value,
            Err(e) => {
                log_error!("Failed to serialize external rating: {}", e);
                return false;
            }
        };

        let result = task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(other_sources_ratings::table)
                .values(NewOtherSourcesRatingRow { rating, movie_id })
                .execute(&mut conn)
                .map_err(AppError::from)?;
            Ok(())
        })
        .await;
        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log_error!("Failed to store external rating: {}", e);
                false
            }
            Err(e) => {
                log_error!("Failed to store external rating: {}", e);
                false
            }
        }
    }

    async fn movie_cards_sorted_by_imdb(&self, descending: bool) -> Vec<MovieCard> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<MovieCard>> {
            let mut conn = db.get_connection()?;
            let rows: Vec<(OtherSourcesRatingRow, MovieRow)> = other_sources_ratings::table
                .inner_join(movies::table)
                .filter(movies::draft.eq(false))
                .load(&mut conn)?;

            // The score lives inside the JSON document; order in memory
            let mut rated: Vec<(f64, MovieCard)> = rows
                .into_iter()
                .map(|(rating_row, movie_row)| {
                    let entity = rating_row.into_entity();
                    (entity.scores.imdb_value(), movie_row.to_card())
                })
                .collect();
            rated.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
            if descending {
                rated.reverse();
            }
            Ok(rated.into_iter().map(|(_, card)| card).collect())
        })
        .await;
        match result {
            Ok(Ok(cards)) => cards,
            Ok(Err(e)) => {
                log_error!("Rating-ordered movie listing failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Rating-ordered movie listing failed: {}", e);
                Vec::new()
            }
        }
    }
}
