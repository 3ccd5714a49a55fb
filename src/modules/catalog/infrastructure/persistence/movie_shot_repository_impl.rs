use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_error;
use crate::modules::catalog::domain::{
    entities::{MovieShot, NewMovieShot},
    repositories::MovieShotRepository,
};
use crate::modules::catalog::infrastructure::models::{MovieShotRow, NewMovieShotRow};
use crate::schema::movie_shots;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct MovieShotRepositoryImpl {
    db: Arc<Database>,
}

impl MovieShotRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieShotRepository for MovieShotRepositoryImpl {
    async fn create_new(&self, shot: NewMovieShot) -> Option<MovieShot> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<MovieShot> {
            let mut conn = db.get_connection()?;
            let row: MovieShotRow = diesel::insert_into(movie_shots::table)
                .values(NewMovieShotRow::from(&shot))
                .get_result(&mut conn)?;
            Ok(row.into())
        })
        .await;
        match result {
            Ok(Ok(created)) => Some(created),
            Ok(Err(e)) => {
                log_error!("Failed to create movie shot: {}", e);
                None
            }
            Err(e) => {
                log_error!("Failed to create movie shot: {}", e);
                None
            }
        }
    }

    async fn for_movie(&self, movie_id: i32) -> Vec<MovieShot> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<MovieShot>> {
            let mut conn = db.get_connection()?;
            let rows = movie_shots::table
                .filter(movie_shots::movie_id.eq(movie_id))
                .order(movie_shots::id.asc())
                .load::<MovieShotRow>(&mut conn)?;
            Ok(rows.into_iter().map(MovieShotRow::into).collect())
        })
        .await;
        match result {
            Ok(Ok(shots)) => shots,
            Ok(Err(e)) => {
                log_error!("Movie shot listing failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Movie shot listing failed: {}", e);
                Vec::new()
            }
        }
    }
}
