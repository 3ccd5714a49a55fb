use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Double, Integer, Nullable};
use tokio::task;

use crate::log_error;
use crate::modules::rating::domain::repositories::RatingRepository;
use crate::schema::{rating_stars, ratings};
use crate::shared::errors::AppResult;
use crate::shared::Database;

/// Aggregate row for the average-rating query
#[derive(QueryableByName, Debug)]
struct AverageRow {
    #[diesel(sql_type = Nullable<Double>)]
    average: Option<f64>,
}

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn update_or_create(&self, ip: &str, movie_id: i32, star_id: i32) -> bool {
        let ip = ip.to_string();
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // The store serializes concurrent upserts on the (ip, movie) key
            diesel::insert_into(ratings::table)
                .values((
                    ratings::ip.eq(&ip),
                    ratings::movie_id.eq(movie_id),
                    ratings::star_id.eq(star_id),
                ))
                .on_conflict((ratings::ip, ratings::movie_id))
                .do_update()
                .set(ratings::star_id.eq(star_id))
                .execute(&mut conn)?;
            Ok(())
        })
        .await;
        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log_error!("Rating upsert failed: {}", e);
                false
            }
            Err(e) => {
                log_error!("Rating upsert failed: {}", e);
                false
            }
        }
    }

    async fn get_star_value(&self, ip: &str, movie_id: i32) -> Option<i16> {
        let ip = ip.to_string();
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Option<i16>> {
            let mut conn = db.get_connection()?;
            let value = ratings::table
                .inner_join(rating_stars::table)
                .filter(ratings::ip.eq(&ip))
                .filter(ratings::movie_id.eq(movie_id))
                .select(rating_stars::value)
                .first::<i16>(&mut conn)
                .optional()?;
            Ok(value)
        })
        .await;
        match result {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                log_error!("Rating lookup failed: {}", e);
                None
            }
            Err(e) => {
                log_error!("Rating lookup failed: {}", e);
                None
            }
        }
    }

    async fn delete(&self, ip: &str, movie_id: i32) -> bool {
        let ip = ip.to_string();
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            Ok(diesel::delete(
                ratings::table
                    .filter(ratings::ip.eq(&ip))
                    .filter(ratings::movie_id.eq(movie_id)),
            )
            .execute(&mut conn)?)
        })
        .await;
        match result {
            Ok(Ok(deleted)) => deleted > 0,
            Ok(Err(e)) => {
                log_error!("Rating deletion failed: {}", e);
                false
            }
            Err(e) => {
                log_error!("Rating deletion failed: {}", e);
                false
            }
        }
    }

    async fn average_for_movie(&self, movie_id: i32) -> Option<f32> {
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Option<f64>> {
            let mut conn = db.get_connection()?;
            let row: AverageRow = diesel::sql_query(
                "SELECT ROUND(AVG(rs.value), 1)::float8 AS average \
                 FROM rating_stars rs \
                 INNER JOIN ratings r ON r.star_id = rs.id \
                 WHERE r.movie_id = $1",
            )
            .bind::<Integer, _>(movie_id)
            .get_result(&mut conn)?;
            Ok(row.average)
        })
        .await;
        match result {
            Ok(Ok(average)) => average.map(|value| value as f32),
            Ok(Err(e)) => {
                log_error!("Average rating query failed: {}", e);
                None
            }
            Err(e) => {
                log_error!("Average rating query failed: {}", e);
                None
            }
        }
    }
}
