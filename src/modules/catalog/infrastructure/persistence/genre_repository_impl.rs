use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use tokio::task;

use crate::log_error;
use crate::modules::catalog::domain::{
    entities::{Genre, NewNamedSlug},
    repositories::GenreRepository,
    specifications::{ParamValue, Specification},
};
use crate::modules::catalog::infrastructure::models::{GenreRow, NewGenreRow};
use crate::schema::{genres, movie_genres, movies};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

type GenreCondition = Box<dyn BoxableExpression<genres::table, Pg, SqlType = Bool>>;

pub struct GenreRepositoryImpl {
    db: Arc<Database>,
}

impl GenreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn genre_condition(params: &[(String, ParamValue)]) -> AppResult<GenreCondition> {
    let mut condition: Option<GenreCondition> = None;

    for (name, value) in params {
        let next: GenreCondition = match (name.as_str(), value) {
            ("pk" | "id", ParamValue::Int(id)) => Box::new(genres::id.eq(*id as i32)),
            ("name", ParamValue::Text(genre_name)) => {
                Box::new(genres::name.eq(genre_name.clone()))
            }
            ("url", ParamValue::Text(url)) => Box::new(genres::url.eq(url.clone())),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "Genre queries cannot filter by \"{}\"",
                    name
                )))
            }
        };
        condition = Some(match condition {
            Some(previous) => Box::new(previous.and(next)),
            None => next,
        });
    }

    condition.ok_or_else(|| AppError::InvalidInput("No one parameter was passed".to_string()))
}

impl GenreRepositoryImpl {
    async fn create_new_inner(&self, genre: NewNamedSlug) -> AppResult<Genre> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> AppResult<Genre> {
            let mut conn = db.get_connection()?;
            let row: GenreRow = diesel::insert_into(genres::table)
                .values(NewGenreRow::from(&genre))
                .get_result(&mut conn)?;
            Ok(row.into())
        })
        .await?
    }

    async fn exists_inner(&self, spec: Specification) -> AppResult<bool> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let condition = genre_condition(&params)?;
            let matching: i64 = genres::table
                .filter(condition)
                .count()
                .get_result(&mut conn)?;
            Ok(matching > 0)
        })
        .await?
    }

    async fn get_by_parameter_inner(&self, spec: Specification) -> AppResult<Option<Genre>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Genre>> {
            let mut conn = db.get_connection()?;
            let condition = genre_condition(&params)?;
            let row = genres::table
                .filter(condition)
                .first::<GenreRow>(&mut conn)
                .optional()?;
            Ok(row.map(GenreRow::into))
        })
        .await?
    }

    async fn get_ordered_inner(&self, spec: Specification) -> AppResult<Vec<Genre>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Genre>> {
            let mut conn = db.get_connection()?;
            let mut query = genres::table.into_boxed();
            for (name, _) in &params {
                let descending = name.starts_with('-');
                let bare = name.trim_start_matches('-');
                query = match (bare, descending) {
                    ("id", false) => query.order(genres::id.asc()),
                    ("id", true) => query.order(genres::id.desc()),
                    ("name", false) => query.order(genres::name.asc()),
                    ("name", true) => query.order(genres::name.desc()),
                    _ => {
                        return Err(AppError::InvalidInput(format!(
                            "Cannot order genres by \"{}\"",
                            bare
                        )))
                    }
                };
            }
            let rows = query.load::<GenreRow>(&mut conn)?;
            Ok(rows.into_iter().map(GenreRow::into).collect())
        })
        .await?
    }

    async fn genres_with_movies_inner(&self) -> AppResult<Vec<Genre>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> AppResult<Vec<Genre>> {
            let mut conn = db.get_connection()?;
            let published = movie_genres::table
                .inner_join(movies::table)
                .filter(movies::draft.eq(false))
                .select(movie_genres::genre_id);
            let rows = genres::table
                .filter(genres::id.eq_any(published))
                .order(genres::id.asc())
                .load::<GenreRow>(&mut conn)?;
            Ok(rows.into_iter().map(GenreRow::into).collect())
        })
        .await?
    }
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn create_new(&self, genre: NewNamedSlug) -> Option<Genre> {
        match self.create_new_inner(genre).await {
            Ok(created) => Some(created),
            Err(e) => {
                log_error!("Failed to create genre: {}", e);
                None
            }
        }
    }

    async fn exists_with_same_params(&self, spec: Specification) -> bool {
        match self.exists_inner(spec).await {
            Ok(exists) => exists,
            Err(e) => {
                log_error!("Genre uniqueness check failed: {}", e);
                false
            }
        }
    }

    async fn get_by_parameter(&self, spec: Specification) -> Option<Genre> {
        match self.get_by_parameter_inner(spec).await {
            Ok(genre) => genre,
            Err(e) => {
                log_error!("Genre lookup failed: {}", e);
                None
            }
        }
    }

    async fn get_ordered(&self, spec: Specification) -> Vec<Genre> {
        match self.get_ordered_inner(spec).await {
            Ok(genres) => genres,
            Err(e) => {
                log_error!("Ordered genre listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn genres_with_movies(&self) -> Vec<Genre> {
        match self.genres_with_movies_inner().await {
            Ok(genres) => genres,
            Err(e) => {
                log_error!("Non-empty genre listing failed: {}", e);
                Vec::new()
            }
        }
    }
}
