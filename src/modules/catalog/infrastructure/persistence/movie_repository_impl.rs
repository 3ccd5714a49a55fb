use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use tokio::task;

use crate::log_error;
use crate::modules::catalog::domain::{
    entities::{Actor, Genre, Movie, MovieCard, NewMovie},
    repositories::MovieRepository,
    specifications::{ParamValue, Specification},
};
use crate::modules::catalog::infrastructure::models::{
    ActorRow, GenreRow, MovieActorRow, MovieChangeset, MovieDirectorRow, MovieGenreRow, MovieRow,
    NewMovieRow,
};
use crate::modules::catalog::infrastructure::query::{
    base_movie_filter, base_movie_ordering, MovieBoxedQuery,
};
use crate::schema::{actors, genres, movie_actors, movie_directors, movie_genres, movies};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{generate_unique_slug, slugify};
use crate::shared::Database;

type MovieCondition = Box<dyn BoxableExpression<movies::table, Pg, SqlType = Bool>>;

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Batch-load the relation sets for a page of movie rows and assemble entities
pub(crate) fn load_movies_with_relations(
    conn: &mut PgConnection,
    rows: Vec<MovieRow>,
) -> AppResult<Vec<Movie>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();

    let director_rows: Vec<(i32, ActorRow)> = movie_directors::table
        .inner_join(actors::table)
        .filter(movie_directors::movie_id.eq_any(&ids))
        .select((movie_directors::movie_id, actors::all_columns))
        .load(conn)?;

    let actor_rows: Vec<(i32, ActorRow)> = movie_actors::table
        .inner_join(actors::table)
        .filter(movie_actors::movie_id.eq_any(&ids))
        .select((movie_actors::movie_id, actors::all_columns))
        .load(conn)?;

    let genre_rows: Vec<(i32, GenreRow)> = movie_genres::table
        .inner_join(genres::table)
        .filter(movie_genres::movie_id.eq_any(&ids))
        .select((movie_genres::movie_id, genres::all_columns))
        .load(conn)?;

    let mut directors: HashMap<i32, Vec<Actor>> = HashMap::new();
    for (movie_id, row) in director_rows {
        directors.entry(movie_id).or_default().push(row.into());
    }
    let mut cast: HashMap<i32, Vec<Actor>> = HashMap::new();
    for (movie_id, row) in actor_rows {
        cast.entry(movie_id).or_default().push(row.into());
    }
    let mut genre_map: HashMap<i32, Vec<Genre>> = HashMap::new();
    for (movie_id, row) in genre_rows {
        genre_map.entry(movie_id).or_default().push(row.into());
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let id = row.id;
            row.into_entity(
                directors.remove(&id).unwrap_or_default(),
                cast.remove(&id).unwrap_or_default(),
                genre_map.remove(&id).unwrap_or_default(),
            )
        })
        .collect())
}

/// Translate validated same-object/lookup parameters into one AND-ed condition
fn movie_condition(params: &[(String, ParamValue)]) -> AppResult<MovieCondition> {
    let mut condition: Option<MovieCondition> = None;

    for (name, value) in params {
        let next: MovieCondition = match (name.as_str(), value) {
            ("pk" | "id", ParamValue::Int(id)) => Box::new(movies::id.eq(*id as i32)),
            ("title", ParamValue::Text(title)) => Box::new(movies::title.eq(title.clone())),
            ("url", ParamValue::Text(url)) => Box::new(movies::url.eq(url.clone())),
            ("year", ParamValue::Int(year)) => Box::new(movies::year.eq(*year as i16)),
            ("world_premiere", ParamValue::Date(date)) => {
                Box::new(movies::world_premiere.eq(*date))
            }
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "Movie queries cannot filter by \"{}\"",
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

/// Apply a whitelisted ordering parameter to a boxed movie query
fn apply_movie_ordering<'a>(
    query: MovieBoxedQuery<'a>,
    bare: &str,
    descending: bool,
    first: bool,
) -> AppResult<MovieBoxedQuery<'a>> {
    let ordered = match (bare, descending, first) {
        ("id", false, true) => query.order(movies::id.asc()),
        ("id", true, true) => query.order(movies::id.desc()),
        ("id", false, false) => query.then_order_by(movies::id.asc()),
        ("id", true, false) => query.then_order_by(movies::id.desc()),
        ("title", false, true) => query.order(movies::title.asc()),
        ("title", true, true) => query.order(movies::title.desc()),
        ("title", false, false) => query.then_order_by(movies::title.asc()),
        ("title", true, false) => query.then_order_by(movies::title.desc()),
        ("world_premiere", false, true) => query.order(movies::world_premiere.asc()),
        ("world_premiere", true, true) => query.order(movies::world_premiere.desc()),
        ("world_premiere", false, false) => query.then_order_by(movies::world_premiere.asc()),
        ("world_premiere", true, false) => query.then_order_by(movies::world_premiere.desc()),
        _ => {
            return Err(AppError::InvalidInput(format!(
                "Cannot order movies by \"{}\"",
                bare
            )))
        }
    };
    Ok(ordered)
}

fn ordered_movie_rows(
    conn: &mut PgConnection,
    params: Vec<(String, ParamValue)>,
) -> AppResult<Vec<MovieRow>> {
    let mut query = base_movie_filter(movies::table.into_boxed());
    let mut first = true;
    for (name, _) in &params {
        let descending = name.starts_with('-');
        let bare = name.trim_start_matches('-');
        query = apply_movie_ordering(query, bare, descending, first)?;
        first = false;
    }
    Ok(query.load::<MovieRow>(conn)?)
}

impl MovieRepositoryImpl {
    async fn create_new_inner(&self, movie: NewMovie) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Movie> {
            let mut conn = db.get_connection()?;

            // Derived fields are computed exactly once, at creation
            let year = movie.world_premiere.year() as i16;
            let slug = slugify(&movie.title);
            let taken: i64 = movies::table
                .filter(movies::url.ilike(slug.clone()))
                .count()
                .get_result(&mut conn)?;
            let url = if taken > 0 {
                generate_unique_slug(&slug)
            } else {
                slug
            };

            let row: MovieRow = diesel::insert_into(movies::table)
                .values(NewMovieRow::from_new(&movie, year, url))
                .get_result(&mut conn)?;

            // Relations are attached individually after the scalar insert.
            // A failure mid-loop leaves the row and earlier attachments in
            // place; the creation is reported as failed, not rolled back.
            for actor_id in &movie.director_ids {
                diesel::insert_into(movie_directors::table)
                    .values(MovieDirectorRow {
                        movie_id: row.id,
                        actor_id: *actor_id,
                    })
                    .execute(&mut conn)
                    .map_err(|e| {
                        log_error!(
                            "Failed to attach director {} to movie {}: {}",
                            actor_id,
                            row.id,
                            e
                        );
                        AppError::from(e)
                    })?;
            }
            for actor_id in &movie.actor_ids {
                diesel::insert_into(movie_actors::table)
                    .values(MovieActorRow {
                        movie_id: row.id,
                        actor_id: *actor_id,
                    })
                    .execute(&mut conn)
                    .map_err(|e| {
                        log_error!(
                            "Failed to attach actor {} to movie {}: {}",
                            actor_id,
                            row.id,
                            e
                        );
                        AppError::from(e)
                    })?;
            }
            for genre_id in &movie.genre_ids {
                diesel::insert_into(movie_genres::table)
                    .values(MovieGenreRow {
                        movie_id: row.id,
                        genre_id: *genre_id,
                    })
                    .execute(&mut conn)
                    .map_err(|e| {
                        log_error!(
                            "Failed to attach genre {} to movie {}: {}",
                            genre_id,
                            row.id,
                            e
                        );
                        AppError::from(e)
                    })?;
            }

            load_movies_with_relations(&mut conn, vec![row])?
                .into_iter()
                .next()
                .ok_or_else(|| {
                    AppError::InternalError("Created movie vanished during relation load".into())
                })
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
            let condition = movie_condition(&params)?;
            let matching: i64 = movies::table
                .filter(condition)
                .count()
                .get_result(&mut conn)?;
            Ok(matching > 0)
        })
        .await?
    }

    async fn get_by_parameter_inner(&self, spec: Specification) -> AppResult<Option<Movie>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Movie>> {
            let mut conn = db.get_connection()?;
            let condition = movie_condition(&params)?;
            let row = movies::table
                .filter(condition)
                .first::<MovieRow>(&mut conn)
                .optional()?;
            match row {
                Some(row) => Ok(load_movies_with_relations(&mut conn, vec![row])?
                    .into_iter()
                    .next()),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn get_ordered_inner(&self, spec: Specification) -> AppResult<Vec<Movie>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Movie>> {
            let mut conn = db.get_connection()?;
            let rows = ordered_movie_rows(&mut conn, params)?;
            load_movies_with_relations(&mut conn, rows)
        })
        .await?
    }

    async fn load_rows<F>(&self, build: F) -> AppResult<Vec<Movie>>
    where
        F: FnOnce(&mut PgConnection) -> AppResult<Vec<MovieRow>> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> AppResult<Vec<Movie>> {
            let mut conn = db.get_connection()?;
            let rows = build(&mut conn)?;
            load_movies_with_relations(&mut conn, rows)
        })
        .await?
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn create_new(&self, movie: NewMovie) -> Option<Movie> {
        match self.create_new_inner(movie).await {
            Ok(created) => Some(created),
            Err(e) => {
                log_error!("Failed to create movie: {}", e);
                None
            }
        }
    }

    async fn exists_with_same_params(&self, spec: Specification) -> bool {
        match self.exists_inner(spec).await {
            Ok(exists) => exists,
            Err(e) => {
                log_error!("Movie uniqueness check failed: {}", e);
                false
            }
        }
    }

    async fn get_by_parameter(&self, spec: Specification) -> Option<Movie> {
        match self.get_by_parameter_inner(spec).await {
            Ok(movie) => movie,
            Err(e) => {
                log_error!("Movie lookup failed: {}", e);
                None
            }
        }
    }

    async fn get_ordered(&self, spec: Specification) -> Vec<Movie> {
        match self.get_ordered_inner(spec).await {
            Ok(movies) => movies,
            Err(e) => {
                log_error!("Ordered movie listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn get_most_recently_added(&self, number: i64) -> Vec<Movie> {
        let result = self
            .load_rows(move |conn| {
                let query = base_movie_filter(movies::table.into_boxed())
                    .order(movies::id.desc())
                    .limit(number);
                Ok(query.load::<MovieRow>(conn)?)
            })
            .await;
        match result {
            Ok(movies) => movies,
            Err(e) => {
                log_error!("Recently added movie listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn filter_by_years_or_genres(
        &self,
        years: &[i16],
        genre_ids: &[i32],
    ) -> Vec<MovieCard> {
        let years = years.to_vec();
        let genre_ids = genre_ids.to_vec();
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Vec<MovieCard>> {
            let mut conn = db.get_connection()?;
            let genre_movies = movie_genres::table
                .filter(movie_genres::genre_id.eq_any(genre_ids))
                .select(movie_genres::movie_id);
            let rows = movies::table
                .filter(movies::draft.eq(false))
                .filter(movies::year.eq_any(years).or(movies::id.eq_any(genre_movies)))
                .order(movies::world_premiere.desc())
                .load::<MovieRow>(&mut conn)?;
            Ok(rows.iter().map(MovieRow::to_card).collect())
        })
        .await;
        flatten_cards(result, "Year/genre movie filter failed")
    }

    async fn filter_by_years_and_genres(
        &self,
        years: &[i16],
        genre_ids: &[i32],
    ) -> Vec<MovieCard> {
        let years = years.to_vec();
        let genre_ids = genre_ids.to_vec();
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Vec<MovieCard>> {
            let mut conn = db.get_connection()?;
            let genre_movies = movie_genres::table
                .filter(movie_genres::genre_id.eq_any(genre_ids))
                .select(movie_genres::movie_id);
            let rows = movies::table
                .filter(movies::draft.eq(false))
                .filter(movies::year.eq_any(years))
                .filter(movies::id.eq_any(genre_movies))
                .order(movies::world_premiere.desc())
                .load::<MovieRow>(&mut conn)?;
            Ok(rows.iter().map(MovieRow::to_card).collect())
        })
        .await;
        flatten_cards(result, "Combined movie filter failed")
    }

    async fn all_cards(&self) -> Vec<MovieCard> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<MovieCard>> {
            let mut conn = db.get_connection()?;
            let query = base_movie_ordering(base_movie_filter(movies::table.into_boxed()));
            let rows = query.load::<MovieRow>(&mut conn)?;
            Ok(rows.iter().map(MovieRow::to_card).collect())
        })
        .await;
        flatten_cards(result, "Movie card listing failed")
    }

    async fn cards_ordered_by(&self, spec: Specification) -> Vec<MovieCard> {
        let params = match spec.is_satisfied() {
            Ok(params) => params.to_vec(),
            Err(e) => {
                log_error!("Sorted movie card listing rejected: {}", e);
                return Vec::new();
            }
        };
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Vec<MovieCard>> {
            let mut conn = db.get_connection()?;
            let rows = ordered_movie_rows(&mut conn, params)?;
            Ok(rows.iter().map(MovieRow::to_card).collect())
        })
        .await;
        flatten_cards(result, "Sorted movie card listing failed")
    }

    async fn cards_page(&self, offset: i64, limit: i64) -> Vec<MovieCard> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<MovieCard>> {
            let mut conn = db.get_connection()?;
            let query = base_movie_ordering(base_movie_filter(movies::table.into_boxed()))
                .offset(offset)
                .limit(limit);
            let rows = query.load::<MovieRow>(&mut conn)?;
            Ok(rows.iter().map(MovieRow::to_card).collect())
        })
        .await;
        flatten_cards(result, "Movie card page failed")
    }

    async fn search_by_title(&self, title: &str) -> Vec<Movie> {
        let pattern = format!("%{}%", title);
        let result = self
            .load_rows(move |conn| {
                let query = base_movie_ordering(base_movie_filter(
                    movies::table
                        .into_boxed()
                        .filter(movies::title.ilike(pattern)),
                ));
                Ok(query.load::<MovieRow>(conn)?)
            })
            .await;
        match result {
            Ok(movies) => movies,
            Err(e) => {
                log_error!("Movie title search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn search_by_description(&self, description: &str) -> Vec<Movie> {
        let pattern = format!("%{}%", description);
        let result = self
            .load_rows(move |conn| {
                let query = base_movie_ordering(base_movie_filter(
                    movies::table
                        .into_boxed()
                        .filter(movies::description.ilike(pattern)),
                ));
                Ok(query.load::<MovieRow>(conn)?)
            })
            .await;
        match result {
            Ok(movies) => movies,
            Err(e) => {
                log_error!("Movie description search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn by_category_url(&self, url: &str) -> Vec<Movie> {
        let url = url.to_string();
        let result = self
            .load_rows(move |conn| {
                use crate::schema::categories;
                let rows = movies::table
                    .inner_join(categories::table)
                    .filter(categories::url.ilike(url))
                    .filter(movies::draft.eq(false))
                    .order(movies::world_premiere.desc())
                    .select(movies::all_columns)
                    .load::<MovieRow>(conn)?;
                Ok(rows)
            })
            .await;
        match result {
            Ok(movies) => movies,
            Err(e) => {
                log_error!("Category movie listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn by_genre_url(&self, url: &str) -> Vec<Movie> {
        let url = url.to_string();
        let result = self
            .load_rows(move |conn| {
                let genre_movies = movie_genres::table
                    .inner_join(genres::table)
                    .filter(genres::url.ilike(url))
                    .select(movie_genres::movie_id);
                let rows = movies::table
                    .filter(movies::draft.eq(false))
                    .filter(movies::id.eq_any(genre_movies))
                    .order(movies::world_premiere.desc())
                    .load::<MovieRow>(conn)?;
                Ok(rows)
            })
            .await;
        match result {
            Ok(movies) => movies,
            Err(e) => {
                log_error!("Genre movie listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn all_available_pks(&self) -> Vec<i32> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<i32>> {
            let mut conn = db.get_connection()?;
            let pks = movies::table
                .filter(movies::draft.eq(false))
                .select(movies::id)
                .order(movies::id.asc())
                .load::<i32>(&mut conn)?;
            Ok(pks)
        })
        .await;
        match result {
            Ok(Ok(pks)) => pks,
            Ok(Err(e)) => {
                log_error!("Movie pk enumeration failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Movie pk enumeration failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn pks_filtered(
        &self,
        genre_ids: &[i32],
        countries: &[String],
        year_range: Option<(i16, i16)>,
    ) -> Vec<i32> {
        let genre_ids = genre_ids.to_vec();
        let countries = countries.to_vec();
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Vec<i32>> {
            let mut conn = db.get_connection()?;
            let mut condition: MovieCondition = Box::new(movies::draft.eq(false));
            if !genre_ids.is_empty() {
                let genre_movies = movie_genres::table
                    .filter(movie_genres::genre_id.eq_any(genre_ids))
                    .select(movie_genres::movie_id);
                condition = Box::new(condition.and(movies::id.eq_any(genre_movies)));
            }
            if !countries.is_empty() {
                condition = Box::new(condition.and(movies::country.eq_any(countries)));
            }
            if let Some((from, to)) = year_range {
                condition = Box::new(condition.and(movies::year.between(from, to)));
            }
            let pks = movies::table
                .filter(condition)
                .select(movies::id)
                .order(movies::id.asc())
                .load::<i32>(&mut conn)?;
            Ok(pks)
        })
        .await;
        match result {
            Ok(Ok(pks)) => pks,
            Ok(Err(e)) => {
                log_error!("Filtered movie pk enumeration failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Filtered movie pk enumeration failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn by_pks(&self, pks: &[i32]) -> Vec<Movie> {
        let pks = pks.to_vec();
        let result = self
            .load_rows(move |conn| {
                Ok(movies::table
                    .filter(movies::id.eq_any(pks))
                    .load::<MovieRow>(conn)?)
            })
            .await;
        match result {
            Ok(movies) => movies,
            Err(e) => {
                log_error!("Movie lookup by pks failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn unique_values(&self, spec: Specification) -> Vec<String> {
        let params = match spec.is_satisfied() {
            Ok(params) => params.to_vec(),
            Err(e) => {
                log_error!("Unique-values projection rejected: {}", e);
                return Vec::new();
            }
        };
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Vec<String>> {
            let mut conn = db.get_connection()?;
            let mut values = Vec::new();
            for (name, _) in &params {
                match name.as_str() {
                    "country" => {
                        let countries = movies::table
                            .select(movies::country)
                            .distinct()
                            .load::<String>(&mut conn)?;
                        values.extend(countries);
                    }
                    "year" => {
                        let years = movies::table
                            .select(movies::year)
                            .distinct()
                            .order(movies::year.asc())
                            .load::<i16>(&mut conn)?;
                        values.extend(years.into_iter().map(|year| year.to_string()));
                    }
                    "pk" => {
                        let pks = movies::table
                            .select(movies::id)
                            .order(movies::id.asc())
                            .load::<i32>(&mut conn)?;
                        values.extend(pks.into_iter().map(|pk| pk.to_string()));
                    }
                    other => {
                        return Err(AppError::InvalidInput(format!(
                            "Movies have no unique-values projection for \"{}\"",
                            other
                        )))
                    }
                }
            }
            Ok(values)
        })
        .await;
        match result {
            Ok(Ok(values)) => values,
            Ok(Err(e)) => {
                log_error!("Unique-values projection failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Unique-values projection failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn distinct_years(&self) -> Vec<i16> {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<Vec<i16>> {
            let mut conn = db.get_connection()?;
            let years = movies::table
                .filter(movies::draft.eq(false))
                .select(movies::year)
                .distinct()
                .order(movies::year.asc())
                .load::<i16>(&mut conn)?;
            Ok(years)
        })
        .await;
        match result {
            Ok(Ok(years)) => years,
            Ok(Err(e)) => {
                log_error!("Distinct year projection failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                log_error!("Distinct year projection failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn count(&self) -> i64 {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            Ok(movies::table.count().get_result(&mut conn)?)
        })
        .await;
        match result {
            Ok(Ok(count)) => count,
            Ok(Err(e)) => {
                log_error!("Movie count failed: {}", e);
                0
            }
            Err(e) => {
                log_error!("Movie count failed: {}", e);
                0
            }
        }
    }

    async fn update(&self, id: i32, movie: NewMovie) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let year = movie.world_premiere.year() as i16;
            diesel::update(movies::table.find(id))
                .set(MovieChangeset::from_new(&movie, year))
                .execute(&mut conn)?;

            // Relation sets are replaced wholesale on update
            diesel::delete(movie_directors::table.filter(movie_directors::movie_id.eq(id)))
                .execute(&mut conn)?;
            diesel::delete(movie_actors::table.filter(movie_actors::movie_id.eq(id)))
                .execute(&mut conn)?;
            diesel::delete(movie_genres::table.filter(movie_genres::movie_id.eq(id)))
                .execute(&mut conn)?;
            for actor_id in &movie.director_ids {
                diesel::insert_into(movie_directors::table)
                    .values(MovieDirectorRow {
                        movie_id: id,
                        actor_id: *actor_id,
                    })
                    .execute(&mut conn)?;
            }
            for actor_id in &movie.actor_ids {
                diesel::insert_into(movie_actors::table)
                    .values(MovieActorRow {
                        movie_id: id,
                        actor_id: *actor_id,
                    })
                    .execute(&mut conn)?;
            }
            for genre_id in &movie.genre_ids {
                diesel::insert_into(movie_genres::table)
                    .values(MovieGenreRow {
                        movie_id: id,
                        genre_id: *genre_id,
                    })
                    .execute(&mut conn)?;
            }
            Ok(())
        })
        .await;
        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log_error!("Failed to update movie {}: {}", id, e);
                false
            }
            Err(e) => {
                log_error!("Failed to update movie {}: {}", id, e);
                false
            }
        }
    }

    async fn delete(&self, id: i32) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            Ok(diesel::delete(movies::table.find(id)).execute(&mut conn)?)
        })
        .await;
        match result {
            Ok(Ok(deleted)) => deleted > 0,
            Ok(Err(e)) => {
                log_error!("Failed to delete movie {}: {}", id, e);
                false
            }
            Err(e) => {
                log_error!("Failed to delete movie {}: {}", id, e);
                false
            }
        }
    }
}

fn flatten_cards(
    result: Result<AppResult<Vec<MovieCard>>, task::JoinError>,
    context: &str,
) -> Vec<MovieCard> {
    match result {
        Ok(Ok(cards)) => cards,
        Ok(Err(e)) => {
            log_error!("{}: {}", context, e);
            Vec::new()
        }
        Err(e) => {
            log_error!("{}: {}", context, e);
            Vec::new()
        }
    }
}
