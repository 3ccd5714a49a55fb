use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::forms::FormData;

/// Movie category (e.g. "Film", "Series")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Actors and directors share one entity; the role comes from which
/// movie relation references them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    /// Derived from birth_date/death_date, recomputed on every save
    pub age: i16,
    pub description: String,
    pub image: String,
    pub url: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}

/// Movie with its relation sets loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    /// Derived from world_premiere at creation
    pub year: i16,
    pub country: String,
    pub world_premiere: NaiveDate,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    pub url: String,
    pub draft: bool,
    pub directors: Vec<Actor>,
    pub actors: Vec<Actor>,
    pub genres: Vec<Genre>,
}

/// Lightweight listing projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCard {
    pub title: String,
    pub tagline: String,
    pub poster: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieShot {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

/// Input for movie creation/update; `year` and `url` are derived at save time
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub country: String,
    pub world_premiere: NaiveDate,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    pub draft: bool,
    pub director_ids: Vec<i32>,
    pub actor_ids: Vec<i32>,
    pub genre_ids: Vec<i32>,
}

impl NewMovie {
    /// Extract a validated movie payload from the form mapping
    pub fn from_form(data: &FormData) -> AppResult<Self> {
        Ok(Self {
            title: required_text(data, "title")?,
            tagline: required_text(data, "tagline")?,
            description: required_text(data, "description")?,
            poster: required_text(data, "poster")?,
            country: required_text(data, "country")?,
            world_premiere: data
                .get_date("world_premiere")
                .ok_or_else(|| missing("world_premiere"))?,
            budget: data.get_int("budget").ok_or_else(|| missing("budget"))?,
            fees_in_usa: data
                .get_int("fees_in_usa")
                .ok_or_else(|| missing("fees_in_usa"))?,
            fees_in_world: data
                .get_int("fees_in_world")
                .ok_or_else(|| missing("fees_in_world"))?,
            category_id: data
                .get_optional_ref("category")
                .ok_or_else(|| missing("category"))?,
            draft: data.get_bool("draft").ok_or_else(|| missing("draft"))?,
            director_ids: data
                .get_refs("directors")
                .ok_or_else(|| missing("directors"))?
                .to_vec(),
            actor_ids: data
                .get_refs("actors")
                .ok_or_else(|| missing("actors"))?
                .to_vec(),
            genre_ids: data
                .get_refs("genres")
                .ok_or_else(|| missing("genres"))?
                .to_vec(),
        })
    }
}

/// Input for actor/director creation/update; `age` and `url` are derived
#[derive(Debug, Clone, PartialEq)]
pub struct NewActor {
    pub name: String,
    pub description: String,
    pub image: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}

impl NewActor {
    pub fn from_form(data: &FormData) -> AppResult<Self> {
        Ok(Self {
            name: required_text(data, "name")?,
            description: required_text(data, "description")?,
            image: required_text(data, "image")?,
            birth_date: data
                .get_date("birth_date")
                .ok_or_else(|| missing("birth_date"))?,
            death_date: data
                .get_optional_date("death_date")
                .ok_or_else(|| missing("death_date"))?,
        })
    }
}

/// Input shared by genre and category creation
#[derive(Debug, Clone, PartialEq)]
pub struct NewNamedSlug {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl NewNamedSlug {
    pub fn from_form(data: &FormData) -> AppResult<Self> {
        Ok(Self {
            name: required_text(data, "name")?,
            description: required_text(data, "description")?,
            url: required_text(data, "url")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMovieShot {
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

impl NewMovieShot {
    pub fn from_form(data: &FormData) -> AppResult<Self> {
        Ok(Self {
            title: required_text(data, "title")?,
            description: required_text(data, "description")?,
            image: required_text(data, "image")?,
            movie_id: data.get_ref("movie").ok_or_else(|| missing("movie"))?,
        })
    }
}

fn required_text(data: &FormData, name: &str) -> AppResult<String> {
    data.get_text(name)
        .map(str::to_string)
        .ok_or_else(|| missing(name))
}

fn missing(name: &str) -> AppError {
    AppError::InvalidInput(format!("Field \"{}\" is missing or has a wrong type", name))
}
