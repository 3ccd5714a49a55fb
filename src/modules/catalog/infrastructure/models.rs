use chrono::NaiveDate;
use diesel::prelude::*;

use crate::modules::catalog::domain::entities::{
    Actor, Category, Genre, Movie, MovieCard, MovieShot, NewActor, NewMovie, NewMovieShot,
    NewNamedSlug,
};
use crate::schema::{
    actors, categories, genres, movie_actors, movie_directors, movie_genres, movie_shots, movies,
};

// ================== MOVIE MODELS ==================

/// Movie database row without relations
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieRow {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: NaiveDate,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    pub url: String,
    pub draft: bool,
}

/// Insert payload (write)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovieRow {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: NaiveDate,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    pub url: String,
    pub draft: bool,
}

/// Update payload (write); excludes `id` and the immutable `url`
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieChangeset {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: NaiveDate,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    pub draft: bool,
}

#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = movie_directors)]
pub struct MovieDirectorRow {
    pub movie_id: i32,
    pub actor_id: i32,
}

#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = movie_actors)]
pub struct MovieActorRow {
    pub movie_id: i32,
    pub actor_id: i32,
}

#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = movie_genres)]
pub struct MovieGenreRow {
    pub movie_id: i32,
    pub genre_id: i32,
}

// ================== ACTOR / TAXONOMY MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = actors)]
pub struct ActorRow {
    pub id: i32,
    pub name: String,
    pub age: i16,
    pub description: String,
    pub image: String,
    pub url: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = actors)]
pub struct NewActorRow {
    pub name: String,
    pub age: i16,
    pub description: String,
    pub image: String,
    pub url: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}

/// Update payload; `url` is fixed at creation, `age` is always recomputed
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = actors)]
pub struct ActorChangeset {
    pub name: String,
    pub age: i16,
    pub description: String,
    pub image: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = genres)]
pub struct GenreRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = genres)]
pub struct NewGenreRow {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movie_shots)]
pub struct MovieShotRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movie_shots)]
pub struct NewMovieShotRow {
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

// ================== MAPPERS ==================

impl MovieRow {
    /// Assemble the domain entity from the row plus its loaded relation sets
    pub fn into_entity(
        self,
        directors: Vec<Actor>,
        actors: Vec<Actor>,
        genres: Vec<Genre>,
    ) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            tagline: self.tagline,
            description: self.description,
            poster: self.poster,
            year: self.year,
            country: self.country,
            world_premiere: self.world_premiere,
            budget: self.budget,
            fees_in_usa: self.fees_in_usa,
            fees_in_world: self.fees_in_world,
            category_id: self.category_id,
            url: self.url,
            draft: self.draft,
            directors,
            actors,
            genres,
        }
    }

    pub fn to_card(&self) -> MovieCard {
        MovieCard {
            title: self.title.clone(),
            tagline: self.tagline.clone(),
            poster: self.poster.clone(),
            url: self.url.clone(),
        }
    }
}

impl NewMovieRow {
    /// Build the insert payload; `year` and `url` are the derived fields
    pub fn from_new(movie: &NewMovie, year: i16, url: String) -> Self {
        Self {
            title: movie.title.clone(),
            tagline: movie.tagline.clone(),
            description: movie.description.clone(),
            poster: movie.poster.clone(),
            year,
            country: movie.country.clone(),
            world_premiere: movie.world_premiere,
            budget: movie.budget,
            fees_in_usa: movie.fees_in_usa,
            fees_in_world: movie.fees_in_world,
            category_id: movie.category_id,
            url,
            draft: movie.draft,
        }
    }
}

impl MovieChangeset {
    pub fn from_new(movie: &NewMovie, year: i16) -> Self {
        Self {
            title: movie.title.clone(),
            tagline: movie.tagline.clone(),
            description: movie.description.clone(),
            poster: movie.poster.clone(),
            year,
            country: movie.country.clone(),
            world_premiere: movie.world_premiere,
            budget: movie.budget,
            fees_in_usa: movie.fees_in_usa,
            fees_in_world: movie.fees_in_world,
            category_id: movie.category_id,
            draft: movie.draft,
        }
    }
}

impl From<ActorRow> for Actor {
    fn from(row: ActorRow) -> Self {
        Actor {
            id: row.id,
            name: row.name,
            age: row.age,
            description: row.description,
            image: row.image,
            url: row.url,
            birth_date: row.birth_date,
            death_date: row.death_date,
        }
    }
}

impl NewActorRow {
    pub fn from_new(actor: &NewActor, age: i16, url: String) -> Self {
        Self {
            name: actor.name.clone(),
            age,
            description: actor.description.clone(),
            image: actor.image.clone(),
            url,
            birth_date: actor.birth_date,
            death_date: actor.death_date,
        }
    }
}

impl ActorChangeset {
    pub fn from_new(actor: &NewActor, age: i16) -> Self {
        Self {
            name: actor.name.clone(),
            age,
            description: actor.description.clone(),
            image: actor.image.clone(),
            birth_date: actor.birth_date,
            death_date: actor.death_date,
        }
    }
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Genre {
            id: row.id,
            name: row.name,
            description: row.description,
            url: row.url,
        }
    }
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            description: row.description,
            url: row.url,
        }
    }
}

impl From<&NewNamedSlug> for NewGenreRow {
    fn from(genre: &NewNamedSlug) -> Self {
        Self {
            name: genre.name.clone(),
            description: genre.description.clone(),
            url: genre.url.clone(),
        }
    }
}

impl From<&NewNamedSlug> for NewCategoryRow {
    fn from(category: &NewNamedSlug) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            url: category.url.clone(),
        }
    }
}

impl From<MovieShotRow> for MovieShot {
    fn from(row: MovieShotRow) -> Self {
        MovieShot {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image,
            movie_id: row.movie_id,
        }
    }
}

impl From<&NewMovieShot> for NewMovieShotRow {
    fn from(shot: &NewMovieShot) -> Self {
        Self {
            title: shot.title.clone(),
            description: shot.description.clone(),
            image: shot.image.clone(),
            movie_id: shot.movie_id,
        }
    }
}
