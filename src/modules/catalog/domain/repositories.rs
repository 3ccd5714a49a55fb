use async_trait::async_trait;

use super::entities::{
    Actor, Category, Genre, Movie, MovieCard, MovieShot, NewActor, NewMovie, NewMovieShot,
    NewNamedSlug,
};
use super::specifications::Specification;

/// Repository contract for movies.
///
/// Write and delete operations never propagate storage errors: implementations
/// log the underlying cause and signal failure with `Option`/`bool`. Invalid
/// specifications are likewise swallowed into empty results at this boundary.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Multi-step creation: scalar row first, then directors/actors/genres
    /// attached individually. A partial failure after the initial insert is
    /// reported as `None` without rolling back already-attached rows.
    async fn create_new(&self, movie: NewMovie) -> Option<Movie>;

    /// Uniqueness probe through the same-object specification
    async fn exists_with_same_params(&self, spec: Specification) -> bool;

    async fn get_by_parameter(&self, spec: Specification) -> Option<Movie>;

    /// Published movies ordered by a whitelisted parameter
    async fn get_ordered(&self, spec: Specification) -> Vec<Movie>;

    /// Newest rows first (insertion order), drafts excluded
    async fn get_most_recently_added(&self, number: i64) -> Vec<Movie>;

    /// Published movies matching any of the given years OR any of the genres
    async fn filter_by_years_or_genres(&self, years: &[i16], genre_ids: &[i32])
        -> Vec<MovieCard>;

    /// Published movies matching one of the years AND one of the genres
    async fn filter_by_years_and_genres(
        &self,
        years: &[i16],
        genre_ids: &[i32],
    ) -> Vec<MovieCard>;

    /// All published movies as listing cards
    async fn all_cards(&self) -> Vec<MovieCard>;

    /// Published cards ordered by a whitelisted parameter
    async fn cards_ordered_by(&self, spec: Specification) -> Vec<MovieCard>;

    /// One page of published cards in canonical ordering
    async fn cards_page(&self, offset: i64, limit: i64) -> Vec<MovieCard>;

    async fn search_by_title(&self, title: &str) -> Vec<Movie>;

    async fn search_by_description(&self, description: &str) -> Vec<Movie>;

    async fn by_category_url(&self, url: &str) -> Vec<Movie>;

    async fn by_genre_url(&self, url: &str) -> Vec<Movie>;

    /// Primary keys of all published movies (random-sampling support)
    async fn all_available_pks(&self) -> Vec<i32>;

    /// Primary keys of published movies constrained by genres, countries
    /// and an inclusive year range; empty slices mean "no restriction"
    async fn pks_filtered(
        &self,
        genre_ids: &[i32],
        countries: &[String],
        year_range: Option<(i16, i16)>,
    ) -> Vec<i32>;

    async fn by_pks(&self, pks: &[i32]) -> Vec<Movie>;

    /// Distinct values of a whitelisted column, rendered as strings
    async fn unique_values(&self, spec: Specification) -> Vec<String>;

    /// Distinct release years of published movies, ascending
    async fn distinct_years(&self) -> Vec<i16>;

    async fn count(&self) -> i64;

    async fn update(&self, id: i32, movie: NewMovie) -> bool;

    async fn delete(&self, id: i32) -> bool;
}

/// Repository contract for actors/directors
#[async_trait]
pub trait ActorDirectorRepository: Send + Sync {
    /// Creation derives `age` from the dates and a unique `url` slug from the name
    async fn create_new(&self, actor: NewActor) -> Option<Actor>;

    async fn exists_with_same_params(&self, spec: Specification) -> bool;

    async fn get_by_parameter(&self, spec: Specification) -> Option<Actor>;

    async fn get_ordered(&self, spec: Specification) -> Vec<Actor>;

    async fn search_by_name(&self, name: &str) -> Vec<Actor>;

    async fn search_by_description(&self, description: &str) -> Vec<Actor>;

    /// Updates recompute `age` from the submitted dates
    async fn update(&self, id: i32, actor: NewActor) -> bool;

    async fn delete(&self, id: i32) -> bool;
}

#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn create_new(&self, genre: NewNamedSlug) -> Option<Genre>;

    async fn exists_with_same_params(&self, spec: Specification) -> bool;

    async fn get_by_parameter(&self, spec: Specification) -> Option<Genre>;

    async fn get_ordered(&self, spec: Specification) -> Vec<Genre>;

    /// Genres referenced by at least one published movie
    async fn genres_with_movies(&self) -> Vec<Genre>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_new(&self, category: NewNamedSlug) -> Option<Category>;

    async fn exists_with_same_params(&self, spec: Specification) -> bool;

    async fn get_by_parameter(&self, spec: Specification) -> Option<Category>;

    async fn get_ordered(&self, spec: Specification) -> Vec<Category>;

    /// Categories referenced by at least one movie
    async fn get_non_empty(&self) -> Vec<Category>;
}

#[async_trait]
pub trait MovieShotRepository: Send + Sync {
    async fn create_new(&self, shot: NewMovieShot) -> Option<MovieShot>;

    async fn for_movie(&self, movie_id: i32) -> Vec<MovieShot>;
}
