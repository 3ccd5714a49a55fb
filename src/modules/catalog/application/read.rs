use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::modules::catalog::domain::{
    entities::{Actor, Category, Genre, Movie, MovieCard, MovieShot},
    repositories::{
        ActorDirectorRepository, CategoryRepository, GenreRepository, MovieRepository,
        MovieShotRepository,
    },
    specifications::{ParamValue, Specification},
};
use crate::modules::rating::domain::repositories::OtherSourcesRatingRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::cache::{self, keys, Cache};

/// How many random genres/years the front page shows
const SAMPLE_SIZE: usize = 7;
const RECENT_MOVIES_DEFAULT: i64 = 5;

/// Catalog read paths, with the short-TTL memoization for the expensive
/// aggregate queries. The cache collaborator is injected, never ambient.
pub struct CatalogReadService {
    movie_repository: Arc<dyn MovieRepository>,
    actor_director_repository: Arc<dyn ActorDirectorRepository>,
    genre_repository: Arc<dyn GenreRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    movie_shot_repository: Arc<dyn MovieShotRepository>,
    other_sources_repository: Arc<dyn OtherSourcesRatingRepository>,
    cache: Arc<dyn Cache>,
}

/// Result of the shared search box: one entity kind per query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    Movies(Vec<Movie>),
    ActorsDirectors(Vec<Actor>),
}

impl CatalogReadService {
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        actor_director_repository: Arc<dyn ActorDirectorRepository>,
        genre_repository: Arc<dyn GenreRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        movie_shot_repository: Arc<dyn MovieShotRepository>,
        other_sources_repository: Arc<dyn OtherSourcesRatingRepository>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            movie_repository,
            actor_director_repository,
            genre_repository,
            category_repository,
            movie_shot_repository,
            other_sources_repository,
            cache,
        }
    }

    // ---------------- ordered listings ----------------

    pub async fn movies_ordered_by(&self, parameter: &str) -> Vec<Movie> {
        self.movie_repository
            .get_ordered(Specification::order_by(parameter))
            .await
    }

    pub async fn actors_directors_ordered_by(&self, parameter: &str) -> Vec<Actor> {
        self.actor_director_repository
            .get_ordered(Specification::order_by(parameter))
            .await
    }

    pub async fn genres_ordered_by(&self, parameter: &str) -> Vec<Genre> {
        self.genre_repository
            .get_ordered(Specification::order_by(parameter))
            .await
    }

    pub async fn categories_ordered_by(&self, parameter: &str) -> Vec<Category> {
        self.category_repository
            .get_ordered(Specification::order_by(parameter))
            .await
    }

    pub async fn non_empty_categories(&self) -> Vec<Category> {
        // Cheap query, deliberately uncached
        self.category_repository.get_non_empty().await
    }

    // ---------------- detail lookups ----------------

    pub async fn movie_by_url(&self, url: &str) -> Option<Movie> {
        let spec = Specification::by_parameter().with("url", ParamValue::text(url));
        self.movie_repository.get_by_parameter(spec).await
    }

    pub async fn movie_by_parameters(&self, spec: Specification) -> Option<Movie> {
        self.movie_repository.get_by_parameter(spec).await
    }

    pub async fn actor_director_by_url(&self, url: &str) -> Option<Actor> {
        let spec = Specification::by_parameter().with("url", ParamValue::text(url));
        self.actor_director_repository.get_by_parameter(spec).await
    }

    pub async fn category_movies(&self, category_url: &str) -> Vec<Movie> {
        self.movie_repository.by_category_url(category_url).await
    }

    pub async fn genre_movies(&self, genre_url: &str) -> Vec<Movie> {
        self.movie_repository.by_genre_url(genre_url).await
    }

    pub async fn movie_shots(&self, movie_id: i32) -> Vec<MovieShot> {
        self.movie_shot_repository.for_movie(movie_id).await
    }

    // ---------------- cached aggregates ----------------

    /// A random sample of genres that have published movies (60 s cache)
    pub async fn random_genres(&self) -> Vec<Genre> {
        if let Some(genres) = cache::get_json(self.cache.as_ref(), keys::CACHE_FOR_GENRES) {
            return genres;
        }

        let mut genres = self.genre_repository.genres_with_movies().await;
        genres.shuffle(&mut rand::thread_rng());
        genres.truncate(SAMPLE_SIZE);

        cache::set_json(
            self.cache.as_ref(),
            keys::CACHE_FOR_GENRES,
            &genres,
            keys::CACHE_TTL,
        );
        genres
    }

    /// A random sample of release years, ascending (60 s cache)
    pub async fn random_years(&self) -> Vec<i16> {
        if let Some(years) = cache::get_json(self.cache.as_ref(), keys::CACHE_FOR_YEARS) {
            return years;
        }

        let mut years = self.movie_repository.distinct_years().await;
        years.shuffle(&mut rand::thread_rng());
        years.truncate(SAMPLE_SIZE);
        years.sort_unstable();

        cache::set_json(
            self.cache.as_ref(),
            keys::CACHE_FOR_YEARS,
            &years,
            keys::CACHE_TTL,
        );
        years
    }

    /// Most recently added movies (60 s cache)
    pub async fn most_recently_added_movies(&self) -> Vec<Movie> {
        if let Some(movies) = cache::get_json(self.cache.as_ref(), keys::CACHE_FOR_NEW_MOVIES) {
            return movies;
        }

        let movies = self
            .movie_repository
            .get_most_recently_added(RECENT_MOVIES_DEFAULT)
            .await;

        cache::set_json(
            self.cache.as_ref(),
            keys::CACHE_FOR_NEW_MOVIES,
            &movies,
            keys::CACHE_TTL,
        );
        movies
    }

    // ---------------- filtering / sorting / search ----------------

    /// Year/genre filter. Both lists filled means AND semantics, except the
    /// `0` sentinel in both, which shows everything; otherwise OR semantics.
    pub async fn filtered_movies(&self, years: &[i16], genre_ids: &[i32]) -> Vec<MovieCard> {
        if !years.is_empty() && !genre_ids.is_empty() {
            if years[0] == 0 && genre_ids[0] == 0 {
                return self.movie_repository.all_cards().await;
            }
            return self
                .movie_repository
                .filter_by_years_and_genres(years, genre_ids)
                .await;
        }
        self.movie_repository
            .filter_by_years_or_genres(years, genre_ids)
            .await
    }

    /// Sorted card listings keyed by the form's sorting selector
    pub async fn sorted_movies(&self, sorting: &str, sorting_order: &str) -> Vec<MovieCard> {
        let ascending = sorting_order == "ascending";
        match sorting {
            "1" => {
                self.other_sources_repository
                    .movie_cards_sorted_by_imdb(!ascending)
                    .await
            }
            "4" => {
                let mut cards = self.movie_repository.all_cards().await;
                cards.shuffle(&mut rand::thread_rng());
                cards
            }
            other => {
                let parameter = match (other, ascending) {
                    ("2", true) => "world_premiere",
                    ("2", false) => "-world_premiere",
                    ("3", true) => "title",
                    ("3", false) => "-title",
                    ("5", true) => "id",
                    ("5", false) => "-id",
                    _ => return Vec::new(),
                };
                self.movie_repository
                    .cards_ordered_by(Specification::order_by(parameter))
                    .await
            }
        }
    }

    /// Search movies by title, falling back to description matches
    pub async fn search_movies(&self, parameter: &str) -> Vec<Movie> {
        let movies = self.movie_repository.search_by_title(parameter).await;
        if !movies.is_empty() {
            return movies;
        }
        self.movie_repository.search_by_description(parameter).await
    }

    /// Search actors/directors by name, falling back to description matches
    pub async fn search_actors_directors(&self, parameter: &str) -> Vec<Actor> {
        let found = self
            .actor_director_repository
            .search_by_name(parameter)
            .await;
        if !found.is_empty() {
            return found;
        }
        self.actor_director_repository
            .search_by_description(parameter)
            .await
    }

    /// Dispatch the shared search box; unknown kinds search movies
    pub async fn search(&self, search_element: &str, parameter: &str) -> SearchResults {
        match search_element.to_lowercase().as_str() {
            "actors/directors" => {
                SearchResults::ActorsDirectors(self.search_actors_directors(parameter).await)
            }
            _ => SearchResults::Movies(self.search_movies(parameter).await),
        }
    }

    // ---------------- projections / sampling ----------------

    pub async fn unique_countries(&self) -> Vec<String> {
        self.movie_repository
            .unique_values(Specification::unique_values("country"))
            .await
    }

    /// Pseudo-random sample of published movies, optionally constrained
    pub async fn random_movies(
        &self,
        movies_number: usize,
        genre_ids: &[i32],
        countries: &[String],
        year_range: Option<(i16, i16)>,
    ) -> Vec<Movie> {
        let pks = if genre_ids.is_empty() && countries.is_empty() && year_range.is_none() {
            self.movie_repository.all_available_pks().await
        } else {
            self.movie_repository
                .pks_filtered(genre_ids, countries, year_range)
                .await
        };

        let mut rng = rand::thread_rng();
        let chosen: Vec<i32> = pks
            .choose_multiple(&mut rng, movies_number)
            .copied()
            .collect();

        if chosen.is_empty() {
            return Vec::new();
        }
        self.movie_repository.by_pks(&chosen).await
    }

    pub async fn movie_count(&self) -> i64 {
        self.movie_repository.count().await
    }

    /// One page of published movie cards in the API's envelope shape
    pub async fn movie_cards_page(&self, params: PaginationParams) -> PaginatedResult<MovieCard> {
        let total = self.movie_repository.count().await.max(0) as u64;
        let cards = self
            .movie_repository
            .cards_page(params.offset(), params.limit())
            .await;
        PaginatedResult::new(cards, total, &params)
    }
}
