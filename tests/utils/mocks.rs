use async_trait::async_trait;
use mockall::mock;

use kinorate::modules::catalog::domain::entities::{
    Actor, Category, Genre, Movie, MovieCard, MovieShot, NewActor, NewMovie, NewMovieShot,
    NewNamedSlug,
};
use kinorate::modules::catalog::domain::repositories::{
    ActorDirectorRepository, CategoryRepository, GenreRepository, MovieRepository,
    MovieShotRepository,
};
use kinorate::modules::catalog::domain::specifications::Specification;
use kinorate::modules::rating::domain::entities::{ExternalRating, ExternalScores, RatingStar};
use kinorate::modules::rating::domain::provider::RatingProvider;
use kinorate::modules::rating::domain::repositories::{
    OtherSourcesRatingRepository, RatingRepository, RatingStarRepository,
};
use kinorate::modules::review::domain::entities::{NewReview, Review};
use kinorate::modules::review::domain::repositories::ReviewRepository;
use kinorate::modules::watchlist::domain::entities::UserProfile;
use kinorate::modules::watchlist::domain::repositories::WatchlistRepository;
use kinorate::shared::errors::AppResult;

mock! {
    pub MovieRepo {}

    #[async_trait]
    impl MovieRepository for MovieRepo {
        async fn create_new(&self, movie: NewMovie) -> Option<Movie>;
        async fn exists_with_same_params(&self, spec: Specification) -> bool;
        async fn get_by_parameter(&self, spec: Specification) -> Option<Movie>;
        async fn get_ordered(&self, spec: Specification) -> Vec<Movie>;
        async fn get_most_recently_added(&self, number: i64) -> Vec<Movie>;
        async fn filter_by_years_or_genres(
            &self,
            years: &[i16],
            genre_ids: &[i32],
        ) -> Vec<MovieCard>;
        async fn filter_by_years_and_genres(
            &self,
            years: &[i16],
            genre_ids: &[i32],
        ) -> Vec<MovieCard>;
        async fn all_cards(&self) -> Vec<MovieCard>;
        async fn cards_ordered_by(&self, spec: Specification) -> Vec<MovieCard>;
        async fn cards_page(&self, offset: i64, limit: i64) -> Vec<MovieCard>;
        async fn search_by_title(&self, title: &str) -> Vec<Movie>;
        async fn search_by_description(&self, description: &str) -> Vec<Movie>;
        async fn by_category_url(&self, url: &str) -> Vec<Movie>;
        async fn by_genre_url(&self, url: &str) -> Vec<Movie>;
        async fn all_available_pks(&self) -> Vec<i32>;
        async fn pks_filtered(
            &self,
            genre_ids: &[i32],
            countries: &[String],
            year_range: Option<(i16, i16)>,
        ) -> Vec<i32>;
        async fn by_pks(&self, pks: &[i32]) -> Vec<Movie>;
        async fn unique_values(&self, spec: Specification) -> Vec<String>;
        async fn distinct_years(&self) -> Vec<i16>;
        async fn count(&self) -> i64;
        async fn update(&self, id: i32, movie: NewMovie) -> bool;
        async fn delete(&self, id: i32) -> bool;
    }
}

mock! {
    pub ActorDirectorRepo {}

    #[async_trait]
    impl ActorDirectorRepository for ActorDirectorRepo {
        async fn create_new(&self, actor: NewActor) -> Option<Actor>;
        async fn exists_with_same_params(&self, spec: Specification) -> bool;
        async fn get_by_parameter(&self, spec: Specification) -> Option<Actor>;
        async fn get_ordered(&self, spec: Specification) -> Vec<Actor>;
        async fn search_by_name(&self, name: &str) -> Vec<Actor>;
        async fn search_by_description(&self, description: &str) -> Vec<Actor>;
        async fn update(&self, id: i32, actor: NewActor) -> bool;
        async fn delete(&self, id: i32) -> bool;
    }
}

mock! {
    pub GenreRepo {}

    #[async_trait]
    impl GenreRepository for GenreRepo {
        async fn create_new(&self, genre: NewNamedSlug) -> Option<Genre>;
        async fn exists_with_same_params(&self, spec: Specification) -> bool;
        async fn get_by_parameter(&self, spec: Specification) -> Option<Genre>;
        async fn get_ordered(&self, spec: Specification) -> Vec<Genre>;
        async fn genres_with_movies(&self) -> Vec<Genre>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn create_new(&self, category: NewNamedSlug) -> Option<Category>;
        async fn exists_with_same_params(&self, spec: Specification) -> bool;
        async fn get_by_parameter(&self, spec: Specification) -> Option<Category>;
        async fn get_ordered(&self, spec: Specification) -> Vec<Category>;
        async fn get_non_empty(&self) -> Vec<Category>;
    }
}

mock! {
    pub MovieShotRepo {}

    #[async_trait]
    impl MovieShotRepository for MovieShotRepo {
        async fn create_new(&self, shot: NewMovieShot) -> Option<MovieShot>;
        async fn for_movie(&self, movie_id: i32) -> Vec<MovieShot>;
    }
}

mock! {
    pub RatingRepo {}

    #[async_trait]
    impl RatingRepository for RatingRepo {
        async fn update_or_create(&self, ip: &str, movie_id: i32, star_id: i32) -> bool;
        async fn get_star_value(&self, ip: &str, movie_id: i32) -> Option<i16>;
        async fn average_for_movie(&self, movie_id: i32) -> Option<f32>;
        async fn delete(&self, ip: &str, movie_id: i32) -> bool;
    }
}

mock! {
    pub RatingStarRepo {}

    #[async_trait]
    impl RatingStarRepository for RatingStarRepo {
        async fn create_new(&self, value: i16) -> Option<RatingStar>;
        async fn get_all(&self) -> Vec<RatingStar>;
    }
}

mock! {
    pub OtherSourcesRatingRepo {}

    #[async_trait]
    impl OtherSourcesRatingRepository for OtherSourcesRatingRepo {
        async fn get_by_movie(&self, movie_id: i32) -> Option<ExternalRating>;
        async fn create_new(&self, movie_id: i32, scores: &ExternalScores) -> bool;
        async fn movie_cards_sorted_by_imdb(&self, descending: bool) -> Vec<MovieCard>;
    }
}

mock! {
    pub Provider {}

    #[async_trait]
    impl RatingProvider for Provider {
        async fn fetch_rating(&self, movie_title: &str) -> AppResult<ExternalScores>;
    }
}

mock! {
    pub ReviewRepo {}

    #[async_trait]
    impl ReviewRepository for ReviewRepo {
        async fn create_new(&self, review: NewReview) -> Option<Review>;
        async fn for_movie(&self, movie_id: i32) -> Vec<Review>;
        async fn get_all(&self) -> Vec<Review>;
        async fn update(&self, id: i32, review: NewReview) -> bool;
        async fn delete(&self, id: i32) -> bool;
    }
}

mock! {
    pub WatchlistRepo {}

    #[async_trait]
    impl WatchlistRepository for WatchlistRepo {
        async fn get_profile(&self, user_id: i32) -> Option<UserProfile>;
        async fn create_profile(&self, user_id: i32) -> Option<UserProfile>;
        async fn add_movie(&self, user_profile_id: i32, movie_id: i32) -> bool;
        async fn user_movies(&self, user_profile_id: i32) -> Vec<Movie>;
        async fn recent_movies(&self, user_profile_id: i32, number: i64) -> Vec<Movie>;
        async fn contains_movie(&self, user_profile_id: i32, movie_id: i32) -> bool;
    }
}

/// External scores fixture
pub fn scores(imdb: &str) -> ExternalScores {
    ExternalScores {
        imdb: imdb.to_string(),
        metacritic: "74".to_string(),
        rotten_tomatoes: "87".to_string(),
    }
}
