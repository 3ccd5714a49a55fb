use std::sync::Arc;

use crate::log_error;
use crate::modules::catalog::domain::entities::{Movie, MovieCard};
use crate::modules::rating::domain::{
    entities::{ExternalScores, RatingStar},
    provider::RatingProvider,
    repositories::{OtherSourcesRatingRepository, RatingRepository, RatingStarRepository},
};
use crate::shared::forms::Form;

const RATING_STAR_FIELDS: &[&str] = &["value"];

/// Rating aggregation and external-rating synchronization.
pub struct RatingService {
    rating_repository: Arc<dyn RatingRepository>,
    rating_star_repository: Arc<dyn RatingStarRepository>,
    other_sources_repository: Arc<dyn OtherSourcesRatingRepository>,
    provider: Arc<dyn RatingProvider>,
}

impl RatingService {
    pub fn new(
        rating_repository: Arc<dyn RatingRepository>,
        rating_star_repository: Arc<dyn RatingStarRepository>,
        other_sources_repository: Arc<dyn OtherSourcesRatingRepository>,
        provider: Arc<dyn RatingProvider>,
    ) -> Self {
        Self {
            rating_repository,
            rating_star_repository,
            other_sources_repository,
            provider,
        }
    }

    /// Upsert the visitor's rating for a movie
    pub async fn update_or_create_rating(&self, form: &mut Form, ip: &str) -> bool {
        if !form.is_valid() {
            form.add_error(None, "Rating was marked incorrect");
            return false;
        }
        let (Some(movie_id), Some(star_id)) =
            (form.data.get_ref("movie"), form.data.get_ref("star"))
        else {
            form.add_error(None, "Rating was marked incorrect");
            return false;
        };

        if self
            .rating_repository
            .update_or_create(ip, movie_id, star_id)
            .await
        {
            return true;
        }
        form.add_error(None, "Rating was marked incorrect");
        false
    }

    /// The star value a visitor gave a movie, if any
    pub async fn user_rating(&self, ip: &str, movie_id: i32) -> Option<i16> {
        self.rating_repository.get_star_value(ip, movie_id).await
    }

    /// Remove the visitor's rating for a movie
    pub async fn delete_rating(&self, ip: &str, movie_id: i32) -> bool {
        self.rating_repository.delete(ip, movie_id).await
    }

    /// Mean star rating of a movie rounded to one decimal
    pub async fn average_movie_rating(&self, movie_id: i32) -> Option<f32> {
        self.rating_repository.average_for_movie(movie_id).await
    }

    /// Create a rating star; values live on a fixed 0–5 scale
    pub async fn create_rating_star(&self, form: &mut Form) -> bool {
        if !form.is_valid() {
            form.add_error(None, "The rating star form was filled out incorrectly");
            return false;
        }
        if form.data.len() != RATING_STAR_FIELDS.len() || !form.data.contains("value") {
            form.add_error(None, "The rating star form was filled out incorrectly");
            return false;
        }
        let Some(value) = form.data.get_int("value") else {
            form.add_error(None, "The rating star form was filled out incorrectly");
            return false;
        };
        if !(0..=5).contains(&value) {
            let message = format!(
                "Rating star must be between 0 and 5 but you passed {}",
                value
            );
            form.add_error(Some("value"), message);
            return false;
        }

        if self
            .rating_star_repository
            .create_new(value as i16)
            .await
            .is_some()
        {
            return true;
        }
        form.add_error(
            None,
            "An error occurred while adding a new record on the server",
        );
        false
    }

    pub async fn all_rating_stars(&self) -> Vec<RatingStar> {
        self.rating_star_repository.get_all().await
    }

    /// Read path for a movie's third-party scores with lazy population.
    ///
    /// A stored row is always served as-is; only a read miss triggers the
    /// provider fetch, and a failed fetch leaves the movie without external
    /// ratings rather than surfacing an error.
    pub async fn external_rating(&self, movie: &Movie) -> Option<ExternalScores> {
        if let Some(stored) = self.other_sources_repository.get_by_movie(movie.id).await {
            return Some(stored.scores);
        }

        if self.populate_external_rating(&movie.title, movie.id).await {
            self.other_sources_repository
                .get_by_movie(movie.id)
                .await
                .map(|rating| rating.scores)
        } else {
            None
        }
    }

    /// Stored scores only, no fetch
    pub async fn stored_external_rating(&self, movie_id: i32) -> Option<ExternalScores> {
        self.other_sources_repository
            .get_by_movie(movie_id)
            .await
            .map(|rating| rating.scores)
    }

    /// Fetch the movie's scores from the provider and persist them.
    ///
    /// Failures are logged and reported as `false`; callers treat the fetch
    /// as a non-fatal side effect.
    pub async fn populate_external_rating(&self, title: &str, movie_id: i32) -> bool {
        match self.provider.fetch_rating(title).await {
            Ok(scores) => {
                self.other_sources_repository
                    .create_new(movie_id, &scores)
                    .await
            }
            Err(e) => {
                log_error!("External rating fetch for \"{}\" failed: {}", title, e);
                false
            }
        }
    }

    /// Backfill the external rating after a movie update if none is stored yet
    pub async fn backfill_external_rating(&self, title: &str, movie_id: i32) {
        if self.stored_external_rating(movie_id).await.is_none() {
            self.populate_external_rating(title, movie_id).await;
        }
    }

    /// Movie cards ordered by the stored IMDb score
    pub async fn movie_cards_sorted_by_imdb(&self, descending: bool) -> Vec<MovieCard> {
        self.other_sources_repository
            .movie_cards_sorted_by_imdb(descending)
            .await
    }
}
