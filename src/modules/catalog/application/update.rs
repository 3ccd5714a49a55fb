use std::sync::Arc;

use crate::log_error;
use crate::modules::catalog::domain::{
    entities::{Actor, NewActor, NewMovie},
    repositories::{ActorDirectorRepository, MovieRepository},
    specifications::{ParamValue, Specification},
    validators::{ActorDirectorValidator, MovieValidator},
};
use crate::modules::rating::application::RatingService;
use crate::shared::forms::Form;

/// Movie and actor/director updates.
///
/// Natural-key uniqueness is not re-checked here; the validators run with
/// the creation flag off.
pub struct CatalogUpdateService {
    movie_repository: Arc<dyn MovieRepository>,
    actor_director_repository: Arc<dyn ActorDirectorRepository>,
    movie_validator: MovieValidator,
    actor_director_validator: ActorDirectorValidator,
    rating_service: Arc<RatingService>,
}

impl CatalogUpdateService {
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        actor_director_repository: Arc<dyn ActorDirectorRepository>,
        rating_service: Arc<RatingService>,
    ) -> Self {
        let movie_validator = MovieValidator::new(Arc::clone(&movie_repository), false);
        let actor_director_validator =
            ActorDirectorValidator::new(Arc::clone(&actor_director_repository), false);
        Self {
            movie_repository,
            actor_director_repository,
            movie_validator,
            actor_director_validator,
            rating_service,
        }
    }

    /// Update a movie and backfill its external rating when absent
    pub async fn update_movie(&self, movie_id: i32, form: &mut Form) -> bool {
        if !self.movie_validator.can_be_saved(form).await {
            return false;
        }
        let new_movie = match NewMovie::from_form(&form.data) {
            Ok(new_movie) => new_movie,
            Err(e) => {
                log_error!("Movie form extraction failed: {}", e);
                return false;
            }
        };

        if !self.movie_repository.update(movie_id, new_movie).await {
            return false;
        }
        self.update_other_sources_rating(form).await;
        true
    }

    /// Lazily create the external rating for the updated movie if it has none
    async fn update_other_sources_rating(&self, form: &Form) {
        let Some(title) = form.data.get_text("title").map(str::to_string) else {
            return;
        };
        let Some(world_premiere) = form.data.get_date("world_premiere") else {
            return;
        };

        let spec = Specification::by_parameter()
            .with("title", ParamValue::text(&title))
            .with("world_premiere", ParamValue::Date(world_premiere));
        if let Some(movie) = self.movie_repository.get_by_parameter(spec).await {
            self.rating_service
                .backfill_external_rating(&title, movie.id)
                .await;
        }
    }

    pub async fn update_actor_director(&self, actor_id: i32, form: &mut Form) -> bool {
        if !self.actor_director_validator.can_be_saved(form).await {
            return false;
        }
        let new_actor = match NewActor::from_form(&form.data) {
            Ok(new_actor) => new_actor,
            Err(e) => {
                log_error!("Actor/director form extraction failed: {}", e);
                return false;
            }
        };
        self.actor_director_repository
            .update(actor_id, new_actor)
            .await
    }

    /// Recompute a single actor's age from the stored dates
    pub async fn update_actor_director_age(&self, actor_director: &Actor) -> bool {
        let new_actor = NewActor {
            name: actor_director.name.clone(),
            description: actor_director.description.clone(),
            image: actor_director.image.clone(),
            birth_date: actor_director.birth_date,
            death_date: actor_director.death_date,
        };
        self.actor_director_repository
            .update(actor_director.id, new_actor)
            .await
    }
}
