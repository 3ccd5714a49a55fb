use std::sync::Arc;

use crate::log_error;
use crate::modules::catalog::domain::{
    entities::{Actor, Movie, NewActor, NewMovie, NewMovieShot, NewNamedSlug},
    repositories::{
        ActorDirectorRepository, CategoryRepository, GenreRepository, MovieRepository,
        MovieShotRepository,
    },
    validators::{
        ActorDirectorValidator, CategoryValidator, GenreValidator, MovieShotValidator,
        MovieValidator,
    },
};
use crate::modules::rating::application::RatingService;
use crate::shared::forms::Form;

const SERVER_ERROR: &str = "An error occurred while adding a new record on the server";

/// Actor/director creation: validator then repository
pub struct ActorDirectorCreation {
    repository: Arc<dyn ActorDirectorRepository>,
    validator: ActorDirectorValidator,
}

impl ActorDirectorCreation {
    pub fn new(repository: Arc<dyn ActorDirectorRepository>) -> Self {
        let validator = ActorDirectorValidator::new(Arc::clone(&repository), true);
        Self {
            repository,
            validator,
        }
    }

    pub async fn create_actor_director(&self, form: &mut Form) -> Option<Actor> {
        if !self.validator.can_be_saved(form).await {
            return None;
        }
        let new_actor = match NewActor::from_form(&form.data) {
            Ok(new_actor) => new_actor,
            Err(e) => {
                log_error!("Actor/director form extraction failed: {}", e);
                form.add_error(None, SERVER_ERROR);
                return None;
            }
        };

        match self.repository.create_new(new_actor).await {
            Some(created) => Some(created),
            None => {
                form.add_error(None, SERVER_ERROR);
                None
            }
        }
    }
}

/// Category creation
pub struct CategoryCreation {
    repository: Arc<dyn CategoryRepository>,
    validator: CategoryValidator,
}

impl CategoryCreation {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        let validator = CategoryValidator::new(Arc::clone(&repository), true);
        Self {
            repository,
            validator,
        }
    }

    pub async fn create_category(&self, form: &mut Form) -> bool {
        if !self.validator.can_be_saved(form).await {
            return false;
        }
        let new_category = match NewNamedSlug::from_form(&form.data) {
            Ok(new_category) => new_category,
            Err(e) => {
                log_error!("Category form extraction failed: {}", e);
                form.add_error(None, SERVER_ERROR);
                return false;
            }
        };

        if self.repository.create_new(new_category).await.is_some() {
            return true;
        }
        form.add_error(None, SERVER_ERROR);
        false
    }
}

/// Genre creation
pub struct GenreCreation {
    repository: Arc<dyn GenreRepository>,
    validator: GenreValidator,
}

impl GenreCreation {
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        let validator = GenreValidator::new(Arc::clone(&repository), true);
        Self {
            repository,
            validator,
        }
    }

    pub async fn create_genre(&self, form: &mut Form) -> bool {
        if !self.validator.can_be_saved(form).await {
            return false;
        }
        let new_genre = match NewNamedSlug::from_form(&form.data) {
            Ok(new_genre) => new_genre,
            Err(e) => {
                log_error!("Genre form extraction failed: {}", e);
                form.add_error(None, SERVER_ERROR);
                return false;
            }
        };

        if self.repository.create_new(new_genre).await.is_some() {
            return true;
        }
        form.add_error(None, SERVER_ERROR);
        false
    }
}

/// Movie creation: validator, repository, then the external-rating side effect
pub struct MovieCreation {
    repository: Arc<dyn MovieRepository>,
    validator: MovieValidator,
    rating_service: Arc<RatingService>,
}

impl MovieCreation {
    pub fn new(repository: Arc<dyn MovieRepository>, rating_service: Arc<RatingService>) -> Self {
        let validator = MovieValidator::new(Arc::clone(&repository), true);
        Self {
            repository,
            validator,
            rating_service,
        }
    }

    pub async fn create_movie(&self, form: &mut Form) -> Option<Movie> {
        if !self.validator.can_be_saved(form).await {
            return None;
        }
        let new_movie = match NewMovie::from_form(&form.data) {
            Ok(new_movie) => new_movie,
            Err(e) => {
                log_error!("Movie form extraction failed: {}", e);
                form.add_error(None, SERVER_ERROR);
                return None;
            }
        };

        let created = match self.repository.create_new(new_movie).await {
            Some(created) => created,
            None => {
                form.add_error(None, SERVER_ERROR);
                return None;
            }
        };

        // A failed fetch must not fail the creation; the movie simply has
        // no external ratings yet
        self.rating_service
            .populate_external_rating(&created.title, created.id)
            .await;

        Some(created)
    }
}

/// Movie shot creation
pub struct MovieShotCreation {
    repository: Arc<dyn MovieShotRepository>,
    validator: MovieShotValidator,
}

impl MovieShotCreation {
    pub fn new(repository: Arc<dyn MovieShotRepository>) -> Self {
        let validator = MovieShotValidator::new(Arc::clone(&repository));
        Self {
            repository,
            validator,
        }
    }

    pub async fn create_movie_shot(&self, form: &mut Form) -> bool {
        if !self.validator.can_be_saved(form).await {
            return false;
        }
        let new_shot = match NewMovieShot::from_form(&form.data) {
            Ok(new_shot) => new_shot,
            Err(e) => {
                log_error!("Movie shot form extraction failed: {}", e);
                form.add_error(None, SERVER_ERROR);
                return false;
            }
        };

        if self.repository.create_new(new_shot).await.is_some() {
            return true;
        }
        form.add_error(None, SERVER_ERROR);
        false
    }
}
