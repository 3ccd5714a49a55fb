use std::sync::Arc;

use crate::modules::catalog::domain::repositories::{ActorDirectorRepository, MovieRepository};

/// Deletes delegate straight to the repositories and report plain booleans.
/// Cache invalidation stays with the caller via `shared::cache::reset_cache`.
pub struct CatalogDeleteService {
    movie_repository: Arc<dyn MovieRepository>,
    actor_director_repository: Arc<dyn ActorDirectorRepository>,
}

impl CatalogDeleteService {
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        actor_director_repository: Arc<dyn ActorDirectorRepository>,
    ) -> Self {
        Self {
            movie_repository,
            actor_director_repository,
        }
    }

    pub async fn delete_movie(&self, movie_id: i32) -> bool {
        self.movie_repository.delete(movie_id).await
    }

    pub async fn delete_actor_director(&self, actor_id: i32) -> bool {
        self.actor_director_repository.delete(actor_id).await
    }
}
