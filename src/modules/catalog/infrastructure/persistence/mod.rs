mod actor_director_repository_impl;
mod category_repository_impl;
mod genre_repository_impl;
mod movie_repository_impl;
mod movie_shot_repository_impl;

pub use actor_director_repository_impl::ActorDirectorRepositoryImpl;
pub use category_repository_impl::CategoryRepositoryImpl;
pub use genre_repository_impl::GenreRepositoryImpl;
pub use movie_repository_impl::MovieRepositoryImpl;
pub use movie_shot_repository_impl::MovieShotRepositoryImpl;

pub(crate) use movie_repository_impl::load_movies_with_relations;
