pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::create::{
    ActorDirectorCreation, CategoryCreation, GenreCreation, MovieCreation, MovieShotCreation,
};
pub use application::delete::CatalogDeleteService;
pub use application::read::{CatalogReadService, SearchResults};
pub use application::update::CatalogUpdateService;
pub use domain::entities::{Actor, Category, Genre, Movie, MovieCard, MovieShot};
pub use domain::repositories::{
    ActorDirectorRepository, CategoryRepository, GenreRepository, MovieRepository,
    MovieShotRepository,
};
pub use domain::specifications::{ParamValue, ParameterError, Specification, SpecificationKind};
