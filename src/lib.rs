pub mod modules;
mod schema;
pub mod shared;

pub use modules::catalog::{
    ActorDirectorCreation, CatalogDeleteService, CatalogReadService, CatalogUpdateService,
    CategoryCreation, GenreCreation, MovieCreation, MovieShotCreation,
};
pub use modules::rating::{ImdbClient, RatingService};
pub use modules::review::ReviewService;
pub use modules::watchlist::WatchlistService;
pub use shared::Database;

/// Load environment variables and initialize logging.
/// Call once at application startup, before building services.
pub fn init() {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();
}
