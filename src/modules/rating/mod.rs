pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::RatingService;
pub use domain::entities::{ExternalRating, ExternalScores, Rating, RatingStar};
pub use domain::provider::RatingProvider;
pub use domain::repositories::{
    OtherSourcesRatingRepository, RatingRepository, RatingStarRepository,
};
pub use infrastructure::external::ImdbClient;
