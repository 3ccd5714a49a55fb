mod other_sources_rating_repository_impl;
mod rating_repository_impl;
mod rating_star_repository_impl;

pub use other_sources_rating_repository_impl::OtherSourcesRatingRepositoryImpl;
pub use rating_repository_impl::RatingRepositoryImpl;
pub use rating_star_repository_impl::RatingStarRepositoryImpl;
