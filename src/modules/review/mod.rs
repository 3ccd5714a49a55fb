pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ReviewService;
pub use domain::entities::{NewReview, Review};
pub use domain::repositories::ReviewRepository;
pub use domain::tree::{build_review_tree, ReviewNode};
