pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::WatchlistService;
pub use domain::entities::{UserProfile, WatchlistEntry};
pub use domain::repositories::WatchlistRepository;
