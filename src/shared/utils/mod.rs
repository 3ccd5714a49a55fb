pub mod dates;
pub mod logger;
pub mod rate_limiter;
pub mod slug;

pub use dates::{calculate_age, current_year};
pub use rate_limiter::RateLimiter;
pub use slug::{generate_unique_slug, slugify};
