pub mod dto;
pub mod imdb_client;
pub mod retry;

pub use imdb_client::ImdbClient;
pub use retry::{RetryConfig, RetryUtil};
