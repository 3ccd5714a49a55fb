use async_trait::async_trait;

use super::entities::ExternalScores;
use crate::shared::errors::AppResult;

/// External rating source collaborator.
///
/// Implementations own their transport, retry and rate-limiting concerns;
/// callers treat any error as "no external rating available".
#[async_trait]
pub trait RatingProvider: Send + Sync {
    async fn fetch_rating(&self, movie_title: &str) -> AppResult<ExternalScores>;
}
