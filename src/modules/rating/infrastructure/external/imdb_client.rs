use async_trait::async_trait;
use reqwest::Client;
use std::env;
use tracing::info;

use crate::modules::rating::domain::entities::ExternalScores;
use crate::modules::rating::domain::provider::RatingProvider;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;

use super::dto::{ImdbRatingsResponse, ImdbSearchResponse};
use super::retry::RetryUtil;

const DEFAULT_BASE_URL: &str = "https://imdb-api.com";

/// Client for the IMDb rating provider.
///
/// Resolving a title takes two calls: a search for the title id, then the
/// ratings document for that id. Both go through the shared retry budget.
pub struct ImdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    lang: String,
    rate_limiter: RateLimiter,
}

impl ImdbClient {
    pub fn new() -> AppResult<Self> {
        let api_key = env::var("IMDB_API_KEY").unwrap_or_else(|_| "default".to_string());
        Self::with_config(DEFAULT_BASE_URL, api_key, "en")
    }

    pub fn with_config(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        lang: impl Into<String>,
    ) -> AppResult<Self> {
        let client = RetryUtil::create_http_client(30, "kinorate/1.0")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            lang: lang.into(),
            // Free-tier allowance; burst of 2 keeps the two-call flow snappy
            rate_limiter: RateLimiter::new(1.0, 2),
        })
    }

    async fn fetch_movie_id(&self, movie_title: &str) -> AppResult<String> {
        self.rate_limiter.wait().await;

        let url = format!(
            "{}/{}/API/SearchMovie/{}/{}",
            self.base_url,
            self.lang,
            self.api_key,
            urlencoding::encode(movie_title)
        );
        let response =
            RetryUtil::execute_with_retry(|| self.client.get(&url).send(), "IMDb", "search movie")
                .await?;

        let search_response = response
            .json::<ImdbSearchResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse IMDb response: {}", e)))?;

        if let Some(message) = search_response.error_message.filter(|m| !m.is_empty()) {
            return Err(AppError::ApiError(format!("IMDb search error: {}", message)));
        }

        search_response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|result| result.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("No IMDb entry found for \"{}\"", movie_title))
            })
    }

    async fn fetch_ratings(&self, movie_id: &str) -> AppResult<ImdbRatingsResponse> {
        self.rate_limiter.wait().await;

        let url = format!(
            "{}/{}/API/Ratings/{}/{}",
            self.base_url,
            self.lang,
            self.api_key,
            urlencoding::encode(movie_id)
        );
        let response =
            RetryUtil::execute_with_retry(|| self.client.get(&url).send(), "IMDb", "get ratings")
                .await?;

        let ratings = response
            .json::<ImdbRatingsResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse IMDb response: {}", e)))?;

        if let Some(message) = ratings.error_message.clone().filter(|m| !m.is_empty()) {
            return Err(AppError::ApiError(format!(
                "IMDb ratings error: {}",
                message
            )));
        }

        Ok(ratings)
    }
}

#[async_trait]
impl RatingProvider for ImdbClient {
    async fn fetch_rating(&self, movie_title: &str) -> AppResult<ExternalScores> {
        let movie_id = self.fetch_movie_id(movie_title).await?;
        let ratings = self.fetch_ratings(&movie_id).await?;
        info!("Fetched external ratings for \"{}\"", movie_title);
        Ok(ratings.into_scores())
    }
}
