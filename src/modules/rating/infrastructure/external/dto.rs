use serde::Deserialize;

use crate::modules::rating::domain::entities::ExternalScores;

/// Response shape of the provider's movie search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ImdbSearchResponse {
    pub results: Option<Vec<ImdbSearchResult>>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImdbSearchResult {
    pub id: String,
    pub title: Option<String>,
}

/// Response shape of the provider's ratings endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ImdbRatingsResponse {
    #[serde(rename = "imDb")]
    pub imdb: Option<String>,
    pub metacritic: Option<String>,
    #[serde(rename = "rottenTomatoes")]
    pub rotten_tomatoes: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

impl ImdbRatingsResponse {
    /// Keep only the scores the catalog stores; absent values become "0"
    pub fn into_scores(self) -> ExternalScores {
        ExternalScores {
            imdb: self.imdb.filter(|s| !s.is_empty()).unwrap_or_else(zero),
            metacritic: self
                .metacritic
                .filter(|s| !s.is_empty())
                .unwrap_or_else(zero),
            rotten_tomatoes: self
                .rotten_tomatoes
                .filter(|s| !s.is_empty())
                .unwrap_or_else(zero),
        }
    }
}

fn zero() -> String {
    "0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scores_are_normalized_to_zero() {
        let response = ImdbRatingsResponse {
            imdb: Some("8.8".to_string()),
            metacritic: Some(String::new()),
            rotten_tomatoes: None,
            error_message: None,
        };
        let scores = response.into_scores();
        assert_eq!(scores.imdb, "8.8");
        assert_eq!(scores.metacritic, "0");
        assert_eq!(scores.rotten_tomatoes, "0");
    }
}
