use serde::{Deserialize, Serialize};

/// A selectable star on the fixed 0–5 scale; values are unique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingStar {
    pub id: i32,
    pub value: i16,
}

/// One visitor's rating of one movie, keyed by (ip, movie)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i32,
    pub ip: String,
    pub star_id: i32,
    pub movie_id: i32,
}

/// Third-party scores fetched once per movie and stored as a JSON document.
/// Field names follow the stored wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalScores {
    #[serde(rename = "imDb", default = "zero_score")]
    pub imdb: String,
    #[serde(default = "zero_score")]
    pub metacritic: String,
    #[serde(rename = "rottenTomatoes", default = "zero_score")]
    pub rotten_tomatoes: String,
}

fn zero_score() -> String {
    "0".to_string()
}

impl ExternalScores {
    /// The IMDb score as a number, for rating-ordered listings
    pub fn imdb_value(&self) -> f64 {
        self.imdb.parse().unwrap_or(0.0)
    }
}

/// Stored third-party rating row for a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalRating {
    pub id: i32,
    pub movie_id: i32,
    pub scores: ExternalScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_deserialize_from_stored_wire_names() {
        let scores: ExternalScores = serde_json::from_str(
            r#"{"imDb": "8.8", "metacritic": "74", "rottenTomatoes": "87"}"#,
        )
        .unwrap();
        assert_eq!(scores.imdb, "8.8");
        assert_eq!(scores.rotten_tomatoes, "87");
        assert!((scores.imdb_value() - 8.8).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_scores_default_to_zero() {
        let scores: ExternalScores = serde_json::from_str(r#"{"imDb": "7.1"}"#).unwrap();
        assert_eq!(scores.metacritic, "0");
        assert_eq!(scores.rotten_tomatoes, "0");
    }
}
