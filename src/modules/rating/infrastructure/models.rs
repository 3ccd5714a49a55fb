use diesel::prelude::*;

use crate::log_warn;
use crate::modules::rating::domain::entities::{ExternalRating, ExternalScores, Rating, RatingStar};
use crate::schema::{other_sources_ratings, rating_stars, ratings};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = rating_stars)]
pub struct RatingStarRow {
    pub id: i32,
    pub value: i16,
}

#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = rating_stars)]
pub struct NewRatingStarRow {
    pub value: i16,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct RatingRow {
    pub id: i32,
    pub ip: String,
    pub star_id: i32,
    pub movie_id: i32,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = other_sources_ratings)]
pub struct OtherSourcesRatingRow {
    pub id: i32,
    pub rating: serde_json::Value,
    pub movie_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = other_sources_ratings)]
pub struct NewOtherSourcesRatingRow {
    pub rating: serde_json::Value,
    pub movie_id: i32,
}

impl From<RatingStarRow> for RatingStar {
    fn from(row: RatingStarRow) -> Self {
        RatingStar {
            id: row.id,
            value: row.value,
        }
    }
}

impl From<RatingRow> for Rating {
    fn from(row: RatingRow) -> Self {
        Rating {
            id: row.id,
            ip: row.ip,
            star_id: row.star_id,
            movie_id: row.movie_id,
        }
    }
}

impl OtherSourcesRatingRow {
    /// Decode the stored JSON document; a malformed blob degrades to defaults
    pub fn into_entity(self) -> ExternalRating {
        let scores = serde_json::from_value(self.rating.clone()).unwrap_or_else(|e| {
            log_warn!(
                "Stored external rating for movie {} is malformed: {}",
                self.movie_id,
                e
            );
            ExternalScores {
                imdb: "0".to_string(),
                metacritic: "0".to_string(),
                rotten_tomatoes: "0".to_string(),
            }
        });
        ExternalRating {
            id: self.id,
            movie_id: self.movie_id,
            scores,
        }
    }
}
