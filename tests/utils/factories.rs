use chrono::NaiveDate;

use kinorate::modules::catalog::domain::entities::{Genre, Movie, MovieCard};
use kinorate::shared::forms::{FieldValue, Form, FormData};

pub fn movie(id: i32, title: &str, year: i16) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        tagline: "tagline".to_string(),
        description: "description".to_string(),
        poster: format!("movies/{}.jpg", id),
        year,
        country: "USA".to_string(),
        world_premiere: NaiveDate::from_ymd_opt(year as i32, 7, 16).unwrap(),
        budget: 160_000_000,
        fees_in_usa: 292_000_000,
        fees_in_world: 836_000_000,
        category_id: None,
        url: title.to_lowercase().replace(' ', "-"),
        draft: false,
        directors: Vec::new(),
        actors: Vec::new(),
        genres: Vec::new(),
    }
}

pub fn movie_card(title: &str) -> MovieCard {
    MovieCard {
        title: title.to_string(),
        tagline: "tagline".to_string(),
        poster: "poster.jpg".to_string(),
        url: title.to_lowercase().replace(' ', "-"),
    }
}

pub fn genre(id: i32, name: &str) -> Genre {
    Genre {
        id,
        name: name.to_string(),
        description: "description".to_string(),
        url: name.to_lowercase().replace(' ', "-"),
    }
}

/// Complete, well-typed movie form
pub fn movie_form(title: &str, premiere: NaiveDate) -> Form {
    let data = FormData::new()
        .with("title", FieldValue::text(title))
        .with("tagline", FieldValue::text("tagline"))
        .with("description", FieldValue::text("description"))
        .with("poster", FieldValue::text("movies/poster.jpg"))
        .with("country", FieldValue::text("USA"))
        .with("directors", FieldValue::Refs(vec![1]))
        .with("actors", FieldValue::Refs(vec![2, 3]))
        .with("genres", FieldValue::Refs(vec![4]))
        .with("world_premiere", FieldValue::Date(premiere))
        .with("budget", FieldValue::Int(160_000_000))
        .with("fees_in_usa", FieldValue::Int(292_000_000))
        .with("fees_in_world", FieldValue::Int(836_000_000))
        .with("category", FieldValue::OptionalRef(None))
        .with("draft", FieldValue::Bool(false));
    Form::new(data)
}

/// Complete, well-typed actor/director form
pub fn actor_form(name: &str, birth_date: NaiveDate, death_date: Option<NaiveDate>) -> Form {
    let data = FormData::new()
        .with("name", FieldValue::text(name))
        .with("birth_date", FieldValue::Date(birth_date))
        .with("death_date", FieldValue::OptionalDate(death_date))
        .with("description", FieldValue::text("description"))
        .with("image", FieldValue::text("actors/image.jpg"));
    Form::new(data)
}

/// Complete, well-typed category/genre form
pub fn named_slug_form(name: &str, url: &str) -> Form {
    let data = FormData::new()
        .with("name", FieldValue::text(name))
        .with("description", FieldValue::text("description"))
        .with("url", FieldValue::text(url));
    Form::new(data)
}

pub fn review_form(name: &str) -> Form {
    let data = FormData::new()
        .with("name", FieldValue::text(name))
        .with("email", FieldValue::text("viewer@example.com"))
        .with("text", FieldValue::text("Loved it."));
    Form::new(data)
}

pub fn rating_form(movie_id: i32, star_id: i32) -> Form {
    let data = FormData::new()
        .with("movie", FieldValue::Ref(movie_id))
        .with("star", FieldValue::Ref(star_id));
    Form::new(data)
}

pub fn rating_star_form(value: i64) -> Form {
    Form::new(FormData::new().with("value", FieldValue::Int(value)))
}
