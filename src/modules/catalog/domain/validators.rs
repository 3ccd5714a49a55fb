use chrono::Datelike;
use regex::Regex;
use std::sync::Arc;

use crate::log_debug;
use crate::shared::forms::Form;
use crate::shared::utils::calculate_age;

use super::repositories::{
    ActorDirectorRepository, CategoryRepository, GenreRepository, MovieRepository,
    MovieShotRepository,
};
use super::specifications::{ParamValue, Specification};

const ACTOR_DIRECTOR_FIELDS: &[&str] = &["name", "birth_date", "death_date", "description", "image"];
const CATEGORY_FIELDS: &[&str] = &["name", "description", "url"];
const GENRE_FIELDS: &[&str] = &["name", "description", "url"];
const MOVIE_FIELDS: &[&str] = &[
    "title",
    "tagline",
    "description",
    "poster",
    "country",
    "directors",
    "actors",
    "genres",
    "world_premiere",
    "budget",
    "fees_in_usa",
    "fees_in_world",
    "category",
    "draft",
];
const MOVIE_SHOT_FIELDS: &[&str] = &["title", "description", "image", "movie"];

const SLUG_PATTERN: &str = r"^[-a-zA-Z0-9_]+$";

/// Exact field-set match: both missing and extra fields are rejected
fn are_all_fields_in_form(fields: &[&str], form: &mut Form) -> bool {
    if form.data.len() != fields.len() || !fields.iter().all(|field| form.data.contains(field)) {
        form.add_error(None, "Mismatch filled fields");
        return false;
    }
    true
}

/// A slug field must stay URL-safe even though the boundary already ran
/// widget-level validation
fn is_url_slug_valid(form: &mut Form) -> bool {
    let re = Regex::new(SLUG_PATTERN).unwrap();
    match form.data.get_text("url").map(str::to_string) {
        Some(url) if re.is_match(&url) => true,
        Some(url) => {
            let message = format!("Url \"{}\" contains invalid characters", url);
            form.add_error(Some("url"), message);
            false
        }
        None => {
            form.add_error(Some("url"), "Url must be a text value");
            false
        }
    }
}

fn is_age_valid(age: i32) -> bool {
    (0..=130).contains(&age)
}

/// Validation for actor/director submissions
pub struct ActorDirectorValidator {
    repository: Arc<dyn ActorDirectorRepository>,
    creation: bool,
}

impl ActorDirectorValidator {
    pub fn new(repository: Arc<dyn ActorDirectorRepository>, creation: bool) -> Self {
        Self {
            repository,
            creation,
        }
    }

    pub async fn can_be_saved(&self, form: &mut Form) -> bool {
        if !form.is_valid() {
            return false;
        }
        if !are_all_fields_in_form(ACTOR_DIRECTOR_FIELDS, form) {
            return false;
        }

        let (Some(birth_date), Some(death_date)) = (
            form.data.get_date("birth_date"),
            form.data.get_optional_date("death_date"),
        ) else {
            form.add_error(None, "Mismatch filled fields");
            return false;
        };

        let age = calculate_age(birth_date, death_date);
        if !is_age_valid(age) {
            let message = format!("Age must be between 0 and 130, but got: {}", age);
            form.add_error(Some("birth_date"), message);
            return false;
        }

        if self.creation {
            let Some(name) = form.data.get_text("name").map(str::to_string) else {
                form.add_error(None, "Mismatch filled fields");
                return false;
            };
            let spec = Specification::same_object().with("name", ParamValue::text(&name));
            if self.repository.exists_with_same_params(spec).await {
                let message = format!("Name \"{}\" already exists", name);
                form.add_error(Some("name"), message);
                return false;
            }
        }
        true
    }
}

/// Validation for category submissions
pub struct CategoryValidator {
    repository: Arc<dyn CategoryRepository>,
    creation: bool,
}

impl CategoryValidator {
    pub fn new(repository: Arc<dyn CategoryRepository>, creation: bool) -> Self {
        Self {
            repository,
            creation,
        }
    }

    pub async fn can_be_saved(&self, form: &mut Form) -> bool {
        if !form.is_valid() {
            return false;
        }
        if !are_all_fields_in_form(CATEGORY_FIELDS, form) {
            return false;
        }
        if !is_url_slug_valid(form) {
            return false;
        }

        if self.creation {
            let name = form.data.get_text("name").unwrap_or_default().to_string();
            let spec = Specification::same_object().with("name", ParamValue::text(&name));
            if self.repository.exists_with_same_params(spec).await {
                let message = format!("Name \"{}\" already exists", name);
                form.add_error(Some("name"), message);
                return false;
            }

            let url = form.data.get_text("url").unwrap_or_default().to_string();
            let spec = Specification::same_object().with("url", ParamValue::text(&url));
            if self.repository.exists_with_same_params(spec).await {
                let message = format!("Url \"{}\" already exists", url);
                form.add_error(Some("url"), message);
                return false;
            }
        }
        true
    }
}

/// Validation for genre submissions
pub struct GenreValidator {
    repository: Arc<dyn GenreRepository>,
    creation: bool,
}

impl GenreValidator {
    pub fn new(repository: Arc<dyn GenreRepository>, creation: bool) -> Self {
        Self {
            repository,
            creation,
        }
    }

    pub async fn can_be_saved(&self, form: &mut Form) -> bool {
        if !form.is_valid() {
            return false;
        }
        if !are_all_fields_in_form(GENRE_FIELDS, form) {
            return false;
        }
        if !is_url_slug_valid(form) {
            return false;
        }

        if self.creation {
            let name = form.data.get_text("name").unwrap_or_default().to_string();
            let spec = Specification::same_object().with("name", ParamValue::text(&name));
            if self.repository.exists_with_same_params(spec).await {
                let message = format!("Name \"{}\" already exists", name);
                form.add_error(Some("name"), message);
                return false;
            }

            let url = form.data.get_text("url").unwrap_or_default().to_string();
            let spec = Specification::same_object().with("url", ParamValue::text(&url));
            if self.repository.exists_with_same_params(spec).await {
                let message = format!("Url \"{}\" already exists", url);
                form.add_error(Some("url"), message);
                return false;
            }
        }
        true
    }
}

/// Validation for movie submissions
pub struct MovieValidator {
    repository: Arc<dyn MovieRepository>,
    creation: bool,
}

impl MovieValidator {
    pub fn new(repository: Arc<dyn MovieRepository>, creation: bool) -> Self {
        Self {
            repository,
            creation,
        }
    }

    pub async fn can_be_saved(&self, form: &mut Form) -> bool {
        if !form.is_valid() {
            return false;
        }
        if !are_all_fields_in_form(MOVIE_FIELDS, form) {
            return false;
        }

        // The premiere date carries the release year
        let Some(world_premiere) = form.data.get_date("world_premiere") else {
            form.add_error(None, "Mismatch filled fields");
            return false;
        };
        let year = world_premiere.year() as i64;

        if self.creation {
            let Some(title) = form.data.get_text("title").map(str::to_string) else {
                form.add_error(None, "Mismatch filled fields");
                return false;
            };
            let spec = Specification::same_object()
                .with("title", ParamValue::text(&title))
                .with("year", ParamValue::Int(year));
            if self.repository.exists_with_same_params(spec).await {
                let message = format!(
                    "Movie with title: \"{}\" and year: \"{}\" already exists",
                    title, year
                );
                form.add_error(Some("title"), message);
                return false;
            }
            log_debug!("Movie \"{}\" ({}) passed uniqueness check", title, year);
        }
        true
    }
}

/// Validation for movie-shot submissions
pub struct MovieShotValidator {
    #[allow(dead_code)]
    repository: Arc<dyn MovieShotRepository>,
}

impl MovieShotValidator {
    pub fn new(repository: Arc<dyn MovieShotRepository>) -> Self {
        Self { repository }
    }

    pub async fn can_be_saved(&self, form: &mut Form) -> bool {
        if !form.is_valid() {
            return false;
        }
        are_all_fields_in_form(MOVIE_SHOT_FIELDS, form)
    }
}
