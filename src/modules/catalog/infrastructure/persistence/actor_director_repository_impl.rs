use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use tokio::task;

use crate::log_error;
use crate::modules::catalog::domain::{
    entities::{Actor, NewActor},
    repositories::ActorDirectorRepository,
    specifications::{ParamValue, Specification},
};
use crate::modules::catalog::infrastructure::models::{ActorChangeset, ActorRow, NewActorRow};
use crate::modules::catalog::infrastructure::query::base_actor_director_ordering;
use crate::schema::actors;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{calculate_age, generate_unique_slug, slugify};
use crate::shared::Database;

type ActorCondition = Box<dyn BoxableExpression<actors::table, Pg, SqlType = Bool>>;

pub struct ActorDirectorRepositoryImpl {
    db: Arc<Database>,
}

impl ActorDirectorRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn actor_condition(params: &[(String, ParamValue)]) -> AppResult<ActorCondition> {
    let mut condition: Option<ActorCondition> = None;

    for (name, value) in params {
        let next: ActorCondition = match (name.as_str(), value) {
            ("pk" | "id", ParamValue::Int(id)) => Box::new(actors::id.eq(*id as i32)),
            ("name", ParamValue::Text(actor_name)) => {
                Box::new(actors::name.eq(actor_name.clone()))
            }
            ("url", ParamValue::Text(url)) => Box::new(actors::url.eq(url.clone())),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "Actor/director queries cannot filter by \"{}\"",
                    name
                )))
            }
        };
        condition = Some(match condition {
            Some(previous) => Box::new(previous.and(next)),
            None => next,
        });
    }

    condition.ok_or_else(|| AppError::InvalidInput("No one parameter was passed".to_string()))
}

impl ActorDirectorRepositoryImpl {
    async fn create_new_inner(&self, actor: NewActor) -> AppResult<Actor> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Actor> {
            let mut conn = db.get_connection()?;

            // Age follows the dates on every save; url only at creation
            let age = calculate_age(actor.birth_date, actor.death_date) as i16;
            let slug = slugify(&actor.name);
            let taken: i64 = actors::table
                .filter(actors::url.ilike(slug.clone()))
                .count()
                .get_result(&mut conn)?;
            let url = if taken > 0 {
                generate_unique_slug(&slug)
            } else {
                slug
            };

            let row: ActorRow = diesel::insert_into(actors::table)
                .values(NewActorRow::from_new(&actor, age, url))
                .get_result(&mut conn)?;
            Ok(row.into())
        })
        .await?
    }

    async fn exists_inner(&self, spec: Specification) -> AppResult<bool> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let condition = actor_condition(&params)?;
            let matching: i64 = actors::table
                .filter(condition)
                .count()
                .get_result(&mut conn)?;
            Ok(matching > 0)
        })
        .await?
    }

    async fn get_by_parameter_inner(&self, spec: Specification) -> AppResult<Option<Actor>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Actor>> {
            let mut conn = db.get_connection()?;
            let condition = actor_condition(&params)?;
            let row = actors::table
                .filter(condition)
                .first::<ActorRow>(&mut conn)
                .optional()?;
            Ok(row.map(ActorRow::into))
        })
        .await?
    }

    async fn get_ordered_inner(&self, spec: Specification) -> AppResult<Vec<Actor>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Actor>> {
            let mut conn = db.get_connection()?;
            let mut query = actors::table.into_boxed();
            for (name, _) in &params {
                let descending = name.starts_with('-');
                let bare = name.trim_start_matches('-');
                query = match (bare, descending) {
                    ("id", false) => query.order(actors::id.asc()),
                    ("id", true) => query.order(actors::id.desc()),
                    ("name", false) => query.order(actors::name.asc()),
                    ("name", true) => query.order(actors::name.desc()),
                    _ => {
                        return Err(AppError::InvalidInput(format!(
                            "Cannot order actors/directors by \"{}\"",
                            bare
                        )))
                    }
                };
            }
            let rows = query.load::<ActorRow>(&mut conn)?;
            Ok(rows.into_iter().map(ActorRow::into).collect())
        })
        .await?
    }

    async fn search_inner(&self, pattern: String, by_name: bool) -> AppResult<Vec<Actor>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Actor>> {
            let mut conn = db.get_connection()?;
            let query = if by_name {
                actors::table
                    .into_boxed()
                    .filter(actors::name.ilike(pattern))
            } else {
                actors::table
                    .into_boxed()
                    .filter(actors::description.ilike(pattern))
            };
            let rows = base_actor_director_ordering(query).load::<ActorRow>(&mut conn)?;
            Ok(rows.into_iter().map(ActorRow::into).collect())
        })
        .await?
    }
}

#[async_trait]
impl ActorDirectorRepository for ActorDirectorRepositoryImpl {
    async fn create_new(&self, actor: NewActor) -> Option<Actor> {
        match self.create_new_inner(actor).await {
            Ok(created) => Some(created),
            Err(e) => {
                log_error!("Failed to create actor/director: {}", e);
                None
            }
        }
    }

    async fn exists_with_same_params(&self, spec: Specification) -> bool {
        match self.exists_inner(spec).await {
            Ok(exists) => exists,
            Err(e) => {
                log_error!("Actor/director uniqueness check failed: {}", e);
                false
            }
        }
    }

    async fn get_by_parameter(&self, spec: Specification) -> Option<Actor> {
        match self.get_by_parameter_inner(spec).await {
            Ok(actor) => actor,
            Err(e) => {
                log_error!("Actor/director lookup failed: {}", e);
                None
            }
        }
    }

    async fn get_ordered(&self, spec: Specification) -> Vec<Actor> {
        match self.get_ordered_inner(spec).await {
            Ok(actors) => actors,
            Err(e) => {
                log_error!("Ordered actor/director listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn search_by_name(&self, name: &str) -> Vec<Actor> {
        let pattern = format!("%{}%", name);
        match self.search_inner(pattern, true).await {
            Ok(actors) => actors,
            Err(e) => {
                log_error!("Actor/director name search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn search_by_description(&self, description: &str) -> Vec<Actor> {
        let pattern = format!("%{}%", description);
        match self.search_inner(pattern, false).await {
            Ok(actors) => actors,
            Err(e) => {
                log_error!("Actor/director description search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn update(&self, id: i32, actor: NewActor) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let age = calculate_age(actor.birth_date, actor.death_date) as i16;
            Ok(diesel::update(actors::table.find(id))
                .set(ActorChangeset::from_new(&actor, age))
                .execute(&mut conn)?)
        })
        .await;
        match result {
            Ok(Ok(updated)) => updated > 0,
            Ok(Err(e)) => {
                log_error!("Failed to update actor/director {}: {}", id, e);
                false
            }
            Err(e) => {
                log_error!("Failed to update actor/director {}: {}", id, e);
                false
            }
        }
    }

    async fn delete(&self, id: i32) -> bool {
        let db = Arc::clone(&self.db);
        let result = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            Ok(diesel::delete(actors::table.find(id)).execute(&mut conn)?)
        })
        .await;
        match result {
            Ok(Ok(deleted)) => deleted > 0,
            Ok(Err(e)) => {
                log_error!("Failed to delete actor/director {}: {}", id, e);
                false
            }
            Err(e) => {
                log_error!("Failed to delete actor/director {}: {}", id, e);
                false
            }
        }
    }
}
