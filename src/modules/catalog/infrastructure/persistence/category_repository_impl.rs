use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use tokio::task;

use crate::log_error;
use crate::modules::catalog::domain::{
    entities::{Category, NewNamedSlug},
    repositories::CategoryRepository,
    specifications::{ParamValue, Specification},
};
use crate::modules::catalog::infrastructure::models::{CategoryRow, NewCategoryRow};
use crate::schema::{categories, movies};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

type CategoryCondition = Box<dyn BoxableExpression<categories::table, Pg, SqlType = Bool>>;

pub struct CategoryRepositoryImpl {
    db: Arc<Database>,
}

impl CategoryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn category_condition(params: &[(String, ParamValue)]) -> AppResult<CategoryCondition> {
    let mut condition: Option<CategoryCondition> = None;

    for (name, value) in params {
        let next: CategoryCondition = match (name.as_str(), value) {
            ("pk" | "id", ParamValue::Int(id)) => Box::new(categories::id.eq(*id as i32)),
            ("name", ParamValue::Text(category_name)) => {
                Box::new(categories::name.eq(category_name.clone()))
            }
            ("url", ParamValue::Text(url)) => Box::new(categories::url.eq(url.clone())),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "Category queries cannot filter by \"{}\"",
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

impl CategoryRepositoryImpl {
    async fn create_new_inner(&self, category: NewNamedSlug) -> AppResult<Category> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> AppResult<Category> {
            let mut conn = db.get_connection()?;
            let row: CategoryRow = diesel::insert_into(categories::table)
                .values(NewCategoryRow::from(&category))
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
            let condition = category_condition(&params)?;
            let matching: i64 = categories::table
                .filter(condition)
                .count()
                .get_result(&mut conn)?;
            Ok(matching > 0)
        })
        .await?
    }

    async fn get_by_parameter_inner(&self, spec: Specification) -> AppResult<Option<Category>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Category>> {
            let mut conn = db.get_connection()?;
            let condition = category_condition(&params)?;
            let row = categories::table
                .filter(condition)
                .first::<CategoryRow>(&mut conn)
                .optional()?;
            Ok(row.map(CategoryRow::into))
        })
        .await?
    }

    async fn get_ordered_inner(&self, spec: Specification) -> AppResult<Vec<Category>> {
        let params = spec
            .is_satisfied()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .to_vec();
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Category>> {
            let mut conn = db.get_connection()?;
            let mut query = categories::table.into_boxed();
            for (name, _) in &params {
                let descending = name.starts_with('-');
                let bare = name.trim_start_matches('-');
                query = match (bare, descending) {
                    ("id", false) => query.order(categories::id.asc()),
                    ("id", true) => query.order(categories::id.desc()),
                    ("name", false) => query.order(categories::name.asc()),
                    ("name", true) => query.order(categories::name.desc()),
                    _ => {
                        return Err(AppError::InvalidInput(format!(
                            "Cannot order categories by \"{}\"",
                            bare
                        )))
                    }
                };
            }
            let rows = query.load::<CategoryRow>(&mut conn)?;
            Ok(rows.into_iter().map(CategoryRow::into).collect())
        })
        .await?
    }

    async fn get_non_empty_inner(&self) -> AppResult<Vec<Category>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> AppResult<Vec<Category>> {
            let mut conn = db.get_connection()?;
            let referenced = movies::table
                .filter(movies::category_id.is_not_null())
                .select(movies::category_id.assume_not_null());
            let rows = categories::table
                .filter(categories::id.eq_any(referenced))
                .order(categories::id.asc())
                .load::<CategoryRow>(&mut conn)?;
            Ok(rows.into_iter().map(CategoryRow::into).collect())
        })
        .await?
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn create_new(&self, category: NewNamedSlug) -> Option<Category> {
        match self.create_new_inner(category).await {
            Ok(created) => Some(created),
            Err(e) => {
                log_error!("Failed to create category: {}", e);
                None
            }
        }
    }

    async fn exists_with_same_params(&self, spec: Specification) -> bool {
        match self.exists_inner(spec).await {
            Ok(exists) => exists,
            Err(e) => {
                log_error!("Category uniqueness check failed: {}", e);
                false
            }
        }
    }

    async fn get_by_parameter(&self, spec: Specification) -> Option<Category> {
        match self.get_by_parameter_inner(spec).await {
            Ok(category) => category,
            Err(e) => {
                log_error!("Category lookup failed: {}", e);
                None
            }
        }
    }

    async fn get_ordered(&self, spec: Specification) -> Vec<Category> {
        match self.get_ordered_inner(spec).await {
            Ok(categories) => categories,
            Err(e) => {
                log_error!("Ordered category listing failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn get_non_empty(&self) -> Vec<Category> {
        match self.get_non_empty_inner().await {
            Ok(categories) => categories,
            Err(e) => {
                log_error!("Non-empty category listing failed: {}", e);
                Vec::new()
            }
        }
    }
}
