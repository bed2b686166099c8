//! Category route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use goldstart_core::{Category, CategoryId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(show))
}

/// Query parameters for listing categories.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// List categories ordered by name, optionally narrowed by a name
/// substring.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Category>>> {
    let categories = state
        .catalog()
        .list_categories(query.search.as_deref())
        .await?;
    Ok(Json(categories))
}

/// Category detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>> {
    let category = state
        .catalog()
        .get_category(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;
    Ok(Json(category))
}
