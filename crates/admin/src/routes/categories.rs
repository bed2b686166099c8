//! Category administration handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use goldstart_core::{Category, CategoryId, CategoryInput};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(remove))
}

/// Query parameters for listing categories.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// List categories ordered by name.
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

/// Create a category; responds 201 with the stored entity.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = state.catalog().create_category(&input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Replace a category's fields; 404 when the id does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<Category>> {
    let category = state.catalog().update_category(&id, &input).await?;
    Ok(Json(category))
}

/// Remove a category; 404 when the id does not exist. Items referencing
/// the category keep their (now dangling) reference.
pub async fn remove(State(state): State<AppState>, Path(id): Path<CategoryId>) -> Result<StatusCode> {
    state.catalog().remove_category(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
