//! Item administration handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use goldstart_core::{Item, ItemFilter, ItemId, ItemInput};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the item router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(remove))
}

/// List items matching the query filters.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ItemFilter>,
) -> Result<Json<Vec<Item>>> {
    let items = state.catalog().list_items(&filter).await?;
    Ok(Json(items))
}

/// Item detail.
pub async fn show(State(state): State<AppState>, Path(id): Path<ItemId>) -> Result<Json<Item>> {
    let item = state
        .catalog()
        .get_item(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {id}")))?;
    Ok(Json(item))
}

/// Create an item; responds 201 with the stored entity.
///
/// The store validates references and required fields; a rejected write
/// surfaces as 422.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<Item>)> {
    let item = state.catalog().create_item(&input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item's fields (full replace); 404 when the id does not
/// exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>> {
    let item = state.catalog().update_item(&id, &input).await?;
    Ok(Json(item))
}

/// Remove an item; 404 when the id does not exist.
pub async fn remove(State(state): State<AppState>, Path(id): Path<ItemId>) -> Result<StatusCode> {
    state.catalog().remove_item(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
