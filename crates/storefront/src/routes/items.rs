//! Item route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use goldstart_core::{Item, ItemFilter, ItemId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the item router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(show))
}

/// List items matching the query filters.
///
/// All filters are optional and combine per the catalog contract:
/// category and mark narrow by index, the search term narrows by
/// case-insensitive name substring.
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
