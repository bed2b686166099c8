//! Mark (brand) route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use goldstart_core::{Mark, MarkId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the mark router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(show))
}

/// Query parameters for listing marks.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// List marks ordered by name, optionally narrowed by a name substring.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Mark>>> {
    let marks = state.catalog().list_marks(query.search.as_deref()).await?;
    Ok(Json(marks))
}

/// Mark detail.
pub async fn show(State(state): State<AppState>, Path(id): Path<MarkId>) -> Result<Json<Mark>> {
    let mark = state
        .catalog()
        .get_mark(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("mark {id}")))?;
    Ok(Json(mark))
}
