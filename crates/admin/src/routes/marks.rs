//! Mark (brand) administration handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use goldstart_core::{Mark, MarkId, MarkInput};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the mark router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(remove))
}

/// Query parameters for listing marks.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// List marks ordered by name.
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

/// Create a mark; responds 201 with the stored entity.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MarkInput>,
) -> Result<(StatusCode, Json<Mark>)> {
    let mark = state.catalog().create_mark(&input).await?;
    Ok((StatusCode::CREATED, Json(mark)))
}

/// Replace a mark's fields; 404 when the id does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<MarkId>,
    Json(input): Json<MarkInput>,
) -> Result<Json<Mark>> {
    let mark = state.catalog().update_mark(&id, &input).await?;
    Ok(Json(mark))
}

/// Remove a mark; 404 when the id does not exist.
pub async fn remove(State(state): State<AppState>, Path(id): Path<MarkId>) -> Result<StatusCode> {
    state.catalog().remove_mark(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
