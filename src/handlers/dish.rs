//! Dish handlers.

use crate::error::{AppError, ErrorBody};
use crate::model::Dish;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Full-table scan of `dishes`. No filters, no paging, no ordering.
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes", body = Vec<Dish>),
        (status = 500, description = "Database failure", body = ErrorBody),
    ),
    tag = "dishes"
)]
pub async fn list_dishes(State(state): State<AppState>) -> Result<Json<Vec<Dish>>, AppError> {
    let dishes = state.store.list_dishes().await?;
    tracing::debug!(count = dishes.len(), "listed dishes");
    Ok(Json(dishes))
}
