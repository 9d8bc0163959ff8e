//! Restaurant handlers: list and create.

use crate::error::{AppError, ErrorBody};
use crate::model::Restaurant;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = Vec<Restaurant>),
        (status = 500, description = "Database failure", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Json<Vec<Restaurant>>, AppError> {
    let restaurants = state.store.list_restaurants().await?;
    tracing::debug!(count = restaurants.len(), "listed restaurants");
    Ok(Json(restaurants))
}

/// Insert one row and echo the request body back. The stored row (and any
/// identifier the database assigned) is not read back.
#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = Restaurant,
    responses(
        (status = 200, description = "Restaurant stored; request echoed", body = Restaurant),
        (status = 500, description = "Database failure", body = ErrorBody),
    ),
    tag = "restaurants"
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(restaurant): Json<Restaurant>,
) -> Result<Json<Restaurant>, AppError> {
    state.store.insert_restaurant(&restaurant).await?;
    tracing::info!(name = ?restaurant.name, "restaurant created");
    Ok(Json(restaurant))
}
