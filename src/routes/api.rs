//! Resource routes mounted under `/api`, and their OpenAPI document.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{create_restaurant, list_dishes, list_restaurants};
use crate::model::{Dish, Restaurant};
use crate::state::AppState;
use axum::{routing::get, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Foody API"),
    servers((url = "/api")),
    paths(
        crate::handlers::dish::list_dishes,
        crate::handlers::restaurant::list_restaurants,
        crate::handlers::restaurant::create_restaurant,
    ),
    components(schemas(Dish, Restaurant, ErrorBody, ErrorDetail)),
    tags(
        (name = "dishes", description = "Dish catalogue"),
        (name = "restaurants", description = "Restaurant directory"),
    )
)]
pub struct ApiDoc;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/dishes", get(list_dishes))
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .with_state(state)
}
