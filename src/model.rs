//! Records exchanged over HTTP and mapped from table rows.
//!
//! Every column is nullable in the store, so every field is optional and
//! serializes as `null` when absent.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of `dishes`. `restaurant_name` is a denormalized copy, not a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub restaurant_name: Option<String>,
    pub category: Option<String>,
    pub calories: Option<i32>,
}

/// One row of `restaurants`. Also the request and response body of creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Restaurant {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}
