//! Data access behind the HTTP handlers.

mod postgres;

pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{Dish, Restaurant};
use async_trait::async_trait;

/// Table access used by the handlers. Each method is a single statement; no
/// ordering or transaction guarantees beyond what the database provides.
#[async_trait]
pub trait Store: Send + Sync {
    /// Every row of `dishes`.
    async fn list_dishes(&self) -> Result<Vec<Dish>, AppError>;

    /// Every row of `restaurants`.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError>;

    /// Insert one row into `restaurants`. Absent fields are stored as NULL.
    async fn insert_restaurant(&self, restaurant: &Restaurant) -> Result<(), AppError>;

    /// Round trip to the database, for readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
