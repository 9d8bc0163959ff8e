//! `Store` over a PostgreSQL pool.

use super::Store;
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::model::{Dish, Restaurant};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Casts keep decoding stable whether the columns were declared SERIAL or
/// BIGSERIAL, NUMERIC or REAL, INT or SMALLINT.
const SELECT_DISHES: &str = "SELECT id::INT8 AS id, name, description, price::FLOAT8 AS price, \
     restaurant_name, category, calories::INT4 AS calories FROM dishes";
const SELECT_RESTAURANTS: &str = "SELECT name, address, phone FROM restaurants";
const INSERT_RESTAURANT: &str = "INSERT INTO restaurants (name, address, phone) VALUES ($1, $2, $3)";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the pool from settings. Connects eagerly so a bad URL fails at startup.
    pub async fn connect(config: &ServerConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_dishes(&self) -> Result<Vec<Dish>, AppError> {
        tracing::debug!(sql = %SELECT_DISHES, "query");
        let rows = sqlx::query_as::<_, Dish>(SELECT_DISHES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        tracing::debug!(sql = %SELECT_RESTAURANTS, "query");
        let rows = sqlx::query_as::<_, Restaurant>(SELECT_RESTAURANTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_restaurant(&self, restaurant: &Restaurant) -> Result<(), AppError> {
        tracing::debug!(sql = %INSERT_RESTAURANT, params = ?restaurant, "query");
        sqlx::query(INSERT_RESTAURANT)
            .bind(restaurant.name.as_deref())
            .bind(restaurant.address.as_deref())
            .bind(restaurant.phone.as_deref())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
