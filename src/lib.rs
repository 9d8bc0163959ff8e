//! Foody backend: dishes and restaurants over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Dish, Restaurant};
pub use routes::{api_routes, app, common_routes_with_ready, ApiDoc};
pub use state::AppState;
pub use store::{PgStore, Store};
