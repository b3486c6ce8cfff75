//! School API: REST backend for teachers, classes and students on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod migration;
pub mod model;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use state::AppState;
pub use store::{connect, connect_in_memory};
pub use routes::{app, common_routes, docs_routes, entity_routes, ApiDoc};
pub use service::UnitOfWork;
