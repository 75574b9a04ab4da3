//! Student records: a small REST service for CRUD over student records stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use logging::init_tracing;
pub use model::{Record, RecordFields};
pub use routes::{build_app, common_routes, record_routes};
pub use service::RecordService;
pub use state::AppState;
pub use store::{RecordStore, Session};
