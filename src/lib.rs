//! Landing CMS: typed content storage and the aggregated landing page read.

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Config, StoreBackend};
pub use error::{AppError, ConfigError};
pub use models::*;
pub use response::{Envelope, ListMeta};
pub use routes::{app, common_routes, content_routes};
pub use service::ContentService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, ContentStore, MemoryStore, PgStore};
