//! Character record service: CRUD over the `personajes` table plus PDF character sheets.

pub mod config;
pub mod document;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use model::{Character, CharacterFields, CharacterSheet};
pub use routes::{app, common_routes, personajes_routes};
pub use service::CharacterService;
pub use state::AppState;
pub use store::{connect, ensure_personajes_table};
