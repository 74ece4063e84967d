//! HTTP handlers for character CRUD, document export, and health.

pub mod health;
pub mod personajes;
pub use personajes::*;
