//! HTTP driving adapter: handlers, DTOs, and shared state.

pub mod animals;
pub mod health;
pub mod state;

pub use crate::models::ApiResult;
