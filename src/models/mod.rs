//! Shared API response models.

pub mod error;

pub use error::{Error, ErrorCode};

/// Handler result carrying the shared API error payload.
pub type ApiResult<T> = Result<T, Error>;
