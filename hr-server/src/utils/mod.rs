//! Utility module - common helpers and types
//!
//! - [`AppError`] - application error type
//! - [`AppResponse`] - API response envelope
//! - logging and validation helpers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResponse, ok};
pub use logger::{init_logger, init_logger_with_file};

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;
