//! Shared types for the order platform
//!
//! Wire models exchanged between the order service and its collaborators,
//! plus the unified error system used by every HTTP surface.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
