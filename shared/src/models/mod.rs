//! Data models
//!
//! Orders are owned by the order service. Users and products are read-only
//! projections of records owned by their collaborator services.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use order::*;
pub use product::*;
pub use user::*;
