//! order-service: HTTP order microservice
//!
//! Accepts order requests, confirms the user and product with their owning
//! services, prices the order and keeps it in an [`db::OrderStore`].

pub mod api;
pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod orders;
pub mod state;

pub use config::Config;
pub use error::{OrderError, OrderResult};
pub use state::AppState;
