//! Workflow error type for the order service
//!
//! `OrderError` is what the orchestrator returns. It bridges store and
//! upstream failures to the API-layer `AppError`, deciding which side is at
//! fault for each.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::clients::UpstreamError;
use crate::db::StoreError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum OrderError {
    /// Caller supplied incomplete or malformed input
    #[error("{0}")]
    Validation(String),

    /// User could not be confirmed (caller's fault)
    #[error("Error fetching user details: {0}")]
    UserLookup(UpstreamError),

    /// Product could not be resolved (dependency fault)
    #[error("Error fetching product details: {0}")]
    ProductLookup(UpstreamError),

    /// Requested order id does not exist
    #[error("Order {0} not found")]
    NotFound(i64),

    /// Persistence failure
    #[error("Order store error: {0}")]
    Store(BoxError),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::Backend(e) => OrderError::Store(e),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        let message = e.to_string();
        match e {
            OrderError::Validation(_) => AppError::validation(message),
            OrderError::UserLookup(_) => AppError::with_message(ErrorCode::UserLookupFailed, message),
            OrderError::ProductLookup(_) => {
                AppError::with_message(ErrorCode::ProductLookupFailed, message)
            }
            OrderError::NotFound(_) => AppError::with_message(ErrorCode::OrderNotFound, message),
            OrderError::Store(db_err) => {
                tracing::error!(error = %db_err, "Order store error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for workflow results
pub type OrderResult<T> = Result<T, OrderError>;
