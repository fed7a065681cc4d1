//! Request extractors
//!
//! Both reject with a plain-text 400 instead of axum's default rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use shared::error::AppError;

/// Order id taken from the `{id}` path segment
///
/// Anything that is not a base-10 integer is rejected as `Invalid order ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderId(pub i64);

impl<S> FromRequestParts<S> for OrderId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::invalid_format("Invalid order ID"))?;
        parse_order_id(&raw)
            .map(OrderId)
            .ok_or_else(|| AppError::invalid_format(format!("Invalid order ID: {raw}")))
    }
}

fn parse_order_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// JSON order payload
#[derive(Debug, Clone)]
pub struct OrderJson<T>(pub T);

impl<S, T> FromRequest<S> for OrderJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(OrderJson(value)),
            Err(rejection) => Err(payload_error(rejection)),
        }
    }
}

fn payload_error(rejection: JsonRejection) -> AppError {
    AppError::invalid_format(format!("Invalid order payload: {}", rejection.body_text()))
}
