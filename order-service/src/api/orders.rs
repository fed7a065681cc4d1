//! `/orders` handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use shared::error::AppError;
use shared::models::{Order, OrderCreate, OrderUpdate};

use super::extract::{OrderId, OrderJson};
use crate::error::OrderResult;
use crate::state::AppState;

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    OrderJson(input): OrderJson<OrderCreate>,
) -> OrderResult<(StatusCode, Json<Order>)> {
    let order = state.orders.create(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders, GET /orders/
pub async fn list_orders(State(state): State<AppState>) -> OrderResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list().await?))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> OrderResult<Json<Order>> {
    Ok(Json(state.orders.get(id).await?))
}

/// PUT /orders/{id}
pub async fn update_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
    OrderJson(input): OrderJson<OrderUpdate>,
) -> OrderResult<Json<Order>> {
    Ok(Json(state.orders.update(id, input).await?))
}

/// DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    OrderId(id): OrderId,
) -> OrderResult<StatusCode> {
    state.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

/// Router fallback: `/orders*` paths with no route are 405, the rest 404
pub async fn unmatched(uri: Uri) -> AppError {
    if uri.path().starts_with("/orders") {
        AppError::method_not_allowed()
    } else {
        AppError::not_found("Route")
    }
}
