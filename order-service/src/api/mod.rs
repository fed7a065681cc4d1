//! API routes for order-service

pub mod extract;
pub mod health;
pub mod orders;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
///
/// Every path under `/orders` answers unsupported methods with 405; other
/// unknown paths are 404.
pub fn create_router(state: AppState) -> Router {
    let orders = Router::new()
        .route(
            "/orders",
            get(orders::list_orders)
                .post(orders::create_order)
                .fallback(orders::method_not_allowed),
        )
        .route(
            "/orders/",
            get(orders::list_orders).fallback(orders::method_not_allowed),
        )
        .route(
            "/orders/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order)
                .fallback(orders::method_not_allowed),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .merge(orders)
        .fallback(orders::unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
