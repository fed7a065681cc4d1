//! OrderOrchestrator - sequences validation, lookups, pricing and persistence
//!
//! Every stage is a hard sequence point: the first failure abandons the
//! request and nothing after it runs. The store write is the only durable
//! effect and happens last.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use shared::models::{NewOrder, Order, OrderChanges, OrderCreate, OrderUpdate, Product};

use super::{compute_total, validate_create, validate_update};
use crate::clients::{ProductLookup, UserLookup};
use crate::db::{OrderStore, StoreResult};
use crate::error::{OrderError, OrderResult};

/// Workflow stage reached by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Validated,
    UserConfirmed,
    ProductResolved,
    TotalComputed,
    Persisted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::UserConfirmed => "user_confirmed",
            Self::ProductResolved => "product_resolved",
            Self::TotalComputed => "total_computed",
            Self::Persisted => "persisted",
        };
        f.write_str(name)
    }
}

/// Log an abandoned workflow and hand the error back
fn abandon(operation: &'static str, stage: Stage, err: OrderError) -> OrderError {
    match &err {
        OrderError::Store(_) | OrderError::ProductLookup(_) => {
            tracing::error!(operation, %stage, error = %err, "Order workflow abandoned")
        }
        _ => tracing::warn!(operation, %stage, error = %err, "Order workflow abandoned"),
    }
    err
}

/// Bound on a single store call unless configured otherwise
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Composes the order store and both lookup clients
#[derive(Clone)]
pub struct OrderOrchestrator {
    store: Arc<dyn OrderStore>,
    users: Arc<dyn UserLookup>,
    products: Arc<dyn ProductLookup>,
    store_timeout: Duration,
}

impl OrderOrchestrator {
    pub fn new(
        store: Arc<dyn OrderStore>,
        users: Arc<dyn UserLookup>,
        products: Arc<dyn ProductLookup>,
    ) -> Self {
        Self {
            store,
            users,
            products,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Create an order: validate, confirm user, resolve product, price, persist
    pub async fn create(&self, input: OrderCreate) -> OrderResult<Order> {
        const OP: &str = "create";

        validate_create(&input).map_err(|e| abandon(OP, Stage::Received, e))?;

        self.users
            .fetch_user(input.user_id)
            .await
            .map_err(|e| abandon(OP, Stage::Validated, OrderError::UserLookup(e)))?;

        let product = self
            .resolve_product(input.product_id)
            .await
            .map_err(|e| abandon(OP, Stage::UserConfirmed, e))?;

        let total = compute_total(&product, input.quantity);

        let order = self
            .bounded(self.store.create(NewOrder {
                user_id: input.user_id,
                product_id: input.product_id,
                quantity: input.quantity,
                total,
            }))
            .await
            .map_err(|e| abandon(OP, Stage::TotalComputed, e))?;

        tracing::info!(
            stage = %Stage::Persisted,
            order_id = order.id,
            user_id = order.user_id,
            product_id = order.product_id,
            quantity = order.quantity,
            total = %order.total,
            "Order created"
        );
        Ok(order)
    }

    pub async fn list(&self) -> OrderResult<Vec<Order>> {
        self.bounded(self.store.list_all())
            .await
            .map_err(|e| abandon("list", Stage::Received, e))
    }

    pub async fn get(&self, id: i64) -> OrderResult<Order> {
        self.bounded(self.store.get_by_id(id)).await
    }

    /// Update an order's product and quantity, recomputing the total
    ///
    /// The user is not re-confirmed and `user_id` never changes.
    pub async fn update(&self, id: i64, input: OrderUpdate) -> OrderResult<Order> {
        const OP: &str = "update";

        validate_update(&input).map_err(|e| abandon(OP, Stage::Received, e))?;

        let product = self
            .resolve_product(input.product_id)
            .await
            .map_err(|e| abandon(OP, Stage::Validated, e))?;

        let total = compute_total(&product, input.quantity);

        let changes = OrderChanges {
            product_id: input.product_id,
            quantity: input.quantity,
            total,
        };
        let order = self
            .bounded(self.store.update(id, changes))
            .await
            .map_err(|e| abandon(OP, Stage::TotalComputed, e))?;

        tracing::info!(
            stage = %Stage::Persisted,
            order_id = order.id,
            product_id = order.product_id,
            quantity = order.quantity,
            total = %order.total,
            "Order updated"
        );
        Ok(order)
    }

    pub async fn delete(&self, id: i64) -> OrderResult<()> {
        self.bounded(self.store.delete(id))
            .await
            .map_err(|e| abandon("delete", Stage::Received, e))?;
        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }

    /// Run one store call within `store_timeout`
    async fn bounded<T>(&self, call: impl Future<Output = StoreResult<T>>) -> OrderResult<T> {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(OrderError::Store(
                format!("order store did not answer within {:?}", self.store_timeout).into(),
            )),
        }
    }

    async fn resolve_product(&self, product_id: i64) -> OrderResult<Product> {
        self.products
            .fetch_product(product_id)
            .await
            .map_err(OrderError::ProductLookup)
    }
}
