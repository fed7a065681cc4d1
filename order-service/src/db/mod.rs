//! Order persistence
//!
//! [`OrderStore`] is the single commit point of every order workflow. Each
//! operation is atomic on its own; no operation spans another.

pub mod memory;
pub mod order;

pub use memory::MemoryOrderStore;
pub use order::PgOrderStore;

use async_trait::async_trait;
use shared::models::{NewOrder, Order, OrderChanges};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Order store failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// No order with this id exists
    #[error("order {0} not found")]
    NotFound(i64),
    /// Backing store failure (connection, statement, pool timeout)
    #[error("order store failure: {0}")]
    Backend(BoxError),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persists and retrieves orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Assign an id and persist
    async fn create(&self, order: NewOrder) -> StoreResult<Order>;

    /// Every stored order, ascending by id
    async fn list_all(&self) -> StoreResult<Vec<Order>>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Order>;

    /// Replace `product_id`, `quantity` and `total`; `user_id` is untouched
    async fn update(&self, id: i64, changes: OrderChanges) -> StoreResult<Order>;

    /// Remove the order; deleting an absent id is `NotFound`, every time
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
