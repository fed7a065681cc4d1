//! In-memory order store
//!
//! Used when no database is configured, and as the substitute store in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::models::{NewOrder, Order, OrderChanges};

use super::{OrderStore, StoreError, StoreResult};

#[derive(Debug)]
struct Inner {
    next_id: i64,
    orders: BTreeMap<i64, Order>,
}

/// Order store holding every order in process memory
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct MemoryOrderStore {
    inner: Mutex<Inner>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                orders: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let order = order.with_id(id);
        inner.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn list_all(&self) -> StoreResult<Vec<Order>> {
        Ok(self.inner.lock().orders.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Order> {
        self.inner
            .lock()
            .orders
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> StoreResult<Order> {
        let mut inner = self.inner.lock();
        let order = inner.orders.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        order.apply(&changes);
        Ok(order.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.inner
            .lock()
            .orders
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
