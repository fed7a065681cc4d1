//! PostgreSQL order store

use std::time::Duration;

use async_trait::async_trait;
use shared::models::{NewOrder, Order, OrderChanges};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use super::{BoxError, OrderStore, StoreError, StoreResult};

/// Order store backed by the `orders` table
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and bring the schema up to date
    ///
    /// Every pooled session runs with `statement_timeout = query_timeout`.
    pub async fn connect(
        options: PgConnectOptions,
        max_connections: u32,
        acquire_timeout: Duration,
        query_timeout: Duration,
    ) -> Result<Self, BoxError> {
        let options = options.options([("statement_timeout", statement_timeout(query_timeout))]);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(pool))
    }
}

/// `statement_timeout` value in milliseconds; zero would disable the limit
fn statement_timeout(timeout: Duration) -> String {
    format!("{}ms", timeout.as_millis().max(1))
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let created: Order = sqlx::query_as(
            r#"
            INSERT INTO orders (user_id, product_id, quantity, total)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, product_id, quantity, total
            "#,
        )
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.total)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_all(&self) -> StoreResult<Vec<Order>> {
        let orders = sqlx::query_as(
            "SELECT id, user_id, product_id, quantity, total FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(orders)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Order> {
        sqlx::query_as(
            "SELECT id, user_id, product_id, quantity, total FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> StoreResult<Order> {
        sqlx::query_as(
            r#"
            UPDATE orders
            SET product_id = $2, quantity = $3, total = $4
            WHERE id = $1
            RETURNING id, user_id, product_id, quantity, total
            "#,
        )
        .bind(id)
        .bind(changes.product_id)
        .bind(changes.quantity)
        .bind(changes.total)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
