//! Application state for order-service

use std::sync::Arc;

use crate::clients::{ProductClient, ProductLookup, UserClient, UserLookup};
use crate::config::Config;
use crate::db::{MemoryOrderStore, OrderStore, PgOrderStore};
use crate::orders::OrderOrchestrator;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order workflows over the configured store and collaborators
    pub orders: OrderOrchestrator,
}

impl AppState {
    /// Build state from configuration
    ///
    /// Connects to PostgreSQL (running migrations) when a database URL is
    /// configured, otherwise falls back to the in-memory store.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let store: Arc<dyn OrderStore> = match &config.database {
            Some(options) => {
                let store = PgOrderStore::connect(
                    options.clone(),
                    config.db_max_connections,
                    config.db_acquire_timeout,
                    config.db_query_timeout,
                )
                .await?;
                tracing::info!("Database connected and migrations applied");
                Arc::new(store)
            }
            None => {
                tracing::warn!("No database configured, orders are kept in memory");
                Arc::new(MemoryOrderStore::new())
            }
        };

        let users: Arc<dyn UserLookup> = Arc::new(UserClient::new(
            config.user_service_url.clone(),
            config.upstream_timeout,
        )?);
        let products: Arc<dyn ProductLookup> = Arc::new(ProductClient::new(
            config.product_service_url.clone(),
            config.upstream_timeout,
        )?);

        tracing::info!(
            user_service = %config.user_service_url,
            product_service = %config.product_service_url,
            "Collaborator clients ready"
        );

        Ok(Self {
            orders: OrderOrchestrator::new(store, users, products)
                .with_store_timeout(config.db_query_timeout),
        })
    }

    /// Assemble state from already-built parts
    pub fn from_parts(
        store: Arc<dyn OrderStore>,
        users: Arc<dyn UserLookup>,
        products: Arc<dyn ProductLookup>,
    ) -> Self {
        Self {
            orders: OrderOrchestrator::new(store, users, products),
        }
    }
}
