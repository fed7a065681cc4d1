//! PostgreSQL store tests
//!
//! Need a disposable database:
//! `TEST_DATABASE_URL=postgres://... cargo test -p order-service -- --ignored`

use std::str::FromStr;
use std::time::Duration;

use order_service::db::{OrderStore, PgOrderStore, StoreError};
use rust_decimal::Decimal;
use shared::models::{NewOrder, OrderChanges};
use sqlx::postgres::PgConnectOptions;

async fn store() -> Option<PgOrderStore> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    Some(
        PgOrderStore::connect(
            PgConnectOptions::from_str(&url).unwrap(),
            2,
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .await
        .unwrap(),
    )
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_pg_order_lifecycle() {
    let Some(store) = store().await else {
        return;
    };

    let created = store
        .create(NewOrder {
            user_id: 1,
            product_id: 1,
            quantity: 2,
            total: Decimal::new(260000, 2),
        })
        .await
        .unwrap();
    assert_eq!(created.total, Decimal::from(2600));

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update(
            created.id,
            OrderChanges {
                product_id: 3,
                quantity: 5,
                total: Decimal::from(375),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.user_id, 1);
    assert_eq!(updated.total, Decimal::from(375));

    let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|o| o.id).collect();
    assert!(ids.contains(&created.id));
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    store.delete(created.id).await.unwrap();
    assert!(matches!(
        store.delete(created.id).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.get_by_id(created.id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_pg_update_missing() {
    let Some(store) = store().await else {
        return;
    };
    let result = store
        .update(
            i64::MAX,
            OrderChanges {
                product_id: 1,
                quantity: 1,
                total: Decimal::ONE,
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
