//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order entity
///
/// `id` is assigned by the order store. `total` is always derived from the
/// product price at the time of the last create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// User reference (owned by the user service)
    pub user_id: i64,
    /// Product reference (owned by the product service)
    pub product_id: i64,
    pub quantity: i32,
    /// price * quantity, in currency unit
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Create order payload
///
/// Missing numeric fields decode as 0 so "absent" and "zero" fail the same
/// validation. Any `id` or `total` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default, alias = "user_id")]
    pub user_id: i64,
    #[serde(default, alias = "product_id")]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i32,
}

/// Update order payload (the user reference is never changed)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(default, alias = "product_id")]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i32,
}

/// Order row ready to be written (identity not yet assigned)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total: Decimal,
}

/// Fields replaced by an order update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderChanges {
    pub product_id: i64,
    pub quantity: i32,
    pub total: Decimal,
}

impl NewOrder {
    /// Attach the store-assigned identity
    pub fn with_id(self, id: i64) -> Order {
        Order {
            id,
            user_id: self.user_id,
            product_id: self.product_id,
            quantity: self.quantity,
            total: self.total,
        }
    }
}

impl Order {
    /// Apply update fields in place, keeping `id` and `user_id`
    pub fn apply(&mut self, changes: &OrderChanges) {
        self.product_id = changes.product_id;
        self.quantity = changes.quantity;
        self.total = changes.total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: 1,
            user_id: 1,
            product_id: 1,
            quantity: 2,
            total: Decimal::from(2600),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "userId": 1,
                "productId": 1,
                "quantity": 2,
                "total": 2600.0
            })
        );
    }

    #[test]
    fn test_create_accepts_snake_case_aliases() {
        let create: OrderCreate =
            serde_json::from_str(r#"{"user_id":3,"product_id":4,"quantity":5}"#).unwrap();
        assert_eq!(
            create,
            OrderCreate {
                user_id: 3,
                product_id: 4,
                quantity: 5
            }
        );
    }

    #[test]
    fn test_create_missing_fields_default_to_zero() {
        let create: OrderCreate = serde_json::from_str(r#"{"userId":1}"#).unwrap();
        assert_eq!(create.product_id, 0);
        assert_eq!(create.quantity, 0);
    }

    #[test]
    fn test_client_total_is_ignored() {
        let create: OrderCreate = serde_json::from_str(
            r#"{"userId":1,"productId":1,"quantity":2,"total":1.0,"id":99}"#,
        )
        .unwrap();
        assert_eq!(create.quantity, 2);
    }

    #[test]
    fn test_apply_keeps_identity_and_user() {
        let mut order = NewOrder {
            user_id: 1,
            product_id: 1,
            quantity: 2,
            total: Decimal::from(2600),
        }
        .with_id(1);
        order.apply(&OrderChanges {
            product_id: 3,
            quantity: 5,
            total: Decimal::from(375),
        });
        assert_eq!(order.id, 1);
        assert_eq!(order.user_id, 1);
        assert_eq!(order.product_id, 3);
        assert_eq!(order.total, Decimal::from(375));
    }
}
