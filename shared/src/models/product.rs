//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product projection as served by `GET /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price, non-negative; travels as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_price_from_json_number() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Laptop","price":1300.00}"#).unwrap();
        assert_eq!(product.price, Decimal::from(1300));
    }

    #[test]
    fn test_fractional_price() {
        let product: Product =
            serde_json::from_str(r#"{"id":2,"name":"Mouse","price":19.99}"#).unwrap();
        assert_eq!(product.price, Decimal::from_str("19.99").unwrap());
    }

    #[test]
    fn test_missing_price_is_rejected() {
        assert!(serde_json::from_str::<Product>(r#"{"id":2,"name":"Mouse"}"#).is_err());
    }
}
