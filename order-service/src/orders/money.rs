//! Order total calculation using rust_decimal
//!
//! No rounding is applied: the total carries whatever scale the product
//! price carries.

use rust_decimal::Decimal;
use shared::models::Product;

/// `product.price * quantity`
///
/// Prices are bounded by the product client, so the product cannot overflow.
pub fn compute_total(product: &Product, quantity: i32) -> Decimal {
    product.price * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product(price: &str) -> Product {
        Product {
            id: 1,
            name: "Laptop".into(),
            price: Decimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn test_whole_price() {
        assert_eq!(compute_total(&product("1300.00"), 2), Decimal::from(2600));
    }

    #[test]
    fn test_fractional_price_is_exact() {
        assert_eq!(
            compute_total(&product("0.10"), 3),
            Decimal::from_str("0.30").unwrap()
        );
        assert_eq!(
            compute_total(&product("19.99"), 7),
            Decimal::from_str("139.93").unwrap()
        );
    }

    #[test]
    fn test_free_product() {
        assert_eq!(compute_total(&product("0"), 10), Decimal::ZERO);
    }
}
