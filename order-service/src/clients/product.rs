//! Product lookup client

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::models::Product;

use super::{Collaborator, ProductLookup, ServiceClient, UpstreamError};

/// Reads products from the product service (`GET /products/{id}`)
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: ServiceClient,
}

impl ProductClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: ServiceClient::new(Collaborator::Product, base_url, timeout)?,
        })
    }
}

#[async_trait]
impl ProductLookup for ProductClient {
    async fn fetch_product(&self, product_id: i64) -> Result<Product, UpstreamError> {
        let product: Product = self.http.get_by_id(product_id).await?;
        check_price(product)
    }
}

/// Upper bound on a unit price; keeps `price * quantity` within `Decimal` range
const MAX_PRICE: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Reject prices that cannot produce a valid total
fn check_price(product: Product) -> Result<Product, UpstreamError> {
    if product.price < Decimal::ZERO || product.price > MAX_PRICE {
        return Err(UpstreamError::malformed(
            Collaborator::Product,
            format!("product {} has out-of-range price {}", product.id, product.price),
        ));
    }
    Ok(product)
}
