//! Order payload validation
//!
//! Pure checks, run before any upstream call.

use shared::models::{OrderCreate, OrderUpdate};

use crate::error::OrderError;

/// Validate a create payload
///
/// `userId` is deliberately not checked here: the user service decides
/// whether it exists.
pub fn validate_create(input: &OrderCreate) -> Result<(), OrderError> {
    validate_line(input.product_id, input.quantity)
}

/// Validate an update payload
pub fn validate_update(input: &OrderUpdate) -> Result<(), OrderError> {
    validate_line(input.product_id, input.quantity)
}

fn validate_line(product_id: i64, quantity: i32) -> Result<(), OrderError> {
    if product_id == 0 || quantity == 0 {
        return Err(OrderError::Validation(
            "ProductID and Quantity are required".to_string(),
        ));
    }
    if quantity < 0 {
        return Err(OrderError::Validation(format!(
            "Quantity must be positive, got {quantity}"
        )));
    }
    Ok(())
}
