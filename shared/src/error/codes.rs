//! Unified error codes for the order platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
///
/// Every code is a u16 whose leading digit names its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format (malformed path id, malformed body)
    InvalidFormat = 6,
    /// HTTP method not supported on this path
    MethodNotAllowed = 9,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,

    // ==================== 6xxx: Product ====================
    /// Product could not be resolved through the product service
    ProductLookupFailed = 6004,

    // ==================== 8xxx: User ====================
    /// User could not be resolved through the user service
    UserLookupFailed = 8006,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::MethodNotAllowed => "Method not allowed",

            // Order
            ErrorCode::OrderNotFound => "Order not found",

            // Product
            ErrorCode::ProductLookupFailed => "Error fetching product details",

            // User
            ErrorCode::UserLookupFailed => "Invalid user",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::ProductLookupFailed.code(), 6004);
        assert_eq!(ErrorCode::UserLookupFailed.code(), 8006);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ErrorCode::UserLookupFailed.message(), "Invalid user");
        assert_eq!(ErrorCode::MethodNotAllowed.message(), "Method not allowed");
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::OrderNotFound.to_string(), "E4001");
    }
}
