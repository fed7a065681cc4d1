//! Lookup clients for the user and product collaborators
//!
//! Both lookups are single-attempt, timeout-guarded `GET`s. Failures are
//! reported as [`UpstreamError`] with one of three kinds; the orchestrator
//! decides what each kind means for the caller.

mod http;
mod product;
mod user;

pub use http::ServiceClient;
pub use product::ProductClient;
pub use user::UserClient;

use async_trait::async_trait;
use shared::models::{Product, User};
use std::fmt;
use thiserror::Error;

/// Which collaborator a lookup was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    User,
    Product,
}

impl Collaborator {
    /// Path segment of the collaborator's resource (`/users/{id}`, `/products/{id}`)
    pub fn resource(&self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Product => "products",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Product => f.write_str("product"),
        }
    }
}

/// Failure sub-kind of an upstream lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Transport failure: connect, timeout, or body read
    Unreachable,
    /// Collaborator answered with a non-success status
    NotFound,
    /// Collaborator body could not be decoded into the projection
    Malformed,
}

impl fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => f.write_str("unreachable"),
            Self::NotFound => f.write_str("not found"),
            Self::Malformed => f.write_str("malformed response"),
        }
    }
}

/// A failed call to a collaborator service
///
/// `Display` names only the service and kind, since it reaches HTTP
/// responses. `detail` carries transport text and is for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} service {kind}")]
pub struct UpstreamError {
    pub service: Collaborator,
    pub kind: UpstreamErrorKind,
    pub detail: String,
}

impl UpstreamError {
    pub fn unreachable(service: Collaborator, detail: impl Into<String>) -> Self {
        Self {
            service,
            kind: UpstreamErrorKind::Unreachable,
            detail: detail.into(),
        }
    }

    pub fn not_found(service: Collaborator, detail: impl Into<String>) -> Self {
        Self {
            service,
            kind: UpstreamErrorKind::NotFound,
            detail: detail.into(),
        }
    }

    pub fn malformed(service: Collaborator, detail: impl Into<String>) -> Self {
        Self {
            service,
            kind: UpstreamErrorKind::Malformed,
            detail: detail.into(),
        }
    }
}

/// Resolves a user id to the user projection
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn fetch_user(&self, user_id: i64) -> Result<User, UpstreamError>;
}

/// Resolves a product id to the product projection
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn fetch_product(&self, product_id: i64) -> Result<Product, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UpstreamError::not_found(Collaborator::Product, "status 404 Not Found");
        assert_eq!(err.to_string(), "product service not found");
        let err = UpstreamError::unreachable(
            Collaborator::User,
            "error sending request for url (http://userservice.internal:8083/users/1)",
        );
        assert_eq!(err.kind, UpstreamErrorKind::Unreachable);
        assert_eq!(err.to_string(), "user service unreachable");
        assert!(err.detail.contains("userservice.internal"));
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Collaborator::User.resource(), "users");
        assert_eq!(Collaborator::Product.resource(), "products");
    }
}
