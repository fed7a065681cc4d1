//! User lookup client

use std::time::Duration;

use async_trait::async_trait;
use shared::models::User;

use super::{Collaborator, ServiceClient, UpstreamError, UserLookup};

/// Reads users from the user service (`GET /users/{id}`)
#[derive(Debug, Clone)]
pub struct UserClient {
    http: ServiceClient,
}

impl UserClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: ServiceClient::new(Collaborator::User, base_url, timeout)?,
        })
    }
}

#[async_trait]
impl UserLookup for UserClient {
    /// The id is forwarded as-is (zero included); the user service decides
    /// whether it exists.
    async fn fetch_user(&self, user_id: i64) -> Result<User, UpstreamError> {
        self.http.get_by_id(user_id).await
    }
}
