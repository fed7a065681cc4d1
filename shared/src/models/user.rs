//! User Model

use serde::{Deserialize, Serialize};

/// User projection as served by `GET /users/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
