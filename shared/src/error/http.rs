//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// User resolution failures are the caller's fault (400); product
    /// resolution failures are dependency faults (500).
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            Self::DatabaseError | Self::ProductLookupFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation, malformed input, unknown user)
            Self::ValidationFailed | Self::InvalidFormat | Self::UserLookupFailed => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
