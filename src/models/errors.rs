use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

pub const INVALID_LOOKUP_MESSAGE: &str = "Invalid user ID or venue ID format. They must be integers.";
pub const MISSING_REDEMPTION_FIELDS_MESSAGE: &str = "Missing userId or benefitId in request body.";
pub const NON_NUMERIC_REDEMPTION_MESSAGE: &str = "userId and benefitId must be numbers.";
pub const BENEFIT_NOT_FOUND_MESSAGE: &str = "Benefit not found.";

/// Failure reported by the query layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error kinds surfaced by the benefit service and the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Failed to retrieve benefits from the database.")]
    RetrievalFailed,
    #[error("An unexpected error occurred on the server.")]
    OperationFailed,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Logs the storage cause and hides it behind `RetrievalFailed`.
    pub fn retrieval(err: StorageError) -> Self {
        tracing::error!(error = %err, "benefit retrieval failed");
        ServiceError::RetrievalFailed
    }

    /// Logs the storage cause and hides it behind `OperationFailed`.
    pub fn operation(err: StorageError) -> Self {
        tracing::error!(error = %err, "benefit operation failed");
        ServiceError::OperationFailed
    }

    /// Text safe to show to a client.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::InvalidInput(msg) | ServiceError::NotFound(msg) => msg.clone(),
            ServiceError::RetrievalFailed | ServiceError::OperationFailed => self.to_string(),
            ServiceError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::RetrievalFailed
            | ServiceError::OperationFailed
            | ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Internal(msg) = self {
            tracing::error!("Internal error: {}", msg);
        }

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.public_message()
        }))
    }
}
