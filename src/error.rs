use actix_web::{HttpResponse, http::StatusCode};
use thiserror::Error;

use crate::model::leave::LeaveStatus;

/// Error taxonomy for leave operations.
///
/// Business-rule failures are returned to the caller as-is and never
/// retried; `Infrastructure` wraps store/notifier failures with operation
/// context for diagnosability.
#[derive(Debug, Error)]
pub enum LeaveError {
    #[error("leave request not found")]
    NotFound,

    #[error("unauthorized action")]
    Unauthorized,

    #[error("invalid status transition: request is {0}")]
    InvalidStatusTransition(LeaveStatus),

    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Infrastructure(#[from] anyhow::Error),
}

impl LeaveError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        LeaveError::InvalidRequest(msg.into())
    }

    /// Wraps a store error with the operation and record id it came from.
    pub fn infra(operation: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        LeaveError::Infrastructure(anyhow::Error::new(source).context(format!("{operation} failed")))
    }
}

impl actix_web::ResponseError for LeaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeaveError::NotFound => StatusCode::NOT_FOUND,
            LeaveError::Unauthorized => StatusCode::FORBIDDEN,
            LeaveError::InvalidStatusTransition(_) | LeaveError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            LeaveError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            LeaveError::NotFound => "Leave request not found".to_string(),
            LeaveError::Unauthorized => "Access denied".to_string(),
            // Infrastructure details stay in the logs, not the response
            LeaveError::Infrastructure(e) => {
                tracing::error!(error = ?e, "Internal error");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "message": message }))
    }
}
