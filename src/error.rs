use actix_web::{error::BlockingError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::protocol::ErrorResponse;

/// Failure of a single request. `Display` is the message sent to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Author and content are required")]
    MissingFields,
    #[error("Author and content cannot be empty")]
    EmptyFields,
    #[error("Comment not found")]
    NotFound,
    #[error(transparent)]
    Query(#[from] diesel::result::Error),
    #[error(transparent)]
    Connection(#[from] diesel::ConnectionError),
    #[error("blocking thread pool is gone")]
    Canceled,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::EmptyFields => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Query(_) | ApiError::Connection(_) | ApiError::Canceled => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status, self);
        }
        HttpResponse::build(status).json(ErrorResponse::new(self))
    }
}

impl From<BlockingError<ApiError>> for ApiError {
    fn from(err: BlockingError<ApiError>) -> Self {
        match err {
            BlockingError::Error(err) => err,
            BlockingError::Canceled => ApiError::Canceled,
        }
    }
}
