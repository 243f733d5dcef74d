//! HTTP mapping for directory errors

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::domain::DirectoryError;
use crate::web::models::ErrorResponse;

impl DirectoryError {
    /// Get the status code and detail message for this error
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            Self::ActivityNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::AlreadySignedUp { .. } | Self::NotSignedUp { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}

impl ResponseError for DirectoryError {
    fn status_code(&self) -> StatusCode {
        self.status_and_detail().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, detail) = self.status_and_detail();
        HttpResponse::build(status).json(ErrorResponse { detail })
    }
}
