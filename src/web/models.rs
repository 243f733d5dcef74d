use serde::{Serialize, Deserialize};

/// Query string for sign-up and unregister requests
#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Successful write response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
