use actix_web::{http::header, HttpResponse, Responder};

use crate::web::models::ErrorResponse;

/// Landing page of the bundled front-end
pub const INDEX_PAGE: &str = "/static/index.html";

/// Redirect the root to the front-end
pub async fn index() -> impl Responder {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, INDEX_PAGE))
        .finish()
}

/// 404 Not Found handler
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse {
        detail: "Not Found".to_string(),
    })
}
