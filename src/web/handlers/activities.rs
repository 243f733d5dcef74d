//! Web handlers for the activity directory
//!
//! This module provides handlers for listing activities and for signing
//! students up for, or removing them from, an activity.

use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::{info, warn};

use crate::web::server::AppState;
use crate::web::models::{EmailQuery, MessageResponse};

/// List every activity with its participants
pub async fn list_activities(data: web::Data<AppState>) -> impl Responder {
    let directory = data.directory.read().await;
    HttpResponse::Ok().json(directory.list_all())
}

/// Sign a student up for an activity
pub async fn signup(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> impl Responder {
    let name = path.into_inner();
    let mut directory = data.directory.write().await;

    match directory.enroll(&name, &query.email) {
        Ok(message) => {
            info!("{}", message);
            HttpResponse::Ok().json(MessageResponse { message })
        },
        Err(e) => {
            warn!("Sign-up of {} for {} rejected: {}", query.email, name, e);
            e.error_response()
        }
    }
}

/// Remove a student from an activity
pub async fn unregister(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> impl Responder {
    let name = path.into_inner();
    let mut directory = data.directory.write().await;

    match directory.withdraw(&name, &query.email) {
        Ok(message) => {
            info!("{}", message);
            HttpResponse::Ok().json(MessageResponse { message })
        },
        Err(e) => {
            warn!("Unregister of {} from {} rejected: {}", query.email, name, e);
            e.error_response()
        }
    }
}
