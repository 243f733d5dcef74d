use std::sync::Arc;
use tokio::sync::RwLock;
use actix_web::{web, App, HttpResponse, HttpServer, middleware};
use actix_web::error::InternalError;
use actix_files as fs;
use log::{info, warn};

use crate::config::ServerConfig;
use crate::domain::ActivityDirectory;
use crate::web::handlers;
use crate::web::models::ErrorResponse;

/// Start the web server for the activities API
pub async fn start_web_server(
    config: ServerConfig,
    directory: Arc<RwLock<ActivityDirectory>>,
) -> std::io::Result<()> {
    info!("Starting web server on http://{}:{}", config.host, config.port);

    if !config.static_dir.is_dir() {
        warn!("Static directory {} does not exist", config.static_dir.display());
    }

    // Create shared application state
    let app_state = web::Data::new(AppState::new(directory));
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            // Static files
            .service(fs::Files::new("/static", static_dir.clone()))
            .configure(configure_routes)
            // Default route for 404
            .default_service(web::to(handlers::pages::not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await
}

/// Register the page and API routes on an app
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        // Page routes
        .route("/", web::get().to(handlers::pages::index))
        // API routes
        .route("/activities", web::get().to(handlers::activities::list_activities))
        .route("/activities/{name}/signup", web::post().to(handlers::activities::signup))
        .route("/activities/{name}/unregister", web::delete().to(handlers::activities::unregister));
}

/// Reject malformed query strings with 422 and a `detail` body
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(ErrorResponse { detail }))
            .into()
    })
}

/// Shared application state for web handlers
pub struct AppState {
    pub directory: Arc<RwLock<ActivityDirectory>>,
}

impl AppState {
    pub fn new(directory: Arc<RwLock<ActivityDirectory>>) -> Self {
        Self { directory }
    }
}
