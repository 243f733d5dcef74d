use log::{info, error};
use std::process;
use std::sync::Arc;
use tokio::sync::RwLock;

mod config;
mod domain;
mod web;

use crate::config::ServerConfig;
use crate::domain::ActivityDirectory;
use crate::domain::seed::{default_activities, load_seed_file};
use crate::web::server::start_web_server;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    info!("Starting Mergington activities API...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    // Build the activity directory from the configured seed
    let seed = match &config.seed_file {
        Some(path) => load_seed_file(path),
        None => Ok(default_activities()),
    };
    let directory = match seed.and_then(ActivityDirectory::from_seed) {
        Ok(directory) => {
            info!("Serving {} activities", directory.len());
            Arc::new(RwLock::new(directory))
        }
        Err(e) => {
            error!("Failed to initialize activities: {}", e);
            process::exit(1);
        }
    };

    // Runs until Ctrl+C
    if let Err(e) = start_web_server(config, directory).await {
        error!("Web server error: {}", e);
        process::exit(1);
    }

    info!("Mergington activities API shutdown complete");
}
