use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::net::TcpListener;

mod clients;
mod config;
mod error;
mod handlers;
mod models;
mod routes;

use crate::clients::openai_client::OpenAiClient;
use crate::config::AppSettings;
use crate::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load application settings
    let app_settings = match AppSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load application settings: {}", e);
            log::error!("Cannot start server without valid settings");
            std::process::exit(1);
        }
    };

    // Initialize the completion client (shared across all workers)
    let openai_client = match OpenAiClient::new(&app_settings) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to initialize OpenAI client: {}", e);
            log::error!("Cannot start server without a working completion client");
            std::process::exit(1);
        }
    };

    let host = &app_settings.server.host;
    let port = app_settings.server.port;

    log::info!(
        "Starting {} API ({}) at http://{}:{}",
        app_settings.app.name,
        app_settings.app.environment,
        host,
        port
    );

    let server_addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(server_addr)?;

    HttpServer::new(move || {
        let openai_client = openai_client.clone();

        // The caller is a browser extension with no fixed origin, so the API
        // accepts cross-origin requests from anywhere.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(openai_client))
            .configure(configure_routes)
    })
    .listen(listener)?
    .run()
    .await
}
