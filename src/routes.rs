use crate::handlers;
use actix_web::web;

/// Configures the public HTTP surface. Everything is unauthenticated: the
/// caller is a browser extension with no fixed origin.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::info_handlers::index));
    cfg.route("/privacy", web::get().to(handlers::info_handlers::privacy_policy));

    // API routes (/api/*)
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health::health_check))
            .route("/explain", web::post().to(handlers::explain_handlers::explain)),
    );
}
