use actix_web::web;

use super::handlers;

/// Configures the API routes
///
/// # Arguments
///
/// * `cfg` - The service configuration
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/chain", web::get().to(handlers::full_chain))
        .route("/transactions/new", web::post().to(handlers::new_transaction))
        .route("/transactions/pending", web::get().to(handlers::pending_transactions))
        .route("/mine", web::get().to(handlers::mine))
        .route("/validate", web::get().to(handlers::validate_chain));
}
