// src/api/routes.rs
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;

use super::handlers;
use super::types::CheckErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed check bodies get the same generic reply as a missing password
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Password generators
    cfg.route("/generate_password", web::get().to(handlers::generator::generate_password))
        .route(
            "/generate_quantum_secure_password",
            web::get().to(handlers::generator::generate_quantum_password),
        );

    // Strength and breach check
    cfg.route("/check_password", web::post().to(handlers::check::check_password));

    // System status
    cfg.route("/health", web::get().to(handlers::system::get_status));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected password check body: {}", err);
    InternalError::from_response(err, HttpResponse::BadRequest().json(CheckErrorResponse::generic()))
        .into()
}
