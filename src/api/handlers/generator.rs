// src/api/handlers/generator.rs
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{debug, error};

use crate::api::types::{ErrorResponse, GenerateQuery, PasswordResponse};
use crate::generators::{
    ComplexGenerator, LengthPolicy, QuantumGenerator, COMPLEX_LENGTH, QUANTUM_LENGTH,
};

// A query string that does not deserialize (e.g. a repeated field) is treated
// like a missing length.
fn requested_length(req: &HttpRequest, policy: &LengthPolicy) -> usize {
    let query = web::Query::<GenerateQuery>::from_query(req.query_string()).ok();
    policy.parse(query.as_ref().and_then(|q| q.length.as_deref()))
}

/// Generate a complex password
///
/// Covers uppercase, lowercase, digits and two special sets, with no runs of
/// three identical characters, three digits or three letters.
#[utoipa::path(
    get,
    path = "/generate_password",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = PasswordResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_password(req: HttpRequest) -> impl Responder {
    let length = requested_length(&req, &COMPLEX_LENGTH);
    debug!("🔑 Generating complex password of length {}", length);

    match ComplexGenerator::new().generate(length) {
        Ok(password) => HttpResponse::Ok().json(PasswordResponse { password }),
        Err(e) => {
            error!("Complex password generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate password".to_string(),
            })
        }
    }
}

/// Generate a quantum-secure password
///
/// Draws from letters, digits, ASCII punctuation and printable Latin-1, then
/// appends an eight character time tag.
#[utoipa::path(
    get,
    path = "/generate_quantum_secure_password",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = PasswordResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_quantum_password(req: HttpRequest) -> impl Responder {
    let length = requested_length(&req, &QUANTUM_LENGTH);
    debug!("🔑 Generating quantum-secure password of length {}", length);

    match QuantumGenerator::new().generate(length) {
        Ok(password) => HttpResponse::Ok().json(PasswordResponse { password }),
        Err(e) => {
            error!("Quantum password generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate quantum-secure password".to_string(),
            })
        }
    }
}
