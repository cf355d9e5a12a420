// src/api/handlers/check.rs
use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{CheckErrorResponse, CheckPasswordRequest, CheckPasswordResponse};
use crate::breach::LeakChecker;
use crate::strength::StrengthScorer;

/// Check a password
///
/// Scores the password and looks it up in the breach corpus. A failed lookup
/// is reported inside `leak_check.details` and never fails the request.
#[utoipa::path(
    post,
    path = "/check_password",
    tag = "Checker",
    request_body = CheckPasswordRequest,
    responses(
        (status = 200, description = "Strength and breach report", body = CheckPasswordResponse),
        (status = 400, description = "Missing or malformed password", body = CheckErrorResponse)
    )
)]
pub async fn check_password(
    checker: web::Data<LeakChecker>,
    body: web::Json<CheckPasswordRequest>,
) -> impl Responder {
    let Some(password) = body.into_inner().password else {
        warn!("Password check request without a password field");
        return HttpResponse::BadRequest().json(CheckErrorResponse::generic());
    };

    let report = StrengthScorer::new().score(&password);
    debug!("📊 Strength score {}/{} ({})", report.score, report.max_score, report.strength);

    let leak_check = checker.check_leak(&password).await;

    HttpResponse::Ok().json(CheckPasswordResponse { report, leak_check })
}
