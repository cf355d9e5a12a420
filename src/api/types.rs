// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{LeakReport, StrengthReport};

// Generator requests and responses
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Requested length. Out-of-range values are clamped; anything that is
    /// not an integer falls back to the default.
    pub length: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordResponse {
    /// Generated password
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Generic error message
    pub error: String,
}

// Password check requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckPasswordRequest {
    /// Password to score and look up
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckPasswordResponse {
    #[serde(flatten)]
    pub report: StrengthReport,
    /// Breach exposure result
    pub leak_check: LeakReport,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckErrorResponse {
    /// Always "Error"
    pub strength: String,
    /// Generic error message
    pub feedback: Vec<String>,
}

impl CheckErrorResponse {
    pub fn generic() -> Self {
        Self {
            strength: "Error".to_string(),
            feedback: vec!["An error occurred while checking the password.".to_string()],
        }
    }
}

// System
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server is up
    pub status: String,
    /// Crate version
    pub version: String,
}
