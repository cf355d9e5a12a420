// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::breach::LeakChecker;
use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_quantum_password,

        // Checker endpoints
        crate::api::handlers::check::check_password,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::PasswordResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::CheckPasswordRequest,
            crate::api::types::CheckPasswordResponse,
            crate::api::types::CheckErrorResponse,
            crate::api::types::HealthResponse,

            // Report models
            crate::models::StrengthReport,
            crate::models::StrengthLevel,
            crate::models::LeakReport,
            crate::models::RiskLevel
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Checker", description = "Strength scoring and breach lookup"),
        (name = "System", description = "System status")
    ),
    info(
        title = "PassGuard API",
        version = "0.1.0",
        description = "Password generation, strength scoring and breach exposure checks",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn cors(config: &Config) -> Cors {
    let cors = match &config.cors_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Content-Type", "Accept"])
        .max_age(3600)
}

pub async fn start_server(config: &Config, checker: LeakChecker) -> std::io::Result<()> {
    let bind = config.bind_address();
    log::info!("Starting PassGuard API server on {}:{}", bind.0, bind.1);

    let checker = web::Data::new(checker);
    let config = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&config))
            .wrap(Logger::default())
            .app_data(checker.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/generate_password",
            "/generate_quantum_secure_password",
            "/check_password",
            "/health",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == path), "{} missing from OpenAPI doc", path);
        }
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(routes::configure_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: types::HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "ok");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_cors_preflight_allows_frontend() {
        let mut config = Config::default();
        config.cors_origin = Some("http://localhost:3000".to_string());
        let app = test::init_service(
            App::new().wrap(cors(&config)).configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/check_password")
            .insert_header(("Origin", "http://localhost:3000"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
    }
}
