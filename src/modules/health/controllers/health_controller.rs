use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "creditapi";

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Service metadata returned at the root path
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: String,
}

/// GET /health - Liveness probe
/// Returns 200 if the application can respond to requests.
/// The credit bureau is not contacted.
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "API para consulta de ofertas de crédito de acordo com o cpf do cliente."
            .to_string(),
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/", web::get().to(index));
}
