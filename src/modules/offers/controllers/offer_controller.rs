// HTTP handlers for credit offer consultation
//
// Endpoints:
// - POST /consulta/     - Offer catalog or the three cheapest plans for a CPF
// - POST /mockup_data/  - Same contract with canned data, no upstream calls

use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::offers::{
    models::CustomerRequest,
    services::{mockup, OfferAggregator},
};

/// POST /consulta/
///
/// # Request Body
/// ```json
/// {"cpf": "12345678900", "valorSolicitado": 5000, "parcelas": 12}
/// ```
/// `valorSolicitado` and `parcelas` default to 0.
///
/// # Returns
/// - 200: JSON object `institution → modality → terms` when either
///   `valorSolicitado` or `parcelas` is 0, otherwise a JSON array with up to
///   three plans ordered by `valorAPagar`
/// - 400: `Erro ao consultar CPF` when the bureau cannot be consulted, or an
///   invalid request body
pub async fn consulta(
    request: web::Json<CustomerRequest>,
    aggregator: web::Data<OfferAggregator>,
) -> Result<HttpResponse> {
    let outcome = aggregator.consult(&request).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// POST /mockup_data/
///
/// Accepts any CPF. Returns a sample catalog when `valorSolicitado` or
/// `parcelas` is 0, otherwise a sample list of plans.
pub async fn mockup_data(request: web::Json<CustomerRequest>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(mockup::sample_outcome(&request)))
}

/// Configure offer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["/consulta", "/consulta/"]).route(web::post().to(consulta)))
        .service(
            web::resource(["/mockup_data", "/mockup_data/"]).route(web::post().to(mockup_data)),
        );
}
