// Contract tests for POST /mockup_data/
//
// The demo endpoint never reaches the bureau, so no aggregator is registered.

use actix_web::{test, App};
use creditapi::modules::offers;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_mockup_returns_sample_catalog() {
    let app = test::init_service(App::new().configure(offers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/mockup_data/")
        .set_json(json!({ "cpf": "00000000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "Banco do Brasil": {
                "Crédito Consignado": {
                    "valorMin": 1000,
                    "valorMax": 10000,
                    "QntParcelaMin": 1,
                    "QntParcelaMax": 12,
                    "jurosMes": 0.01
                },
                "Crédito Pessoal": {
                    "valorMin": 1000,
                    "valorMax": 10000,
                    "QntParcelaMin": 1,
                    "QntParcelaMax": 12,
                    "jurosMes": 0.01
                }
            },
            "Banco do BB": {
                "Crédito Consignado": {
                    "valorMin": 1500,
                    "valorMax": 15000,
                    "QntParcelaMin": 5,
                    "QntParcelaMax": 16,
                    "jurosMes": 0.015
                }
            }
        })
    );
}

#[actix_web::test]
async fn test_mockup_returns_sample_plans() {
    let app = test::init_service(App::new().configure(offers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/mockup_data/")
        .set_json(json!({ "cpf": "00000000000", "valorSolicitado": 1000, "parcelas": 12 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let plans = body.as_array().expect("sample plans must be an array");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["instituicaoFinanceira"], "Banco do Brasil");
    assert_eq!(plans[1]["instituicaoFinanceira"], "Banco do BB");
    assert_eq!(plans[1]["qntParcelas"], 16);
}
