// Integration tests for the HTTP credit bureau client
//
// Wire format of both upstream calls and the mapping of upstream failures
// onto UpstreamUnavailable / OfferLookupFailed.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::time::Duration;

use creditapi::core::AppError;
use creditapi::offers::{CreditBureau, HttpCreditBureau, Institution};
use helpers::*;
use httpmock::prelude::*;
use rust_decimal_macros::dec;
use serde_json::json;

#[actix_web::test]
async fn test_discover_decodes_institutions() {
    let sandbox = BureauSandbox::start().await;
    let mock = sandbox.discovery(CPF, two_banks()).await;
    let bureau = HttpCreditBureau::new(&sandbox.config()).unwrap();

    let institutions = bureau.discover(CPF).await.unwrap();

    mock.assert_async().await;
    assert_eq!(institutions.len(), 2);
    assert_eq!(institutions[0].name, "Banco do Brasil");
    assert_eq!(institutions[0].modalities.len(), 2);
    assert_eq!(institutions[0].modalities[1].name, "Crédito Consignado");
}

#[actix_web::test]
async fn test_discover_non_success_is_upstream_unavailable() {
    let sandbox = BureauSandbox::start().await;
    sandbox.discovery_failure(CPF, 404).await;
    let bureau = HttpCreditBureau::new(&sandbox.config()).unwrap();

    let err = bureau.discover(CPF).await.unwrap_err();

    assert!(matches!(err, AppError::UpstreamUnavailable(_)));
}

#[actix_web::test]
async fn test_discover_timeout_is_upstream_unavailable() {
    let sandbox = BureauSandbox::start().await;
    sandbox
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/credito/");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!({ "instituicoes": [] }));
        })
        .await;

    let mut config = sandbox.config();
    config.timeout_secs = 1;
    let bureau = HttpCreditBureau::new(&config).unwrap();

    let err = bureau.discover(CPF).await.unwrap_err();
    assert!(matches!(err, AppError::UpstreamUnavailable(_)));
}

#[actix_web::test]
async fn test_discover_unreachable_bureau_is_upstream_unavailable() {
    let mut config = creditapi::config::UpstreamConfig::new("http://127.0.0.1:9/");
    config.timeout_secs = 2;
    let bureau = HttpCreditBureau::new(&config).unwrap();

    let err = bureau.discover(CPF).await.unwrap_err();
    assert!(matches!(err, AppError::UpstreamUnavailable(_)));
}

#[actix_web::test]
async fn test_fetch_terms_sends_ids_verbatim() {
    let sandbox = BureauSandbox::start().await;
    let mock = sandbox
        .offer(
            CPF,
            json!("inst-7"),
            json!(13),
            terms(1000, 10000, 1, 12, "0.0199"),
        )
        .await;
    let bureau = HttpCreditBureau::new(&sandbox.config()).unwrap();

    let institution = Institution::new("inst-7", "Banco Sete").with_modality(13, "Consignado");
    let terms = bureau
        .fetch_terms(CPF, &institution, &institution.modalities[0])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(terms.monthly_interest_rate, dec!(0.0199));
    assert_eq!(terms.max_amount, dec!(10000));
}

#[actix_web::test]
async fn test_fetch_terms_failure_is_offer_lookup_failed() {
    let sandbox = BureauSandbox::start().await;
    sandbox.offer_failure(CPF, json!(1), json!("3"), 500).await;
    let bureau = HttpCreditBureau::new(&sandbox.config()).unwrap();

    let institution = Institution::new(1, "Banco").with_modality("3", "Pessoal");
    let err = bureau
        .fetch_terms(CPF, &institution, &institution.modalities[0])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::OfferLookupFailed(ref cause) if cause.contains("500")));
}

#[actix_web::test]
async fn test_fetch_terms_malformed_body_is_offer_lookup_failed() {
    let sandbox = BureauSandbox::start().await;
    sandbox
        .offer(CPF, json!(1), json!("3"), json!({ "valorMin": 1000 }))
        .await;
    let bureau = HttpCreditBureau::new(&sandbox.config()).unwrap();

    let institution = Institution::new(1, "Banco").with_modality("3", "Pessoal");
    let err = bureau
        .fetch_terms(CPF, &institution, &institution.modalities[0])
        .await
        .unwrap_err();

    assert!(
        matches!(err, AppError::OfferLookupFailed(ref cause) if cause.starts_with("JSON error"))
    );
}
