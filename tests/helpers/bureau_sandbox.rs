// Credit Bureau Sandbox
//
// Stands up an httpmock server speaking the bureau's two endpoints
// (POST /credito/ and POST /oferta/) so the real HTTP client is exercised.

use std::time::Duration;

use creditapi::config::UpstreamConfig;
use creditapi::OfferAggregator;
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};

use super::test_data::terms;

pub struct BureauSandbox {
    pub server: MockServer,
}

impl BureauSandbox {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start_async().await,
        }
    }

    /// Upstream configuration pointing at the sandbox, with a trailing slash
    /// like the deployed URL_START_POINT values
    pub fn config(&self) -> UpstreamConfig {
        UpstreamConfig::new(format!("{}/", self.server.base_url()))
    }

    pub fn aggregator(&self) -> OfferAggregator {
        OfferAggregator::from_config(&self.config()).expect("aggregator should build")
    }

    /// Discovery answers with the given `instituicoes` array for this CPF
    pub async fn discovery(&self, cpf: &str, institutions: Value) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/credito/")
                    .json_body(json!({ "cpf": cpf }));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "instituicoes": institutions }));
            })
            .await
    }

    /// Discovery answers with a non-success status
    pub async fn discovery_failure(&self, cpf: &str, status: u16) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/credito/")
                    .json_body(json!({ "cpf": cpf }));
                then.status(status).body("cpf not found");
            })
            .await
    }

    /// Discovery answers 200 with an arbitrary body
    pub async fn discovery_raw(&self, body: &str) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(POST).path("/credito/");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(body);
            })
            .await
    }

    /// Offer lookup for one (institution, modality) pair
    pub async fn offer(
        &self,
        cpf: &str,
        institution_id: Value,
        modality_code: Value,
        terms: Value,
    ) -> Mock<'_> {
        self.offer_delayed(cpf, institution_id, modality_code, terms, Duration::ZERO)
            .await
    }

    pub async fn offer_delayed(
        &self,
        cpf: &str,
        institution_id: Value,
        modality_code: Value,
        terms: Value,
        delay: Duration,
    ) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(POST).path("/oferta/").json_body(json!({
                    "cpf": cpf,
                    "instituicao_id": institution_id,
                    "codModalidade": modality_code,
                }));
                then.status(200)
                    .header("content-type", "application/json")
                    .delay(delay)
                    .json_body(terms);
            })
            .await
    }

    /// Offer lookup for one pair answering with a non-success status
    pub async fn offer_failure(
        &self,
        cpf: &str,
        institution_id: Value,
        modality_code: Value,
        status: u16,
    ) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(POST).path("/oferta/").json_body(json!({
                    "cpf": cpf,
                    "instituicao_id": institution_id,
                    "codModalidade": modality_code,
                }));
                then.status(status);
            })
            .await
    }

    /// Matches any offer lookup; used to prove none was issued
    pub async fn any_offer(&self) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(POST).path("/oferta/");
                then.status(200).json_body(terms(1000, 10000, 1, 12, "0.01"));
            })
            .await
    }
}
