use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::credit_bureau::CreditBureau;
use crate::config::UpstreamConfig;
use crate::core::{AppError, Result};
use crate::modules::offers::models::{
    DiscoveryResponse, Institution, Modality, OfferTerms, UpstreamId,
};

const DISCOVERY_PATH: &str = "credito/";
const OFFER_PATH: &str = "oferta/";

/// Credit bureau reached over HTTP/JSON
pub struct HttpCreditBureau {
    client: Client,
    discovery_url: String,
    offer_url: String,
}

#[derive(Serialize)]
struct DiscoveryRequest<'a> {
    cpf: &'a str,
}

#[derive(Serialize)]
struct OfferRequest<'a> {
    cpf: &'a str,
    instituicao_id: &'a UpstreamId,
    #[serde(rename = "codModalidade")]
    cod_modalidade: &'a UpstreamId,
}

impl HttpCreditBureau {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            discovery_url: config.endpoint(DISCOVERY_PATH),
            offer_url: config.endpoint(OFFER_PATH),
        }
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;

        // Decoded through serde_json so decimals never pass through f64
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CreditBureau for HttpCreditBureau {
    async fn discover(&self, cpf: &str) -> Result<Vec<Institution>> {
        let response: DiscoveryResponse = self
            .post_json(&self.discovery_url, &DiscoveryRequest { cpf })
            .await
            .map_err(|e| AppError::upstream_unavailable(e.to_string()))?;

        Ok(response.institutions)
    }

    async fn fetch_terms(
        &self,
        cpf: &str,
        institution: &Institution,
        modality: &Modality,
    ) -> Result<OfferTerms> {
        let request = OfferRequest {
            cpf,
            instituicao_id: &institution.id,
            cod_modalidade: &modality.code,
        };

        self.post_json(&self.offer_url, &request)
            .await
            .map_err(|e| AppError::offer_lookup_failed(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
