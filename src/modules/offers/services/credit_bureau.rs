use async_trait::async_trait;

use crate::core::Result;
use crate::modules::offers::models::{Institution, Modality, OfferTerms};

/// Upstream directory that knows which institutions serve a customer and on what terms
#[async_trait]
pub trait CreditBureau: Send + Sync {
    /// List the institutions and modalities the customer is eligible for.
    /// Any failure must be reported as `AppError::UpstreamUnavailable`.
    async fn discover(&self, cpf: &str) -> Result<Vec<Institution>>;

    /// Fetch the offer terms for one (institution, modality) pair.
    /// Any failure must be reported as `AppError::OfferLookupFailed`.
    async fn fetch_terms(
        &self,
        cpf: &str,
        institution: &Institution,
        modality: &Modality,
    ) -> Result<OfferTerms>;

    /// Bureau name, used in logs
    fn name(&self) -> &str;
}
