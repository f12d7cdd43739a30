use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::credit_bureau::CreditBureau;
use super::http_credit_bureau::HttpCreditBureau;
use super::institution_discovery::InstitutionDiscovery;
use super::offer_fetcher::OfferFetcher;
use super::plan_ranker::PlanRanker;
use crate::config::UpstreamConfig;
use crate::core::Result;
use crate::modules::offers::models::{CustomerRequest, OfferCatalog, RankedPlan};

/// Answer to a consultation: the whole catalog, or the cheapest plans
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConsultationOutcome {
    Catalog(OfferCatalog),
    Ranked(Vec<RankedPlan>),
}

/// Runs discovery, offer fetching and (optionally) ranking for one customer.
///
/// Holds no per-request state; one instance is shared by every request.
pub struct OfferAggregator {
    discovery: InstitutionDiscovery,
    fetcher: OfferFetcher,
}

impl OfferAggregator {
    pub fn new(bureau: Arc<dyn CreditBureau>, lookup_concurrency: usize) -> Self {
        Self {
            discovery: InstitutionDiscovery::new(bureau.clone()),
            fetcher: OfferFetcher::new(bureau, lookup_concurrency),
        }
    }

    /// Aggregator backed by the HTTP bureau described by `config`
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let bureau = HttpCreditBureau::new(config)?;
        Ok(Self::new(Arc::new(bureau), config.lookup_concurrency))
    }

    /// Discovery followed by offer fetching
    pub async fn catalog(&self, cpf: &str) -> Result<OfferCatalog> {
        let institutions = self.discovery.discover(cpf).await?;
        Ok(self.fetcher.fetch(cpf, &institutions).await)
    }

    pub async fn consult(&self, request: &CustomerRequest) -> Result<ConsultationOutcome> {
        request.validate()?;

        let catalog = self.catalog(&request.cpf).await?;

        if !request.wants_ranking() {
            info!(
                cpf = %request.masked_cpf(),
                institutions = catalog.institutions().len(),
                offers = catalog.offer_count(),
                "Returning offer catalog"
            );
            return Ok(ConsultationOutcome::Catalog(catalog));
        }

        let plans = PlanRanker::rank(
            &catalog,
            request.requested_amount,
            request.installment_count,
        );

        info!(
            cpf = %request.masked_cpf(),
            requested_amount = %request.requested_amount,
            installment_count = request.installment_count,
            plans = plans.len(),
            "Returning ranked plans"
        );

        Ok(ConsultationOutcome::Ranked(plans))
    }
}
