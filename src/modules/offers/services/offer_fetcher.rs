use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use super::credit_bureau::CreditBureau;
use crate::modules::offers::models::{mask_cpf, Institution, Modality, OfferCatalog, OfferTerms};

/// Second pipeline stage: turns discovered institutions into an offer catalog.
///
/// Lookups run concurrently up to `concurrency` at a time. Each one owns a
/// pre-allocated (institution, modality) slot, so the catalog comes out in
/// discovery order whatever order the responses arrive in.
pub struct OfferFetcher {
    bureau: Arc<dyn CreditBureau>,
    concurrency: usize,
}

impl OfferFetcher {
    pub fn new(bureau: Arc<dyn CreditBureau>, concurrency: usize) -> Self {
        Self {
            bureau,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn fetch(&self, cpf: &str, institutions: &[Institution]) -> OfferCatalog {
        let mut slots: Vec<Vec<Option<OfferTerms>>> = institutions
            .iter()
            .map(|institution| vec![None; institution.modalities.len()])
            .collect();

        let lookups = institutions
            .iter()
            .enumerate()
            .flat_map(|(i, institution)| {
                institution
                    .modalities
                    .iter()
                    .enumerate()
                    .map(move |(m, modality)| (i, m, institution, modality))
            });

        let mut completed = stream::iter(lookups)
            .map(|(i, m, institution, modality)| async move {
                (i, m, self.lookup(cpf, institution, modality).await)
            })
            .buffer_unordered(self.concurrency);

        while let Some((i, m, terms)) = completed.next().await {
            slots[i][m] = terms;
        }

        let mut catalog = OfferCatalog::new();
        for (institution, terms) in institutions.iter().zip(slots) {
            let entry = catalog.insert_institution(institution.name.as_str());
            for (modality, terms) in institution.modalities.iter().zip(terms) {
                if let Some(terms) = terms {
                    entry.insert(modality.name.as_str(), terms);
                }
            }
        }

        debug!(
            cpf = %mask_cpf(cpf),
            institutions = catalog.institutions().len(),
            offers = catalog.offer_count(),
            "Offer catalog assembled"
        );

        catalog
    }

    /// A failed lookup only drops its own pair from the catalog
    async fn lookup(
        &self,
        cpf: &str,
        institution: &Institution,
        modality: &Modality,
    ) -> Option<OfferTerms> {
        let outcome = self
            .bureau
            .fetch_terms(cpf, institution, modality)
            .await
            .and_then(|terms| terms.validate().map(|_| terms));

        match outcome {
            Ok(terms) => Some(terms),
            Err(e) => {
                warn!(
                    bureau = %self.bureau.name(),
                    institution = %institution.name,
                    institution_id = %institution.id,
                    modality = %modality.name,
                    modality_code = %modality.code,
                    error = %e,
                    "Skipping offer after failed lookup"
                );
                None
            }
        }
    }
}
