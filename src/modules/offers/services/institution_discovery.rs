use std::sync::Arc;

use tracing::{error, info};

use super::credit_bureau::CreditBureau;
use crate::core::{AppError, Result};
use crate::modules::offers::models::{lookup_count, mask_cpf, Institution};

/// First pipeline stage: which institutions and modalities apply to a customer
pub struct InstitutionDiscovery {
    bureau: Arc<dyn CreditBureau>,
}

impl InstitutionDiscovery {
    pub fn new(bureau: Arc<dyn CreditBureau>) -> Self {
        Self { bureau }
    }

    /// A failure here aborts the whole consultation; there is no retry.
    pub async fn discover(&self, cpf: &str) -> Result<Vec<Institution>> {
        match self.bureau.discover(cpf).await {
            Ok(institutions) => {
                info!(
                    bureau = %self.bureau.name(),
                    cpf = %mask_cpf(cpf),
                    institutions = institutions.len(),
                    lookups = lookup_count(&institutions),
                    "Institutions discovered"
                );
                Ok(institutions)
            }
            Err(e) => {
                error!(
                    bureau = %self.bureau.name(),
                    cpf = %mask_cpf(cpf),
                    error = ?e,
                    "Institution discovery failed"
                );
                Err(match e {
                    AppError::UpstreamUnavailable(_) => e,
                    other => AppError::upstream_unavailable(other.to_string()),
                })
            }
        }
    }
}
