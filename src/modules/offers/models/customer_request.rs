use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Body of a consultation: who is asking and, optionally, for how much
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRequest {
    /// Customer taxpayer ID (CPF), forwarded verbatim upstream
    pub cpf: String,
    #[serde(
        rename = "valorSolicitado",
        default,
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub requested_amount: Decimal,
    #[serde(rename = "parcelas", default)]
    pub installment_count: u32,
}

impl CustomerRequest {
    pub fn new(cpf: impl Into<String>, requested_amount: Decimal, installment_count: u32) -> Self {
        Self {
            cpf: cpf.into(),
            requested_amount,
            installment_count,
        }
    }

    /// Catalog-only consultation (no amount, no installments)
    pub fn catalog_only(cpf: impl Into<String>) -> Self {
        Self::new(cpf, Decimal::ZERO, 0)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cpf.trim().is_empty() {
            return Err(AppError::validation("cpf must not be empty"));
        }

        if self.requested_amount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "valorSolicitado cannot be negative, got {}",
                self.requested_amount
            )));
        }

        Ok(())
    }

    /// Ranking only happens when both the amount and the installment count are set
    pub fn wants_ranking(&self) -> bool {
        !self.requested_amount.is_zero() && self.installment_count != 0
    }

    pub fn masked_cpf(&self) -> String {
        mask_cpf(&self.cpf)
    }
}

/// Keeps the last two characters of a CPF for log correlation
pub fn mask_cpf(cpf: &str) -> String {
    let visible: String = cpf
        .chars()
        .rev()
        .take(2)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("***{}", visible)
}
