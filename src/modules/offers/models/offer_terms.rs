use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Eligibility envelope and monthly rate of one institution/modality offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferTerms {
    #[serde(rename = "valorMin", with = "rust_decimal::serde::arbitrary_precision")]
    pub min_amount: Decimal,
    #[serde(rename = "valorMax", with = "rust_decimal::serde::arbitrary_precision")]
    pub max_amount: Decimal,
    #[serde(rename = "QntParcelaMin")]
    pub min_installments: u32,
    #[serde(rename = "QntParcelaMax")]
    pub max_installments: u32,
    /// Monthly interest rate as a fraction (0.01 = 1% a month)
    #[serde(rename = "jurosMes", with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_interest_rate: Decimal,
}

impl OfferTerms {
    /// Build terms, rejecting envelopes that cannot describe a real offer
    pub fn new(
        min_amount: Decimal,
        max_amount: Decimal,
        min_installments: u32,
        max_installments: u32,
        monthly_interest_rate: Decimal,
    ) -> Result<Self> {
        let terms = Self {
            min_amount,
            max_amount,
            min_installments,
            max_installments,
            monthly_interest_rate,
        };
        terms.validate()?;
        Ok(terms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_amount > self.max_amount {
            return Err(AppError::validation(format!(
                "valorMin ({}) is greater than valorMax ({})",
                self.min_amount, self.max_amount
            )));
        }

        if self.min_installments > self.max_installments {
            return Err(AppError::validation(format!(
                "QntParcelaMin ({}) is greater than QntParcelaMax ({})",
                self.min_installments, self.max_installments
            )));
        }

        if self.monthly_interest_rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "jurosMes cannot be negative, got {}",
                self.monthly_interest_rate
            )));
        }

        Ok(())
    }

    pub fn covers_amount(&self, amount: Decimal) -> bool {
        self.min_amount <= amount && amount <= self.max_amount
    }

    pub fn covers_installments(&self, count: u32) -> bool {
        (self.min_installments..=self.max_installments).contains(&count)
    }

    /// True when both closed ranges contain the request
    pub fn covers(&self, amount: Decimal, count: u32) -> bool {
        self.covers_amount(amount) && self.covers_installments(count)
    }
}
