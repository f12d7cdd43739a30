use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An eligible offer priced for a concrete amount and installment count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlan {
    #[serde(rename = "instituicaoFinanceira")]
    pub institution_name: String,
    #[serde(rename = "modalidadeCredito")]
    pub modality_name: String,
    /// Installment amount times installment count
    #[serde(rename = "valorAPagar", with = "rust_decimal::serde::arbitrary_precision")]
    pub total_payable: Decimal,
    #[serde(rename = "valorSolicitado", with = "rust_decimal::serde::arbitrary_precision")]
    pub requested_amount: Decimal,
    #[serde(rename = "valorParcela", with = "rust_decimal::serde::arbitrary_precision")]
    pub installment_amount: Decimal,
    #[serde(rename = "taxaJuros", with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_interest_rate: Decimal,
    #[serde(rename = "qntParcelas")]
    pub installment_count: u32,
}
