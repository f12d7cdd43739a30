//! Canned responses for the demo endpoint, which never reaches the bureau.

use rust_decimal::Decimal;

use super::offer_aggregator::ConsultationOutcome;
use crate::modules::offers::models::{CustomerRequest, OfferCatalog, OfferTerms, RankedPlan};

pub fn sample_outcome(request: &CustomerRequest) -> ConsultationOutcome {
    if request.wants_ranking() {
        ConsultationOutcome::Ranked(sample_plans())
    } else {
        ConsultationOutcome::Catalog(sample_catalog())
    }
}

pub fn sample_catalog() -> OfferCatalog {
    let standard = OfferTerms {
        min_amount: Decimal::from(1000),
        max_amount: Decimal::from(10000),
        min_installments: 1,
        max_installments: 12,
        monthly_interest_rate: Decimal::new(1, 2),
    };

    let mut catalog = OfferCatalog::new();
    catalog.insert("Banco do Brasil", "Crédito Consignado", standard.clone());
    catalog.insert("Banco do Brasil", "Crédito Pessoal", standard);
    catalog.insert(
        "Banco do BB",
        "Crédito Consignado",
        OfferTerms {
            min_amount: Decimal::from(1500),
            max_amount: Decimal::from(15000),
            min_installments: 5,
            max_installments: 16,
            monthly_interest_rate: Decimal::new(15, 3),
        },
    );
    catalog
}

pub fn sample_plans() -> Vec<RankedPlan> {
    vec![
        RankedPlan {
            institution_name: "Banco do Brasil".to_string(),
            modality_name: "Crédito Consignado".to_string(),
            total_payable: Decimal::from(1000),
            requested_amount: Decimal::from(1000),
            installment_amount: Decimal::from(100),
            monthly_interest_rate: Decimal::new(1, 2),
            installment_count: 12,
        },
        RankedPlan {
            institution_name: "Banco do BB".to_string(),
            modality_name: "Crédito Consignado".to_string(),
            total_payable: Decimal::from(1500),
            requested_amount: Decimal::from(1500),
            installment_amount: Decimal::from(150),
            monthly_interest_rate: Decimal::new(15, 3),
            installment_count: 16,
        },
    ]
}
