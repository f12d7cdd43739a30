pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::{configure, consulta, mockup_data};
pub use models::{CustomerRequest, Institution, Modality, OfferCatalog, OfferTerms, RankedPlan};
pub use services::{
    ConsultationOutcome, CreditBureau, HttpCreditBureau, OfferAggregator, PlanRanker,
};
