pub mod credit_bureau;
pub mod http_credit_bureau;
pub mod institution_discovery;
pub mod mockup;
pub mod offer_aggregator;
pub mod offer_fetcher;
pub mod plan_ranker;

pub use credit_bureau::CreditBureau;
pub use http_credit_bureau::HttpCreditBureau;
pub use institution_discovery::InstitutionDiscovery;
pub use offer_aggregator::{ConsultationOutcome, OfferAggregator};
pub use offer_fetcher::OfferFetcher;
pub use plan_ranker::{amortized_installment, PlanRanker, MAX_RANKED_PLANS};
