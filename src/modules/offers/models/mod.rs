pub mod catalog;
pub mod customer_request;
pub mod institution;
pub mod offer_terms;
pub mod ranked_plan;

pub use catalog::{CatalogEntry, InstitutionOffers, ModalityOffer, OfferCatalog};
pub use customer_request::{mask_cpf, CustomerRequest};
pub use institution::{lookup_count, DiscoveryResponse, Institution, Modality, UpstreamId};
pub use offer_terms::OfferTerms;
pub use ranked_plan::RankedPlan;
