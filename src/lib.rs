//! CreditAPI Library
//!
//! Credit offer aggregation: discovers which institutions serve a customer,
//! collects their offer terms and ranks the cheapest amortized plans.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::offers;
pub use modules::offers::{ConsultationOutcome, OfferAggregator};
