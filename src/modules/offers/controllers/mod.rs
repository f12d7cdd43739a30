pub mod offer_controller;

pub use offer_controller::{configure, consulta, mockup_data};
