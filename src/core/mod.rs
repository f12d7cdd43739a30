pub mod error;

pub use error::{AppError, Result, CPF_LOOKUP_FAILED};
