//! Pool catalog and validation

pub mod catalog;
pub mod validation;

pub use catalog::*;
pub use validation::*;
