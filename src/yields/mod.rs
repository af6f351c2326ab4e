//! Yield comparison

pub mod comparator;

pub use comparator::*;
