//! Core data types and structures

pub mod pools;
pub mod comparison;
pub mod notification;

pub use pools::*;
pub use comparison::*;
pub use notification::*;
