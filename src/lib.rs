//! Blendable - yield optimizer for Blend Protocol pools
//!
//! Compares the user's current pool against the best yield in the catalog
//! and can email the comparison through EmailJS.

pub mod config;
pub mod types;
pub mod errors;
pub mod pools;
pub mod yields;
pub mod notification;
pub mod session;
pub mod utils;
pub mod cli;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{BlendableError, BlendableResult};
pub use types::*;
