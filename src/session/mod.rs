//! User session

pub mod state;

pub use state::*;
