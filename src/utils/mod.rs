//! Utility functions and helpers

pub mod format;
pub mod logging;
pub mod display;

pub use format::*;
pub use logging::*;
pub use display::*;
