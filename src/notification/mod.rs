//! Email notifications

pub mod template;
pub mod emailjs;
pub mod dispatcher;

pub use emailjs::*;
pub use dispatcher::*;
