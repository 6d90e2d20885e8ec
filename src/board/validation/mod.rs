//! Task input validation.
//!
//! Provides the field rules and the default [`TaskValidator`] implementation
//! used before create commands are dispatched.
//!
//! [`TaskValidator`]: crate::board::ports::TaskValidator

pub mod rules;
mod service;

pub use service::DefaultTaskValidator;
