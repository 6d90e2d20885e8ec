//! Task board state management.
//!
//! The board keeps a collection of tasks grouped into status columns, applies
//! changes through a pure reducer, derives filtered, sorted and grouped views,
//! and persists the collection through a key-value port. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The state transition function in [`reducer`]
//! - Derived views in [`view`]
//! - Input validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod reducer;
pub mod services;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;
