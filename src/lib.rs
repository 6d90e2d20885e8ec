//! Taskboard: task state management for list and kanban views.
//!
//! This crate provides the engine behind a single-user task tracker: a
//! reducer-driven state machine owning the task collection, derived views
//! for filtering, sorting and grouping by status, and persistence of the
//! collection through a key-value storage port.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`board`]: Task model, reducer, views, validation and state container

pub mod board;
