//! # Task Manager Shared Library
//!
//! This crate contains the domain types, storage abstraction, and business rules
//! used by the task manager HTTP server.
//!
//! ## Module Organization
//!
//! - `models`: Task record and its enumerations
//! - `repository`: Storage contract and the in-memory store
//! - `services`: Business-rule layer between the HTTP endpoints and storage

pub mod models;
pub mod repository;
pub mod services;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
