//! # Person Record
//!
//! > **Field visibility in one struct.**
//!
//! This crate shows how Rust's module-scoped privacy splits a record into fields anyone can
//! touch and fields only the defining module can touch. The check happens at compile time:
//! there is no runtime guard to bypass.
//!
//! ## Module Tour
//!
//! ### 1. The Record ([`domain`])
//! - [`Person`](domain::Person) has `pub first_name`, `pub last_name`, and a private `secret`.
//! - [`new_person`](domain::new_person) is the only way to build one from outside `domain::person`.
//! - [`PersonUpdate`](domain::PersonUpdate) changes the exported fields and has no slot for the secret.
//!
//! ### 2. Observability ([`telemetry`])
//! - [`setup_tracing`](telemetry::setup_tracing) installs a `tracing` subscriber filtered by `RUST_LOG`.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```
//!
//! The doctests on [`Person`](domain::Person) include `compile_fail` cases proving that the
//! secret cannot be read, written, or set through a struct literal from outside its module.

pub mod domain;
pub mod telemetry;
