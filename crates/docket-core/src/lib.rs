//! Core types and trait definitions for the Docket precedent catalogue.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod precedent;
pub mod query;
pub mod stats;
pub mod store;
pub mod suggest;

pub use error::{Error, Result};
