//! Core types, service wire formats, and configuration for lens.
//!
//! This crate provides the foundational data structures used across all lens crates:
//! - [`types`]: Violation keys, violations, positions, flattened records, and summaries
//! - [`response`]: The evaluation service's violations response envelope
//! - [`config`]: Configuration loading from `.restlens.json`
//! - [`error`]: Errors raised while reading inputs from disk

pub mod config;
pub mod error;
pub mod response;
pub mod types;

pub use error::{LensError, Result};
