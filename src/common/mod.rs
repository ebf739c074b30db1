//! # Common (shared) utilities
//!
//! This module gathers the utilities shared across the crate: configuration
//! deserialization, error types and the resources interface used to reference
//! pretrained configuration, vocabulary and merges files.

pub(crate) mod activations;
pub mod config;
pub mod error;
pub mod resources;

pub use activations::Activation;
pub use config::Config;
pub use error::RustPartitionsError;
