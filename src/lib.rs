//! Partition annotations and model metadata for model-parallel training of transformer-based
//! models.
//!
//! # Quick Start
//!
//! This crate provides the rule-based mapping from model parameter paths to the partition
//! specifications consumed by a sharded execution engine, together with the configuration and
//! tokenizer definitions of the supported architectures. Parameter trees and file structures are
//! expected to follow the conventions of the
//! [Transformers library](https://github.com/huggingface/transformers).
//!
//! The entry point for partitioning is a `PartitionRuleSet` built from an ordered list of
//! `PartitionRule`s, each mapping a windowed sequence of parameter path patterns to a sharding
//! decision. Static rule tables are provided per supported architecture (see the [`t5`] module);
//! resolution assigns a `PartitionSpec` or a replicated placement to every parameter of the model
//! and fails if any parameter is left uncovered:
//!
//! ```
//! use rust_partitions::partitions::ParameterTree;
//! use rust_partitions::t5::set_t5_partitions;
//!
//! # fn main() -> Result<(), rust_partitions::RustPartitionsError> {
//! let params = ParameterTree::unflatten(vec![
//!     (
//!         vec!["shared".to_string(), "embedding".to_string()],
//!         vec![32128i64, 512],
//!     ),
//!     (
//!         vec!["lm_head".to_string(), "kernel".to_string()],
//!         vec![512i64, 32128],
//!     ),
//! ])?;
//!
//! let partitions = set_t5_partitions(&params)?;
//! # Ok(())
//! # }
//! ```
//!
//! Pretrained resources (configuration, vocabulary and merges files) are referenced by the
//! `(name, url)` tables of each model module and can be fetched and cached locally using
//! `RemoteResource::from_pretrained` (requires the default `remote` feature).

pub mod common;
pub mod linformer;
pub mod partitions;
pub mod t5;

pub use common::error::RustPartitionsError;
pub use common::resources;
pub use common::{Activation, Config};
pub use partitions::{
    DimSharding, LeafPartition, ParameterTree, PartitionRule, PartitionRuleSet, PartitionSpec,
};
