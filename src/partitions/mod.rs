//! # Partition annotations for model-parallel training
//!
//! Utilities to assign a sharding annotation to every parameter of a model for model-parallel
//! training. The model parameters are exposed as a nested mapping (`ParameterTree`) by the model
//! definition library; an ordered list of rules (`PartitionRuleSet`) maps each parameter path to
//! a `PartitionSpec` describing how the tensor is split across the logical device mesh, or marks
//! it as replicated.
//!
//! Resolution is a pure, synchronous transformation: the input tree is flattened, every leaf path
//! is resolved independently against the rules (first matching rule wins), and the results are
//! assembled back into a tree with the same structure. Coverage is mandatory: a parameter path
//! matched by no rule fails the whole resolution, as it signals that the rule table is out of
//! date with respect to the model architecture.
//!
//! ```
//! use rust_partitions::partitions::{
//!     LeafPartition, ParameterTree, PartitionRule, PartitionRuleSet, PartitionSpec,
//! };
//!
//! # fn main() -> Result<(), rust_partitions::RustPartitionsError> {
//! let rules = PartitionRuleSet::new(vec![
//!     PartitionRule::new(
//!         vec!["dense", "kernel"],
//!         LeafPartition::Sharded(PartitionSpec::from_axes(vec![None, Some("mp")])),
//!     )?,
//!     PartitionRule::new(vec!["bias"], LeafPartition::Replicated)?,
//! ]);
//!
//! let params = ParameterTree::unflatten(vec![
//!     (vec!["dense".to_string(), "kernel".to_string()], vec![512i64, 128]),
//!     (vec!["dense".to_string(), "bias".to_string()], vec![128i64]),
//! ])?;
//!
//! let partitions = rules.resolve(&params)?;
//! assert_eq!(
//!     partitions.get(&["dense", "bias"]),
//!     Some(&LeafPartition::Replicated)
//! );
//! # Ok(())
//! # }
//! ```

mod rules;
mod spec;
mod tree;

pub use rules::{PartitionRule, PartitionRuleSet};
pub use spec::{DimSharding, LeafPartition, PartitionSpec};
pub use tree::ParameterTree;
