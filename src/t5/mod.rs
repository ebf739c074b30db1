//! # T5: Text-To-Text Transfer Transformer (Raffel et al.)
//!
//! Model-parallel partition rules for the T5 family of sequence-to-sequence models
//! ([https://arxiv.org/abs/1910.10683](https://arxiv.org/abs/1910.10683) Raffel, Shazeer, Roberts,
//! Lee, Narang, Matena, Zhou, Li, Liu, 2019), including the instruction-tuned T0 variants
//! ([https://arxiv.org/abs/2110.08207](https://arxiv.org/abs/2110.08207) Sanh et al., 2021).
//!
//! The rule table maps every parameter of the architecture to a sharding annotation over a device
//! mesh with a single model-parallel axis. Parameter names are expected to follow the structure of
//! the [Transformers library](https://github.com/huggingface/transformers) Flax T5 implementation.
//! Pretrained resources for the T0 models are available and can be downloaded using
//! RemoteResources.
//!
//! ```no_run
//! use rust_partitions::partitions::ParameterTree;
//! use rust_partitions::t5::set_t5_partitions;
//!
//! # fn main() -> Result<(), rust_partitions::RustPartitionsError> {
//! let params: ParameterTree<Vec<i64>> = ParameterTree::unflatten(vec![(
//!     vec!["shared".to_string(), "embedding".to_string()],
//!     vec![32128, 512],
//! )])?;
//! let partitions = set_t5_partitions(&params)?;
//! # Ok(())
//! # }
//! ```

mod t5_partitions;

pub use t5_partitions::{
    set_t5_partitions, t5_partition_rules, T0ConfigResources, T0ModelResources, T0VocabResources,
    MODEL_PARALLEL_AXIS,
};
