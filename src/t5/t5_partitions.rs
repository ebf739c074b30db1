// Copyright 2021 The Google Research Authors and The HuggingFace Team All rights reserved.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::common::error::RustPartitionsError;
use crate::partitions::{
    LeafPartition, ParameterTree, PartitionRule, PartitionRuleSet, PartitionSpec,
};

/// Name of the logical mesh axis used for model parallelism.
pub const MODEL_PARALLEL_AXIS: &str = "mp";

/// # T0 Pretrained model weight files
pub struct T0ModelResources;

/// # T0 Pretrained model config files
pub struct T0ConfigResources;

/// # T0 Pretrained model vocab files
pub struct T0VocabResources;

impl T0ModelResources {
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0>.
    pub const T0: (&'static str, &'static str) = (
        "t0/model",
        "https://huggingface.co/bigscience/T0/resolve/main/pytorch_model.bin",
    );
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0_3B>.
    pub const T0_3B: (&'static str, &'static str) = (
        "t0-3b/model",
        "https://huggingface.co/bigscience/T0_3B/resolve/main/pytorch_model.bin",
    );
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0pp>.
    pub const T0PP: (&'static str, &'static str) = (
        "t0pp/model",
        "https://huggingface.co/bigscience/T0pp/resolve/main/pytorch_model.bin",
    );
}

impl T0ConfigResources {
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0>.
    pub const T0: (&'static str, &'static str) = (
        "t0/config",
        "https://huggingface.co/bigscience/T0/resolve/main/config.json",
    );
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0_3B>.
    pub const T0_3B: (&'static str, &'static str) = (
        "t0-3b/config",
        "https://huggingface.co/bigscience/T0_3B/resolve/main/config.json",
    );
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0pp>.
    pub const T0PP: (&'static str, &'static str) = (
        "t0pp/config",
        "https://huggingface.co/bigscience/T0pp/resolve/main/config.json",
    );
}

impl T0VocabResources {
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0>.
    pub const T0: (&'static str, &'static str) = (
        "t0/spiece",
        "https://huggingface.co/bigscience/T0/resolve/main/spiece.model",
    );
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0_3B>.
    pub const T0_3B: (&'static str, &'static str) = (
        "t0-3b/spiece",
        "https://huggingface.co/bigscience/T0_3B/resolve/main/spiece.model",
    );
    /// Shared under Apache 2.0 license by the BigScience team at <https://huggingface.co/bigscience/T0pp>.
    pub const T0PP: (&'static str, &'static str) = (
        "t0pp/spiece",
        "https://huggingface.co/bigscience/T0pp/resolve/main/spiece.model",
    );
}

/// Builds the partition rules for the T5 family of sequence-to-sequence models (including T0).
///
/// The rules are versioned together with the model architecture: parameter names follow the
/// [Transformers library](https://github.com/huggingface/transformers) Flax T5 implementation,
/// and renaming a sub-module there requires updating this table. Attention and feed-forward
/// kernels are split along [`MODEL_PARALLEL_AXIS`] on their wide dimension; embeddings and the
/// language model head are split along the vocabulary dimension; biases, relative attention bias
/// embeddings and layer norm weights are replicated.
///
/// Rule order matters: the relative attention bias rule precedes the generic attention kernel
/// rules so that first-match resolution assigns it a replicated placement.
pub fn t5_partition_rules() -> Result<PartitionRuleSet, RustPartitionsError> {
    let mp = MODEL_PARALLEL_AXIS;
    Ok(PartitionRuleSet::new(vec![
        // Embeddings
        PartitionRule::new(
            vec!["SelfAttention", "relative_attention_bias", "embedding"],
            LeafPartition::Replicated,
        )?,
        PartitionRule::new(
            vec!["shared", "embedding"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![Some(mp), None])),
        )?,
        // Attention
        PartitionRule::new(
            vec!["SelfAttention", "(q|k|v)", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![None, Some(mp)])),
        )?,
        PartitionRule::new(
            vec!["SelfAttention", "o", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![Some(mp), None])),
        )?,
        PartitionRule::new(
            vec!["EncDecAttention", "(q|k|v)", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![None, Some(mp)])),
        )?,
        PartitionRule::new(
            vec!["EncDecAttention", "o", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![Some(mp), None])),
        )?,
        // Feed-forward
        PartitionRule::new(
            vec!["DenseReluDense", "wi_0", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![None, Some(mp)])),
        )?,
        PartitionRule::new(
            vec!["DenseReluDense", "wi_1", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![None, Some(mp)])),
        )?,
        // non-gated feed-forward variant
        PartitionRule::new(
            vec!["DenseReluDense", "wi", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![None, Some(mp)])),
        )?,
        PartitionRule::new(
            vec!["DenseReluDense", "wo", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![Some(mp), None])),
        )?,
        // Layer norms
        PartitionRule::new(vec!["layer_norm", "weight"], LeafPartition::Replicated)?,
        PartitionRule::new(vec!["final_layer_norm", "weight"], LeafPartition::Replicated)?,
        // Projection
        PartitionRule::new(
            vec!["lm_head", "kernel"],
            LeafPartition::Sharded(PartitionSpec::from_axes(vec![None, Some(mp)])),
        )?,
    ]))
}

/// Assigns a partition to every parameter of a T5-family model.
///
/// Convenience wrapper building the [`t5_partition_rules`] table and resolving the given
/// parameter tree against it. Fails with `IncompletePartitionSpec` if the tree contains a
/// parameter the table does not cover.
pub fn set_t5_partitions<T>(
    params: &ParameterTree<T>,
) -> Result<ParameterTree<LeafPartition>, RustPartitionsError> {
    let rules = t5_partition_rules()?;
    rules.resolve(params)
}
