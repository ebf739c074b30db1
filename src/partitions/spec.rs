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

/// Sharding assignment for one tensor dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimSharding {
    /// The dimension is split along the given logical mesh axis.
    Mesh(String),
    /// The dimension is not split.
    Replicated,
}

/// # Partition specification
///
/// Ordered per-dimension sharding annotations for a single tensor. The number of axes is expected
/// to equal the rank of the annotated tensor; this is validated by the execution engine consuming
/// the specification, not by the resolver producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSpec {
    axes: Vec<DimSharding>,
}

impl PartitionSpec {
    /// Creates a new specification from per-dimension sharding assignments.
    pub fn new(axes: Vec<DimSharding>) -> PartitionSpec {
        PartitionSpec { axes }
    }

    /// Builds a specification from one optional mesh axis name per tensor dimension, `None`
    /// leaving the corresponding dimension unsplit.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_partitions::partitions::{DimSharding, PartitionSpec};
    ///
    /// let spec = PartitionSpec::from_axes(vec![Some("mp"), None]);
    /// assert_eq!(
    ///     spec.axes(),
    ///     &[DimSharding::Mesh("mp".to_string()), DimSharding::Replicated]
    /// );
    /// ```
    pub fn from_axes<'a, A>(axes: A) -> PartitionSpec
    where
        A: IntoIterator<Item = Option<&'a str>>,
    {
        let axes = axes
            .into_iter()
            .map(|axis| match axis {
                Some(name) => DimSharding::Mesh(name.to_string()),
                None => DimSharding::Replicated,
            })
            .collect();
        PartitionSpec { axes }
    }

    /// Per-dimension sharding assignments, in tensor dimension order.
    pub fn axes(&self) -> &[DimSharding] {
        &self.axes
    }
}

/// Resolved sharding decision for one leaf parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafPartition {
    /// The full tensor is replicated on every device.
    Replicated,
    /// The tensor is split across the device mesh according to the given specification.
    Sharded(PartitionSpec),
}
