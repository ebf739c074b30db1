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
use crate::partitions::spec::LeafPartition;
use crate::partitions::tree::ParameterTree;
use regex::Regex;

/// # Partition rule
///
/// Associates an ordered sequence of path segment patterns with a sharding decision. Each pattern
/// is a regular expression anchored to match one complete path segment; the rule matches a
/// parameter path if its patterns match a contiguous window of the path segments.
#[derive(Debug, Clone)]
pub struct PartitionRule {
    patterns: Vec<Regex>,
    result: LeafPartition,
}

impl PartitionRule {
    /// Compiles a new rule from segment patterns and the partition assigned on match.
    ///
    /// Fails with `InvalidRulePattern` if any pattern is not a valid regular expression. Patterns
    /// are compiled as `^(?:pattern)$` so that each one must match its segment in full.
    pub fn new<'a, P>(
        patterns: P,
        result: LeafPartition,
    ) -> Result<PartitionRule, RustPartitionsError>
    where
        P: IntoIterator<Item = &'a str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| Regex::new(&format!("^(?:{})$", pattern)))
            .collect::<Result<Vec<Regex>, regex::Error>>()?;
        Ok(PartitionRule { patterns, result })
    }

    /// Returns true if the rule patterns match a contiguous window of the given path.
    ///
    /// Windows are scanned left to right by increasing offset, stopping at the first match. A rule
    /// with more patterns than the path has segments cannot match. A rule with no patterns never
    /// matches any path, including the empty one.
    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        if self.patterns.is_empty() || self.patterns.len() > path.len() {
            return false;
        }
        path.windows(self.patterns.len()).any(|window| {
            self.patterns
                .iter()
                .zip(window)
                .all(|(pattern, segment)| pattern.is_match(segment.as_ref()))
        })
    }

    /// Partition assigned to paths matching this rule.
    pub fn result(&self) -> &LeafPartition {
        &self.result
    }
}

/// # Partition rule set
///
/// Ordered collection of partition rules covering the parameters of a model architecture. Rule
/// order encodes priority: when several rules match the same path, the first one declared wins.
/// The rule set is immutable once built and versioned together with the model architecture it
/// covers; renaming a sub-module in the model requires updating the corresponding rules.
#[derive(Debug, Clone)]
pub struct PartitionRuleSet {
    rules: Vec<PartitionRule>,
}

impl PartitionRuleSet {
    /// Creates a new rule set. The declaration order of the rules is preserved and significant.
    pub fn new(rules: Vec<PartitionRule>) -> PartitionRuleSet {
        PartitionRuleSet { rules }
    }

    /// Returns the partition of the first rule matching the given path, `None` if no rule matches.
    pub fn first_match<S: AsRef<str>>(&self, path: &[S]) -> Option<&LeafPartition> {
        self.rules
            .iter()
            .find(|rule| rule.matches(path))
            .map(|rule| rule.result())
    }

    /// Assigns a partition to every leaf parameter of the given tree.
    ///
    /// The output tree has the same structure and leaf paths as the input; leaf values are
    /// discarded and replaced by the partition of the first matching rule. Every path is resolved
    /// independently, making the result deterministic and the call safe from concurrent threads.
    ///
    /// # Errors
    ///
    /// Fails with `IncompletePartitionSpec` if one or more parameter paths are not covered by the
    /// rule set. No partial result is returned: the rule set must be updated to cover the
    /// architecture before any output is produced.
    pub fn resolve<T>(
        &self,
        params: &ParameterTree<T>,
    ) -> Result<ParameterTree<LeafPartition>, RustPartitionsError> {
        let mut resolved = Vec::new();
        let mut unmatched = Vec::new();
        for (path, _value) in params.flatten() {
            match self.first_match(&path) {
                Some(partition) => resolved.push((path, partition.clone())),
                None => unmatched.push(path.join("/")),
            }
        }
        if !unmatched.is_empty() {
            return Err(RustPartitionsError::IncompletePartitionSpec(format!(
                "no partition rule matched the following parameters: {}",
                unmatched.join(", ")
            )));
        }
        ParameterTree::unflatten(resolved)
    }
}
