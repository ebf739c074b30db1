// Copyright 2018 The Google AI Language Team Authors and The HuggingFace Inc. team.
// Copyright (c) 2018, NVIDIA CORPORATION.  All rights reserved.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::common::activations::Activation;
use crate::Config;
use rust_tokenizers::tokenizer::RobertaTokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// # Linformer Pretrained model config files
pub struct LinformerConfigResources;

/// # Linformer Pretrained model vocab files
pub struct LinformerVocabResources;

/// # Linformer Pretrained model merges files
pub struct LinformerMergesResources;

impl LinformerConfigResources {
    /// Shared under MIT license by the Facebook AI Research Fairseq team at <https://github.com/pytorch/fairseq>.
    pub const ROBERTA_BASE: (&'static str, &'static str) = (
        "roberta-base/config",
        "https://huggingface.co/roberta-base/resolve/main/config.json",
    );
    /// Shared under MIT license by the Facebook AI Research Fairseq team at <https://github.com/pytorch/fairseq>.
    pub const ROBERTA_LARGE: (&'static str, &'static str) = (
        "roberta-large/config",
        "https://huggingface.co/roberta-large/resolve/main/config.json",
    );
    /// Shared under MIT license by the Facebook AI Research Fairseq team at <https://github.com/pytorch/fairseq>.
    pub const ROBERTA_LARGE_MNLI: (&'static str, &'static str) = (
        "roberta-large-mnli/config",
        "https://huggingface.co/roberta-large-mnli/resolve/main/config.json",
    );
    /// Shared under Apache 2.0 license by the Hugging Face Inc. team at <https://huggingface.co/distilroberta-base>.
    pub const DISTILROBERTA_BASE: (&'static str, &'static str) = (
        "distilroberta-base/config",
        "https://huggingface.co/distilroberta-base/resolve/main/config.json",
    );
    /// Shared under MIT license by the OpenAI team at <https://github.com/openai/gpt-2-output-dataset>.
    pub const ROBERTA_BASE_OPENAI_DETECTOR: (&'static str, &'static str) = (
        "roberta-base-openai-detector/config",
        "https://huggingface.co/roberta-base-openai-detector/resolve/main/config.json",
    );
    /// Shared under MIT license by the OpenAI team at <https://github.com/openai/gpt-2-output-dataset>.
    pub const ROBERTA_LARGE_OPENAI_DETECTOR: (&'static str, &'static str) = (
        "roberta-large-openai-detector/config",
        "https://huggingface.co/roberta-large-openai-detector/resolve/main/config.json",
    );
}

impl LinformerVocabResources {
    /// Shared under MIT license by the Facebook AI Research Fairseq team at <https://github.com/pytorch/fairseq>.
    pub const ROBERTA_BASE: (&'static str, &'static str) = (
        "roberta-base/vocab",
        "https://huggingface.co/roberta-base/resolve/main/vocab.json",
    );
}

impl LinformerMergesResources {
    /// Shared under MIT license by the Facebook AI Research Fairseq team at <https://github.com/pytorch/fairseq>.
    pub const ROBERTA_BASE: (&'static str, &'static str) = (
        "roberta-base/merges",
        "https://huggingface.co/roberta-base/resolve/main/merges.txt",
    );
}

/// Maximum number of input positions supported by each pretrained tokenizer configuration.
pub const LINFORMER_MAX_MODEL_INPUT_SIZES: [(&str, i64); 1] = [("roberta-base", 1024)];

/// # Linformer tokenizer
///
/// The Linformer tokenizer is identical to the RoBERTa tokenizer (byte-level BPE with a
/// `vocab.json` vocabulary and `merges.txt` 2-gram merges); the architecture changes the
/// attention mechanism only and reuses the RoBERTa vocabulary files referenced by
/// `LinformerVocabResources` and `LinformerMergesResources`.
pub type LinformerTokenizer = RobertaTokenizer;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// # Linformer model configuration
/// Defines the Linformer model architecture (e.g. number of layers, hidden layer size, label
/// mapping...). The configuration reuses the RoBERTa defaults, extended with the parameters of
/// the linear attention projection.
pub struct LinformerConfig {
    pub hidden_act: Activation,
    pub attention_probs_dropout_prob: f64,
    pub hidden_dropout_prob: f64,
    pub hidden_size: i64,
    pub initializer_range: f32,
    pub intermediate_size: i64,
    pub max_position_embeddings: i64,
    pub num_attention_heads: i64,
    pub num_hidden_layers: i64,
    pub type_vocab_size: i64,
    pub vocab_size: i64,
    pub output_attentions: Option<bool>,
    pub output_hidden_states: Option<bool>,
    pub is_decoder: Option<bool>,
    pub id2label: Option<HashMap<i64, String>>,
    pub label2id: Option<HashMap<String, i64>>,
    /// Sequence length compression factor of the key/value projections
    pub compressed: Option<i64>,
    /// Share the compression projection between keys and values
    pub share_kv_projection: Option<bool>,
    /// Share the compression projections across layers
    pub layerwise_sharing: Option<bool>,
}

impl Config for LinformerConfig {}

impl LinformerConfig {
    /// Sequence length compression factor of the key/value projections (defaults to 4).
    pub fn compressed(&self) -> i64 {
        self.compressed.unwrap_or(4)
    }

    /// Whether keys and values share the compression projection (defaults to false).
    pub fn share_kv_projection(&self) -> bool {
        self.share_kv_projection.unwrap_or(false)
    }

    /// Whether the compression projections are shared across layers (defaults to false).
    pub fn layerwise_sharing(&self) -> bool {
        self.layerwise_sharing.unwrap_or(false)
    }
}

impl Default for LinformerConfig {
    fn default() -> Self {
        LinformerConfig {
            hidden_act: Activation::gelu,
            attention_probs_dropout_prob: 0.1,
            hidden_dropout_prob: 0.1,
            hidden_size: 768,
            initializer_range: 0.02,
            intermediate_size: 3072,
            max_position_embeddings: 514,
            num_attention_heads: 12,
            num_hidden_layers: 12,
            type_vocab_size: 1,
            vocab_size: 50265,
            output_attentions: None,
            output_hidden_states: None,
            is_decoder: None,
            id2label: None,
            label2id: None,
            compressed: Some(4),
            share_kv_projection: Some(false),
            layerwise_sharing: Some(false),
        }
    }
}
