//! # Linformer: Self-Attention with Linear Complexity (Wang et al.)
//!
//! Configuration and tokenizer definitions for the Linformer language model
//! ([https://arxiv.org/abs/2006.04768](https://arxiv.org/abs/2006.04768) Wang, Li, Khabsa, Fang,
//! Ma, 2020). The architecture is a RoBERTa variant replacing full self-attention with a low-rank
//! projection of the keys and values; configuration and tokenization are therefore identical to
//! RoBERTa up to the projection hyper-parameters, and the pretrained resources point to the
//! RoBERTa files the model reuses.
//!
//! ```no_run
//! use rust_partitions::linformer::{LinformerConfig, LinformerConfigResources};
//! use rust_partitions::resources::{RemoteResource, ResourceProvider};
//! use rust_partitions::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config_resource =
//!     RemoteResource::from_pretrained(LinformerConfigResources::ROBERTA_BASE);
//! let config_path = config_resource.get_local_path()?;
//! let config = LinformerConfig::from_file(config_path);
//! # Ok(())
//! # }
//! ```

mod linformer_model;

pub use linformer_model::{
    LinformerConfig, LinformerConfigResources, LinformerMergesResources, LinformerTokenizer,
    LinformerVocabResources, LINFORMER_MAX_MODEL_INPUT_SIZES,
};
