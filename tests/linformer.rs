use rust_partitions::linformer::{
    LinformerConfig, LinformerConfigResources, LinformerMergesResources, LinformerVocabResources,
    LINFORMER_MAX_MODEL_INPUT_SIZES,
};
use rust_partitions::resources::RemoteResource;
use rust_partitions::{Activation, Config};
use std::io::Write;

#[test]
fn test_linformer_config_from_file() -> anyhow::Result<()> {
    //    RoBERTa-style configuration without Linformer-specific fields
    let config_json = r#"{
        "hidden_act": "gelu",
        "attention_probs_dropout_prob": 0.1,
        "hidden_dropout_prob": 0.1,
        "hidden_size": 768,
        "initializer_range": 0.02,
        "intermediate_size": 3072,
        "max_position_embeddings": 514,
        "num_attention_heads": 12,
        "num_hidden_layers": 12,
        "type_vocab_size": 1,
        "vocab_size": 50265
    }"#;
    let mut config_file = tempfile::NamedTempFile::new()?;
    config_file.write_all(config_json.as_bytes())?;

    let config = LinformerConfig::from_file(config_file.path());

    assert_eq!(config.hidden_size, 768);
    assert_eq!(config.vocab_size, 50265);
    assert_eq!(config.max_position_embeddings, 514);
    assert_eq!(config.hidden_act, Activation::gelu);
    //    defaults applied when the file does not carry the Linformer fields
    assert_eq!(config.compressed(), 4);
    assert!(!config.share_kv_projection());
    assert!(!config.layerwise_sharing());
    Ok(())
}

#[test]
fn test_linformer_config_overrides() -> anyhow::Result<()> {
    let config_json = r#"{
        "hidden_act": "gelu",
        "attention_probs_dropout_prob": 0.1,
        "hidden_dropout_prob": 0.1,
        "hidden_size": 1024,
        "initializer_range": 0.02,
        "intermediate_size": 4096,
        "max_position_embeddings": 514,
        "num_attention_heads": 16,
        "num_hidden_layers": 24,
        "type_vocab_size": 1,
        "vocab_size": 50265,
        "compressed": 8,
        "share_kv_projection": true,
        "layerwise_sharing": true
    }"#;
    let mut config_file = tempfile::NamedTempFile::new()?;
    config_file.write_all(config_json.as_bytes())?;

    let config = LinformerConfig::from_file(config_file.path());

    assert_eq!(config.compressed(), 8);
    assert!(config.share_kv_projection());
    assert!(config.layerwise_sharing());
    Ok(())
}

#[test]
fn test_linformer_config_default_matches_roberta_base() {
    let config = LinformerConfig::default();

    assert_eq!(config.hidden_size, 768);
    assert_eq!(config.num_hidden_layers, 12);
    assert_eq!(config.num_attention_heads, 12);
    assert_eq!(config.vocab_size, 50265);
    assert_eq!(config.max_position_embeddings, 514);
    assert_eq!(config.type_vocab_size, 1);
    assert_eq!(config.compressed(), 4);
}

#[test]
fn test_linformer_pretrained_resource_tables() {
    let config_resource = RemoteResource::from_pretrained(LinformerConfigResources::ROBERTA_BASE);
    assert_eq!(config_resource.cache_subdir, "roberta-base/config");
    assert_eq!(
        config_resource.url,
        "https://huggingface.co/roberta-base/resolve/main/config.json"
    );

    let vocab_resource = RemoteResource::from_pretrained(LinformerVocabResources::ROBERTA_BASE);
    assert!(vocab_resource.url.ends_with("vocab.json"));
    let merges_resource = RemoteResource::from_pretrained(LinformerMergesResources::ROBERTA_BASE);
    assert!(merges_resource.url.ends_with("merges.txt"));

    assert_eq!(LINFORMER_MAX_MODEL_INPUT_SIZES[0], ("roberta-base", 1024));
}
