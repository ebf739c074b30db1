use rust_partitions::partitions::{LeafPartition, ParameterTree, PartitionSpec};
use rust_partitions::t5::{set_t5_partitions, t5_partition_rules, MODEL_PARALLEL_AXIS};
use rust_partitions::RustPartitionsError;

fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|segment| segment.to_string()).collect()
}

/// Miniature parameter tree following the structure of the Flax T5 implementation: two encoder
/// blocks (self-attention + feed-forward), two decoder blocks (self-attention + cross-attention +
/// feed-forward), shared embedding and language model head. Leaf values are tensor shapes; they
/// are placeholders and play no role in resolution.
fn t5_test_params() -> ParameterTree<Vec<i64>> {
    let mut entries = Vec::new();
    entries.push((path(&["shared", "embedding"]), vec![32128, 512]));
    entries.push((path(&["lm_head", "kernel"]), vec![512, 32128]));

    for &block in &["0", "1"] {
        for &name in &["q", "k", "v", "o"] {
            entries.push((
                path(&["encoder", "block", block, "layer", "0", "SelfAttention", name, "kernel"]),
                vec![512, 512],
            ));
            entries.push((
                path(&["decoder", "block", block, "layer", "0", "SelfAttention", name, "kernel"]),
                vec![512, 512],
            ));
            entries.push((
                path(&["decoder", "block", block, "layer", "1", "EncDecAttention", name, "kernel"]),
                vec![512, 512],
            ));
        }
        for &name in &["wi_0", "wi_1"] {
            entries.push((
                path(&["encoder", "block", block, "layer", "1", "DenseReluDense", name, "kernel"]),
                vec![512, 2048],
            ));
            entries.push((
                path(&["decoder", "block", block, "layer", "2", "DenseReluDense", name, "kernel"]),
                vec![512, 2048],
            ));
        }
        entries.push((
            path(&["encoder", "block", block, "layer", "1", "DenseReluDense", "wo", "kernel"]),
            vec![2048, 512],
        ));
        entries.push((
            path(&["decoder", "block", block, "layer", "2", "DenseReluDense", "wo", "kernel"]),
            vec![2048, 512],
        ));
        for &layer in &["0", "1"] {
            entries.push((
                path(&["encoder", "block", block, "layer", layer, "layer_norm", "weight"]),
                vec![512],
            ));
        }
        for &layer in &["0", "1", "2"] {
            entries.push((
                path(&["decoder", "block", block, "layer", layer, "layer_norm", "weight"]),
                vec![512],
            ));
        }
    }
    entries.push((
        path(&[
            "encoder",
            "block",
            "0",
            "layer",
            "0",
            "SelfAttention",
            "relative_attention_bias",
            "embedding",
        ]),
        vec![32, 8],
    ));
    entries.push((
        path(&[
            "decoder",
            "block",
            "0",
            "layer",
            "0",
            "SelfAttention",
            "relative_attention_bias",
            "embedding",
        ]),
        vec![32, 8],
    ));
    entries.push((path(&["encoder", "final_layer_norm", "weight"]), vec![512]));
    entries.push((path(&["decoder", "final_layer_norm", "weight"]), vec![512]));

    ParameterTree::unflatten(entries).unwrap()
}

#[test]
fn test_t5_partitions_complete_coverage() -> anyhow::Result<()> {
    let params = t5_test_params();

    let partitions = set_t5_partitions(&params)?;

    let input_keys = params
        .flatten()
        .into_iter()
        .map(|(key, _)| key)
        .collect::<Vec<_>>();
    let output_keys = partitions
        .flatten()
        .into_iter()
        .map(|(key, _)| key)
        .collect::<Vec<_>>();
    assert_eq!(input_keys, output_keys);
    Ok(())
}

#[test]
fn test_t5_partitions_concrete_assignments() -> anyhow::Result<()> {
    let params = t5_test_params();

    let partitions = set_t5_partitions(&params)?;

    assert_eq!(
        partitions.get(&["shared", "embedding"]),
        Some(&LeafPartition::Sharded(PartitionSpec::from_axes(vec![
            Some(MODEL_PARALLEL_AXIS),
            None
        ])))
    );
    assert_eq!(
        partitions.get(&[
            "decoder", "block", "1", "layer", "0", "SelfAttention", "k", "kernel"
        ]),
        Some(&LeafPartition::Sharded(PartitionSpec::from_axes(vec![
            None,
            Some(MODEL_PARALLEL_AXIS)
        ])))
    );
    assert_eq!(
        partitions.get(&[
            "decoder", "block", "1", "layer", "0", "SelfAttention", "o", "kernel"
        ]),
        Some(&LeafPartition::Sharded(PartitionSpec::from_axes(vec![
            Some(MODEL_PARALLEL_AXIS),
            None
        ])))
    );
    assert_eq!(
        partitions.get(&["encoder", "block", "0", "layer", "1", "layer_norm", "weight"]),
        Some(&LeafPartition::Replicated)
    );
    assert_eq!(
        partitions.get(&[
            "encoder",
            "block",
            "0",
            "layer",
            "0",
            "SelfAttention",
            "relative_attention_bias",
            "embedding"
        ]),
        Some(&LeafPartition::Replicated)
    );
    Ok(())
}

#[test]
fn test_t5_partitions_incomplete_coverage_fails() {
    let mut entries = t5_test_params()
        .flatten()
        .into_iter()
        .map(|(key, value)| (key, value.clone()))
        .collect::<Vec<_>>();
    entries.push((path(&["classifier", "dense", "weight"]), vec![512, 2]));
    let params = ParameterTree::unflatten(entries).unwrap();

    let result = set_t5_partitions(&params);

    match result {
        Err(RustPartitionsError::IncompletePartitionSpec(message)) => {
            assert!(message.contains("classifier/dense/weight"));
        }
        Err(error) => panic!("unexpected error: {}", error),
        Ok(_) => panic!("expected resolution to fail on uncovered parameter"),
    }
}

#[test]
fn test_t5_rule_table_is_deterministic() -> anyhow::Result<()> {
    let params = t5_test_params();
    let rules = t5_partition_rules()?;

    let first = rules.resolve(&params)?;
    let second = rules.resolve(&params)?;

    assert_eq!(first, second);
    Ok(())
}
