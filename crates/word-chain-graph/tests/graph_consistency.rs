//! Batch/sequential consistency for graph construction.
//!
//! `add_words` must produce the same final graph as repeated `add_word`
//! calls, for any permutation of the batch. The stub provider with a low
//! threshold gives a dense enough edge set to make divergence visible.

use std::collections::BTreeSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::SeedableRng;

use word_chain_core::{GraphConfig, StubEmbeddingProvider};
use word_chain_graph::SemanticGraph;

const WORDS: &[&str] = &[
    "ocean", "wave", "water", "river", "mountain", "forest", "tree", "flower", "music", "song",
    "piano", "guitar", "cat", "dog", "bird", "fish",
];

fn new_graph(threshold: f32) -> SemanticGraph {
    SemanticGraph::new(
        Arc::new(StubEmbeddingProvider::with_dimensions(16)),
        GraphConfig {
            similarity_threshold: threshold,
        },
    )
    .unwrap()
}

async fn adjacency_snapshot(graph: &SemanticGraph) -> Vec<(String, BTreeSet<String>)> {
    let mut snapshot = Vec::new();
    for word in graph.all_words() {
        let neighbors = graph.neighbors(&word).await.unwrap();
        snapshot.push((word, neighbors));
    }
    snapshot
}

#[tokio::test]
async fn batch_insert_matches_sequential_insert() {
    let batch: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();

    let sequential = new_graph(0.0);
    for word in &batch {
        sequential.add_word(word).await.unwrap();
    }

    let batched = new_graph(0.0);
    batched.add_words(&batch).await.unwrap();

    assert_eq!(sequential.all_words(), batched.all_words());
    assert_eq!(sequential.edge_count(), batched.edge_count());
    assert_eq!(
        adjacency_snapshot(&sequential).await,
        adjacency_snapshot(&batched).await
    );
}

#[tokio::test]
async fn batch_order_does_not_matter() {
    let batch: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();

    let reference = new_graph(0.0);
    reference.add_words(&batch).await.unwrap();
    let reference_snapshot = adjacency_snapshot(&reference).await;

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..4 {
        let mut shuffled = batch.clone();
        shuffled.shuffle(&mut rng);

        let graph = new_graph(0.0);
        graph.add_words(&shuffled).await.unwrap();

        assert_eq!(reference.all_words(), graph.all_words());
        assert_eq!(reference_snapshot, adjacency_snapshot(&graph).await);
    }
}

#[tokio::test]
async fn split_batches_match_one_batch() {
    let batch: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();

    let whole = new_graph(0.0);
    whole.add_words(&batch).await.unwrap();

    let split = new_graph(0.0);
    let (first, second) = batch.split_at(batch.len() / 2);
    split.add_words(first).await.unwrap();
    split.add_words(second).await.unwrap();

    assert_eq!(whole.all_words(), split.all_words());
    assert_eq!(whole.edge_count(), split.edge_count());
    assert_eq!(
        adjacency_snapshot(&whole).await,
        adjacency_snapshot(&split).await
    );
}
