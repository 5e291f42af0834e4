//! Bounded breadth-first shortest-path search.
//!
//! Explores the semantic graph level by level, so the first discovery of the
//! target is guaranteed minimum-step among paths reachable within the bound.
//! Tie-breaking among equal-length paths is fixed by the graph's sorted
//! adjacency iteration.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use word_chain_core::word::normalize;

use crate::error::GraphResult;
use crate::graph::SemanticGraph;

/// Find the shortest path between two words, bounded by `max_steps` edges.
///
/// Both words are auto-added to the graph if unseen. `start == target`
/// returns the single-word path. A frontier node whose depth has reached
/// `max_steps` is not expanded further; the search itself continues at
/// shallower depths. Returns `None` when the target is unreachable within
/// the bound.
///
/// # Errors
///
/// Provider failures while auto-adding the endpoints propagate fatally.
pub async fn shortest_path(
    graph: &SemanticGraph,
    start: &str,
    target: &str,
    max_steps: usize,
) -> GraphResult<Option<Vec<String>>> {
    let start = normalize(start);
    let target = normalize(target);

    graph.add_word(&start).await?;
    graph.add_word(&target).await?;

    if start == target {
        return Ok(Some(vec![start]));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier: VecDeque<(String, usize)> = VecDeque::new();
    let mut parent: HashMap<String, String> = HashMap::new();

    visited.insert(start.clone());
    frontier.push_back((start.clone(), 0));

    while let Some((current, depth)) = frontier.pop_front() {
        // Depth-bounded: a node at max_steps is recorded but not expanded.
        if depth >= max_steps {
            continue;
        }

        // Every expanded node is already in the graph, so this never calls
        // back into the provider.
        let neighbors = graph.neighbors(&current).await?;
        for neighbor in neighbors {
            if visited.contains(&neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            parent.insert(neighbor.clone(), current.clone());

            if neighbor == target {
                let path = reconstruct(&parent, &start, &target);
                debug!(
                    start = %start,
                    target = %target,
                    steps = path.len() - 1,
                    "BFS found path"
                );
                return Ok(Some(path));
            }
            frontier.push_back((neighbor, depth + 1));
        }
    }

    debug!(start = %start, target = %target, max_steps, "BFS found no path");
    Ok(None)
}

/// Walk the parent map back from target to start.
fn reconstruct(parent: &HashMap<String, String>, start: &str, target: &str) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;
    while current != start {
        match parent.get(current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use word_chain_core::{FixedEmbeddingProvider, GraphConfig};

    /// Fixture world (threshold 0.55):
    ///
    /// ```text
    /// cat -- animal -- dog      island (isolated)
    ///   \      |
    ///    \-- pet
    /// ```
    ///
    /// cat·animal = 0.6, dog·animal = 0.6, cat·dog = 0.3,
    /// pet·cat = 0.6, pet·animal = 0.6, pet·dog ≈ 0.34,
    /// island·* ≤ 0 against everything.
    fn chain_world() -> SemanticGraph {
        let provider = FixedEmbeddingProvider::new([
            ("animal", vec![1.0, 0.0, 0.0, 0.0]),
            ("cat", vec![0.6, 0.8, 0.0, 0.0]),
            ("dog", vec![0.6, -0.075, 0.796_476_5, 0.0]),
            ("pet", vec![0.6, 0.3, 0.0, 0.741_619_8]),
            ("island", vec![-1.0, 0.0, 0.0, 0.0]),
        ]);
        SemanticGraph::new(
            Arc::new(provider),
            GraphConfig {
                similarity_threshold: 0.55,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_same_word_returns_singleton_path() {
        let graph = chain_world();
        let path = shortest_path(&graph, "cat", "Cat", 6).await.unwrap();
        assert_eq!(path, Some(vec!["cat".to_string()]));
    }

    #[tokio::test]
    async fn test_two_step_path_through_hub() {
        let graph = chain_world();
        // Warm the graph so cat and dog have their adjacency.
        for word in ["animal", "cat", "dog", "pet"] {
            graph.add_word(word).await.unwrap();
        }
        let path = shortest_path(&graph, "cat", "dog", 6).await.unwrap();
        assert_eq!(
            path,
            Some(vec![
                "cat".to_string(),
                "animal".to_string(),
                "dog".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn test_direct_edge_is_one_step() {
        let graph = chain_world();
        for word in ["animal", "cat", "dog", "pet"] {
            graph.add_word(word).await.unwrap();
        }
        let path = shortest_path(&graph, "cat", "animal", 6).await.unwrap();
        assert_eq!(
            path,
            Some(vec!["cat".to_string(), "animal".to_string()])
        );
    }

    #[tokio::test]
    async fn test_unreachable_returns_none() {
        let graph = chain_world();
        for word in ["animal", "cat", "dog", "pet", "island"] {
            graph.add_word(word).await.unwrap();
        }
        let path = shortest_path(&graph, "cat", "island", 6).await.unwrap();
        assert_eq!(path, None);
    }

    #[tokio::test]
    async fn test_max_steps_bounds_search() {
        let graph = chain_world();
        for word in ["animal", "cat", "dog", "pet"] {
            graph.add_word(word).await.unwrap();
        }
        // cat -> dog needs two steps; a one-step bound cannot reach it.
        let path = shortest_path(&graph, "cat", "dog", 1).await.unwrap();
        assert_eq!(path, None);
        // The bound is inclusive: exactly two steps suffices.
        let path = shortest_path(&graph, "cat", "dog", 2).await.unwrap();
        assert!(path.is_some());
    }

    #[tokio::test]
    async fn test_path_is_minimal_and_within_bound() {
        let graph = chain_world();
        for word in ["animal", "cat", "dog", "pet"] {
            graph.add_word(word).await.unwrap();
        }
        // Both cat->animal->dog and cat->pet->... exist; BFS must return a
        // minimal path, and sorted adjacency makes it the animal route.
        let path = shortest_path(&graph, "cat", "dog", 6).await.unwrap().unwrap();
        assert_eq!(path.len() - 1, 2);
        assert_eq!(path[0], "cat");
        assert_eq!(path[2], "dog");
    }

    #[tokio::test]
    async fn test_auto_adds_endpoints() {
        let graph = chain_world();
        assert!(!graph.contains("cat"));
        let path = shortest_path(&graph, "cat", "dog", 6).await.unwrap();
        // Only the two endpoints are known, no intermediate hub yet.
        assert!(graph.contains("cat"));
        assert!(graph.contains("dog"));
        assert_eq!(path, None);
    }
}
