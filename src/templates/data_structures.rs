//! Closed-form data structure properties: tree height, complete graph edges,
//! hash table load factor.

use crate::domain::{Question, QuestionKind};
use crate::error::QuizError;
use crate::random::RandomSource;

use super::sample_u32;

/// `ceil(log2(n + 1)) - 1` for `n >= 1`.
pub fn balanced_tree_height(nodes: u32) -> u32 {
  (nodes + 1).next_power_of_two().trailing_zeros() - 1
}

pub fn complete_graph_edges(vertices: u32) -> u32 {
  vertices * (vertices - 1) / 2
}

/// `elements / buckets` to one decimal. Rounds the `f64` quotient, so
/// 17/20 (0.8499...) is "0.8".
pub fn load_factor(elements: u32, buckets: u32) -> String {
  format!("{:.1}", elements as f64 / buckets as f64)
}

pub fn tree_height(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let nodes = sample_u32(rng, 7, 31);
  let height = balanced_tree_height(nodes);
  Ok(Question::new(
    QuestionKind::TreeHeight,
    format!("What is the height of a balanced binary search tree with {} nodes?", nodes),
    "struct Node {\n    int data;\n    struct Node* left;\n    struct Node* right;\n};",
    height.to_string(),
    format!(
      "A balanced BST with {n} nodes has height ceil(log₂({m})) - 1 = {c} - 1 = {h}",
      n = nodes,
      m = nodes + 1,
      c = height + 1,
      h = height
    ),
  ))
}

pub fn graph_edges(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let v = sample_u32(rng, 4, 10);
  let edges = complete_graph_edges(v);
  Ok(Question::new(
    QuestionKind::GraphEdges,
    format!("What is the number of edges in a complete graph with {} vertices?", v),
    "struct Graph {\n    int V;\n    int** adjMatrix;\n};",
    edges.to_string(),
    format!("A complete graph with {v} vertices has {v}({v}-1)/2 = {e} edges", v = v, e = edges),
  ))
}

pub fn hash_load_factor(rng: &mut dyn RandomSource, _index: usize) -> Result<Question, QuizError> {
  let elements = sample_u32(rng, 5, 20);
  let buckets = sample_u32(rng, elements, elements * 2);
  let lf = load_factor(elements, buckets);
  Ok(Question::new(
    QuestionKind::LoadFactor,
    format!(
      "What is the load factor of a hash table with {} elements and {} buckets? (one decimal place)",
      elements, buckets
    ),
    "struct HashTable {\n    int size;\n    int capacity;\n    struct Node** buckets;\n};",
    lf.clone(),
    format!(
      "Load factor = number of elements / number of buckets = {}/{} = {}",
      elements, buckets, lf
    ),
  ))
}
