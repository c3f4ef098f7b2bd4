//! Regression trees
//!
//! Trees are stored as a flat node array rooted at index 0. A sample goes
//! to the left child when `x[feature] <= threshold`, matching scikit-learn.

use serde::Deserialize;

use model_spi::{FeatureVector, FEATURE_COUNT};

/// A single tree node
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Internal node routing on one feature
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node holding the predicted value
    Leaf { value: f64 },
}

/// A structurally valid regression tree
///
/// Every child index points strictly forward, so traversal from the root
/// always terminates at a leaf.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Node>")]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Build a tree, checking its structure
    pub fn new(nodes: Vec<Node>) -> std::result::Result<Self, String> {
        if nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        for (index, node) in nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(format!(
                            "node {} splits on feature {}, but only {} features exist",
                            index, feature, FEATURE_COUNT
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", index));
                    }
                    for child in [left, right] {
                        if child <= index || child >= nodes.len() {
                            return Err(format!(
                                "node {} has invalid child index {} (tree has {} nodes)",
                                index,
                                child,
                                nodes.len()
                            ));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("node {} has a non-finite leaf value", index));
                    }
                }
            }
        }

        Ok(Self { nodes })
    }

    /// Number of nodes in the tree
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Longest root-to-leaf path, counted in edges
    pub fn depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut max_depth = 0;
        for (index, node) in self.nodes.iter().enumerate() {
            if let Node::Split { left, right, .. } = *node {
                let child_depth = depths[index] + 1;
                depths[left] = depths[left].max(child_depth);
                depths[right] = depths[right].max(child_depth);
                max_depth = max_depth.max(child_depth);
            }
        }
        max_depth
    }

    /// Route a sample to its leaf and return the leaf value
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let values = features.values();
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if values[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

impl TryFrom<Vec<Node>> for RegressionTree {
    type Error = String;

    fn try_from(nodes: Vec<Node>) -> std::result::Result<Self, Self::Error> {
        Self::new(nodes)
    }
}
