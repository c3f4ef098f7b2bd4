//! Random Forest ensemble
//!
//! The forest prediction is the arithmetic mean of its trees' predictions.

use serde::Deserialize;

use crate::tree::RegressionTree;
use model_spi::FeatureVector;

/// Averaging ensemble of regression trees
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<RegressionTree>")]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Build a forest from at least one tree
    pub fn new(trees: Vec<RegressionTree>) -> std::result::Result<Self, String> {
        if trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        Ok(Self { trees })
    }

    /// Number of trees in the ensemble
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Total node count across all trees
    pub fn n_nodes(&self) -> usize {
        self.trees.iter().map(RegressionTree::n_nodes).sum()
    }

    /// Deepest tree in the ensemble
    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(RegressionTree::depth).max().unwrap_or(0)
    }

    /// Mean of the per-tree predictions
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let sum: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        sum / self.trees.len() as f64
    }
}

impl TryFrom<Vec<RegressionTree>> for RandomForest {
    type Error = String;

    fn try_from(trees: Vec<RegressionTree>) -> std::result::Result<Self, Self::Error> {
        Self::new(trees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use model_spi::FEATURE_COUNT;

    fn stump(threshold: f64, low: f64, high: f64) -> RegressionTree {
        RegressionTree::new(vec![
            Node::Split {
                feature: 0,
                threshold,
                left: 1,
                right: 2,
            },
            Node::Leaf { value: low },
            Node::Leaf { value: high },
        ])
        .unwrap()
    }

    fn with_first(value: f64) -> FeatureVector {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = value;
        FeatureVector::new(values)
    }

    #[test]
    fn test_rejects_empty_forest() {
        assert!(RandomForest::new(vec![]).is_err());
    }

    #[test]
    fn test_prediction_is_mean_of_trees() {
        let forest = RandomForest::new(vec![stump(1.0, 1.0, 2.0), stump(3.0, 4.0, 8.0)]).unwrap();
        assert_eq!(forest.n_trees(), 2);
        assert_eq!(forest.n_nodes(), 6);
        // x=2: first tree goes right (2.0), second goes left (4.0)
        assert!((forest.predict(&with_first(2.0)) - 3.0).abs() < 1e-12);
        // x=5: both right
        assert!((forest.predict(&with_first(5.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_tree_forest_matches_tree() {
        let tree = stump(0.5, 10.0, 20.0);
        let forest = RandomForest::new(vec![tree.clone()]).unwrap();
        let features = with_first(0.7);
        assert_eq!(forest.predict(&features), tree.predict(&features));
        assert_eq!(forest.max_depth(), 1);
    }

    #[test]
    fn test_deserialize_rejects_empty_list() {
        let result: std::result::Result<RandomForest, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
