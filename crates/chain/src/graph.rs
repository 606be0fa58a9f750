//! Graph export of chain transitions.

use petgraph::graph::Graph;

use crate::chain::MarkovChain;

impl MarkovChain {
    /// Builds a directed graph of the chain's transition structure.
    ///
    /// Every state becomes a node carrying its label, in state order. Each
    /// transition with probability strictly greater than `threshold`
    /// becomes an edge weighted by that probability, so a threshold of 0.0
    /// keeps exactly the transitions with positive probability.
    pub fn graph(&self, threshold: f64) -> Graph<String, f64> {
        let mut graph = Graph::new();
        let nodes: Vec<_> = self
            .labels()
            .iter()
            .map(|label| graph.add_node(label.clone()))
            .collect();
        for ((from, to), &p) in self.matrix().probs().indexed_iter() {
            if p > threshold {
                graph.add_edge(nodes[from], nodes[to], p);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use moira_construct::TransitionMatrix;
    use ndarray::array;
    use petgraph::graph::NodeIndex;

    fn two_state_chain() -> MarkovChain {
        let matrix = TransitionMatrix::new(array![[0.0, 1.0], [0.4, 0.6]]).unwrap();
        MarkovChain::new(matrix, vec!["calm".into(), "storm".into()]).unwrap()
    }

    #[test]
    fn graph_has_one_node_per_state() {
        let chain = two_state_chain();
        let graph = chain.graph(0.0);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph[NodeIndex::new(0)], "calm");
        assert_eq!(graph[NodeIndex::new(1)], "storm");
    }

    #[test]
    fn graph_keeps_positive_transitions_at_zero_threshold() {
        let chain = two_state_chain();
        let graph = chain.graph(0.0);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.find_edge(NodeIndex::new(0), NodeIndex::new(0)).is_none());
    }

    #[test]
    fn graph_threshold_filters_weak_edges() {
        let chain = two_state_chain();
        let graph = chain.graph(0.5);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.find_edge(NodeIndex::new(1), NodeIndex::new(0)).is_none());
    }

    #[test]
    fn graph_edge_weights_are_probabilities() {
        let chain = two_state_chain();
        let graph = chain.graph(0.0);
        let edge = graph
            .find_edge(NodeIndex::new(1), NodeIndex::new(0))
            .unwrap();
        assert_abs_diff_eq!(graph[edge], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn graph_with_full_threshold_has_no_edges() {
        let chain = two_state_chain();
        let graph = chain.graph(1.0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 2);
    }
}
