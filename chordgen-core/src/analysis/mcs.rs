//! Modified maximum cardinality search.
//!
//! Labels nodes from `n - 1` down to `0`, always taking an unlabelled node
//! with the most labelled neighbours. On a chordal graph the labels form a
//! perfect elimination ordering, and a drop (or plateau) in the labelled
//! neighbour count marks the start of a new maximal clique. Runs in
//! `O(N + M)`.

use crate::graph::ChordalGraph;

use super::bucket::BucketQueue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct McsOutcome {
    /// `order[i]` is the node that received label `i`.
    pub(super) order: Vec<usize>,
    /// Maximal cliques in discovery order, members ascending.
    pub(super) cliques: Vec<Vec<usize>>,
    /// Index of the clique each node was appended to.
    pub(super) clique_of: Vec<usize>,
}

pub(super) fn modified_mcs(graph: &ChordalGraph) -> McsOutcome {
    let node_count = graph.node_count();
    let mut queue = BucketQueue::new(node_count);
    let mut labelled = vec![false; node_count];
    let mut labelled_neighbours = vec![0_usize; node_count];
    let mut order = vec![0; node_count];
    let mut clique_of = vec![0; node_count];
    let mut cliques: Vec<Vec<usize>> = Vec::new();
    let mut previous_card = 0;

    for label in (0..node_count).rev() {
        let Some(node) = queue.pop_max() else {
            break;
        };
        labelled[node] = true;
        order[label] = node;
        let card = labelled_neighbours[node];

        for &next in graph.neighbours(node) {
            if !labelled[next] {
                labelled_neighbours[next] += 1;
                queue.promote(next);
            }
        }

        if card <= previous_card || cliques.is_empty() {
            let seed = graph
                .neighbours(node)
                .iter()
                .copied()
                .filter(|&neighbour| labelled[neighbour] && neighbour != node)
                .collect();
            cliques.push(seed);
        }
        if let Some(current) = cliques.last_mut() {
            current.push(node);
        }
        clique_of[node] = cliques.len() - 1;
        previous_card = card;
    }

    for clique in &mut cliques {
        clique.sort_unstable();
    }
    McsOutcome {
        order,
        cliques,
        clique_of,
    }
}
