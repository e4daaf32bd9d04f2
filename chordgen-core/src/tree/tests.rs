//! Unit tests for host-tree construction and subtree extraction.

use std::collections::VecDeque;

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};
use rstest::rstest;

use crate::error::ChordalError;
use crate::test_utils::suite_proptest_config;

use super::{
    RandomTree, ShuffleCursor, Subtree, connecting_subtree, growing_subtree, pruned_subtree,
    sample_connection_count,
};

fn induces_connected_subtree(tree: &RandomTree, subtree: &Subtree) -> bool {
    let Some(&start) = subtree.nodes().first() else {
        return true;
    };
    let mut seen = vec![false; tree.node_count()];
    seen[start] = true;
    let mut reached = 1;
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in tree.neighbours(node) {
            if subtree.contains(next) && !seen[next] {
                seen[next] = true;
                reached += 1;
                queue.push_back(next);
            }
        }
    }
    reached == subtree.len()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(50)]
fn random_tree_has_n_minus_one_edges_and_backward_parents(#[case] node_count: usize) {
    let mut rng = SmallRng::seed_from_u64(17);
    let tree = RandomTree::build(node_count, &mut rng);
    assert_eq!(tree.node_count(), node_count);
    assert_eq!(tree.edge_count(), node_count.saturating_sub(1));
    assert_eq!(tree.parent(0), None);
    for node in 1..node_count {
        let parent = tree.parent(node).expect("non-root nodes have a parent");
        assert!(parent < node);
        assert_eq!(tree.edge(node - 1), Some((parent, node)));
    }
    let whole = Subtree::from_nodes(0..node_count);
    assert!(induces_connected_subtree(&tree, &whole));
}

#[test]
fn random_tree_is_deterministic_per_seed() {
    let left = RandomTree::build(40, &mut SmallRng::seed_from_u64(99));
    let right = RandomTree::build(40, &mut SmallRng::seed_from_u64(99));
    assert_eq!(left, right);
}

#[test]
fn random_recursive_tree_concentrates_degree_on_the_root() {
    // The root of a random recursive tree on n nodes has expected degree
    // H(n-1) (about 5.9 for n = 200); a uniform labelled tree averages under 2.
    let node_count = 200;
    let trials = 200;
    let total: usize = (0..trials)
        .map(|seed| {
            let tree = RandomTree::build(node_count, &mut SmallRng::seed_from_u64(seed));
            tree.neighbours(0).len()
        })
        .sum();
    let mean = total as f64 / trials as f64;
    assert!(mean > 4.5, "root degree mean {mean} is too small");
    assert!(mean < 7.5, "root degree mean {mean} is too large");
}

#[rstest]
#[case(0)]
#[case(11)]
fn growing_subtree_rejects_unreachable_sizes(#[case] size: usize) {
    let mut rng = SmallRng::seed_from_u64(1);
    let tree = RandomTree::build(10, &mut rng);
    let err = growing_subtree(&tree, size, &mut rng).expect_err("size must be rejected");
    assert_eq!(
        err,
        ChordalError::SubtreeSizeOutOfRange {
            size,
            node_count: 10
        }
    );
}

#[test]
fn growing_subtree_of_full_size_covers_the_tree() {
    let mut rng = SmallRng::seed_from_u64(8);
    let tree = RandomTree::build(25, &mut rng);
    let subtree = growing_subtree(&tree, 25, &mut rng).expect("full size is reachable");
    assert_eq!(subtree.nodes(), (0..25).collect::<Vec<_>>().as_slice());
}

#[test]
fn single_node_tree_supports_every_strategy() {
    let mut rng = SmallRng::seed_from_u64(2);
    let tree = RandomTree::build(1, &mut rng);
    let grown = growing_subtree(&tree, 1, &mut rng).expect("size one is valid");
    assert_eq!(grown.nodes(), &[0]);
    let mut cursor = ShuffleCursor::new(1);
    let joined = connecting_subtree(&tree, &mut cursor, 1, &mut rng).expect("count one is valid");
    assert_eq!(joined.nodes(), &[0]);
    let pruned = pruned_subtree(&tree, 0.5, 0.5, &mut rng);
    assert_eq!(pruned.nodes(), &[0]);
}

#[test]
fn shuffle_cursor_draws_distinct_nodes_and_keeps_a_permutation() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut cursor = ShuffleCursor::new(30);
    for count in [1, 5, 30, 12] {
        let mut picked = cursor.draw(count, &mut rng).expect("count in range").to_vec();
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), count);
        let mut pool = cursor.pool().to_vec();
        pool.sort_unstable();
        assert_eq!(pool, (0..30).collect::<Vec<_>>());
    }
}

#[rstest]
#[case(0)]
#[case(31)]
fn shuffle_cursor_rejects_invalid_counts(#[case] count: usize) {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut cursor = ShuffleCursor::new(30);
    let err = cursor.draw(count, &mut rng).expect_err("count out of range");
    assert_eq!(
        err,
        ChordalError::ConnectionCountOutOfRange {
            count,
            node_count: 30
        }
    );
}

#[test]
fn connecting_one_node_yields_a_singleton() {
    let mut rng = SmallRng::seed_from_u64(21);
    let tree = RandomTree::build(15, &mut rng);
    let mut cursor = ShuffleCursor::new(15);
    for _ in 0..20 {
        let subtree = connecting_subtree(&tree, &mut cursor, 1, &mut rng).expect("valid count");
        assert_eq!(subtree.len(), 1);
    }
}

#[rstest]
#[case(0.01, 100)]
#[case(0.5, 10)]
#[case(1.0, 3)]
fn sampled_connection_counts_stay_in_range(#[case] threshold_prob: f64, #[case] nodes: usize) {
    let mut rng = SmallRng::seed_from_u64(6);
    for _ in 0..200 {
        let count = sample_connection_count(threshold_prob, nodes, &mut rng).expect("valid mean");
        assert!((1..=nodes).contains(&count));
    }
}

#[rstest]
#[case(0.2, 100)]
#[case(0.05, 400)]
fn sampled_connection_counts_centre_on_the_threshold_mean(
    #[case] threshold_prob: f64,
    #[case] nodes: usize,
) {
    const DRAWS: usize = 2_000;
    let mut rng = SmallRng::seed_from_u64(31);
    let total: usize = (0..DRAWS)
        .map(|_| sample_connection_count(threshold_prob, nodes, &mut rng).expect("valid mean"))
        .sum();
    let mean = total as f64 / DRAWS as f64;
    let expected = threshold_prob * nodes as f64;
    assert!(
        (mean - expected).abs() < 1.0,
        "empirical mean {mean} strays from {expected}"
    );
}

#[test]
fn sampled_connection_count_rejects_non_positive_means() {
    let mut rng = SmallRng::seed_from_u64(6);
    let err = sample_connection_count(0.0, 10, &mut rng).expect_err("zero mean is rejected");
    assert_eq!(err, ChordalError::PoissonRejected { lambda: 0.0 });
}

#[test]
fn pruning_nothing_keeps_the_whole_tree() {
    let mut rng = SmallRng::seed_from_u64(13);
    let tree = RandomTree::build(30, &mut rng);
    let subtree = pruned_subtree(&tree, 0.0, 0.9, &mut rng);
    assert_eq!(subtree.len(), 30);
}

/// Components left after removing `deleted` edge ids, found by BFS over the
/// surviving tree edges. Members ascend within each component.
fn surviving_components(tree: &RandomTree, deleted: &[usize]) -> Vec<Vec<usize>> {
    let node_count = tree.node_count();
    let mut adjacency = vec![Vec::new(); node_count];
    for edge_id in (0..tree.edge_count()).filter(|id| !deleted.contains(id)) {
        let (parent, child) = tree.edge(edge_id).expect("edge id within tree");
        adjacency[parent].push(child);
        adjacency[child].push(parent);
    }
    let mut seen = vec![false; node_count];
    let mut components = Vec::new();
    for start in 0..node_count {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

#[rstest]
#[case(40, 0.7, 0.5)]
#[case(25, 0.4, 0.0)]
#[case(60, 0.9, 0.8)]
fn pruned_subtree_is_a_component_above_the_selection_barrier(
    #[case] node_count: usize,
    #[case] edge_deletion: f64,
    #[case] selection_barrier: f64,
) {
    for seed in 0..200 {
        let tree = RandomTree::build(node_count, &mut SmallRng::seed_from_u64(seed));
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut replay = rng.clone();

        let subtree = pruned_subtree(&tree, edge_deletion, selection_barrier, &mut rng);

        let mut edge_ids: Vec<usize> = (0..tree.edge_count()).collect();
        edge_ids.shuffle(&mut replay);
        let deleted = (edge_deletion * tree.edge_count() as f64).floor() as usize;
        let components = surviving_components(&tree, &edge_ids[..deleted]);
        assert_eq!(components.len(), deleted + 1, "seed {seed}");

        let mut sizes: Vec<usize> = components.iter().map(Vec::len).collect();
        sizes.sort_unstable();
        sizes.dedup();
        let first_kept = (selection_barrier * sizes.len() as f64).floor() as usize;
        assert!(
            sizes[first_kept..].contains(&subtree.len()),
            "seed {seed}: size {} below barrier class {}",
            subtree.len(),
            sizes[first_kept],
        );
        assert!(
            components.iter().any(|component| component == subtree.nodes()),
            "seed {seed}: selection is not a whole component"
        );
    }
}

#[test]
fn subtree_intersection_is_symmetric_and_exact() {
    let left = Subtree::from_nodes([1, 4, 9]);
    let right = Subtree::from_nodes([2, 3, 5, 7, 9]);
    let disjoint = Subtree::from_nodes([0, 6]);
    assert!(left.intersects(&right));
    assert!(right.intersects(&left));
    assert!(!left.intersects(&disjoint));
    assert!(!disjoint.intersects(&Subtree::default()));
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn growing_subtrees_have_exact_size_and_stay_connected(
        seed in any::<u64>(),
        node_count in 1_usize..60,
        fraction in 0.0_f64..=1.0,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tree = RandomTree::build(node_count, &mut rng);
        let target = ((fraction * node_count as f64).ceil() as usize).clamp(1, node_count);
        let subtree = growing_subtree(&tree, target, &mut rng).expect("target within tree");
        prop_assert_eq!(subtree.len(), target);
        prop_assert!(induces_connected_subtree(&tree, &subtree));
    }

    #[test]
    fn connecting_subtrees_cover_drawn_nodes_and_stay_connected(
        seed in any::<u64>(),
        node_count in 1_usize..60,
        fraction in 0.0_f64..=1.0,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tree = RandomTree::build(node_count, &mut rng);
        let mut cursor = ShuffleCursor::new(node_count);
        let count = ((fraction * node_count as f64).ceil() as usize).clamp(1, node_count);
        let subtree = connecting_subtree(&tree, &mut cursor, count, &mut rng)
            .expect("count within tree");
        for &drawn in &cursor.pool()[..count] {
            prop_assert!(subtree.contains(drawn));
        }
        prop_assert!(subtree.len() >= count);
        prop_assert!(induces_connected_subtree(&tree, &subtree));
    }

    #[test]
    fn pruned_subtrees_are_connected_components(
        seed in any::<u64>(),
        node_count in 1_usize..60,
        edge_deletion in 0.0_f64..1.0,
        selection_barrier in 0.0_f64..1.0,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tree = RandomTree::build(node_count, &mut rng);
        let subtree = pruned_subtree(&tree, edge_deletion, selection_barrier, &mut rng);
        prop_assert!(!subtree.is_empty());
        prop_assert!(induces_connected_subtree(&tree, &subtree));
    }
}
