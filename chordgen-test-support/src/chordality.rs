//! Independent chordality and clique oracles.
//!
//! These are deliberately simple quadratic implementations used to check the
//! linear-time code in `chordgen-core`. Out-of-range node ids make every
//! predicate return `false`.

use std::collections::BTreeSet;

fn adjacency(node_count: usize, edges: &[(usize, usize)]) -> Option<Vec<BTreeSet<usize>>> {
    let mut sets = vec![BTreeSet::new(); node_count];
    for &(left, right) in edges {
        if left >= node_count || right >= node_count {
            return None;
        }
        if left != right {
            sets[left].insert(right);
            sets[right].insert(left);
        }
    }
    Some(sets)
}

/// Returns whether `order` is a perfect elimination ordering of the graph.
///
/// `order[i]` is the node eliminated at step `i`. The ordering is perfect
/// when, for every node, the neighbours eliminated after it are pairwise
/// adjacent.
///
/// # Examples
/// ```
/// use chordgen_test_support::chordality::is_perfect_elimination_order;
///
/// let edges = [(0, 1), (0, 2), (1, 2), (2, 3)];
/// assert!(is_perfect_elimination_order(4, &edges, &[3, 0, 1, 2]));
/// // Eliminating 2 first leaves 0, 1 and 3 behind, and 3 is not adjacent to 0.
/// assert!(!is_perfect_elimination_order(4, &edges, &[2, 0, 1, 3]));
/// ```
#[must_use]
pub fn is_perfect_elimination_order(
    node_count: usize,
    edges: &[(usize, usize)],
    order: &[usize],
) -> bool {
    let Some(neighbours) = adjacency(node_count, edges) else {
        return false;
    };
    if order.len() != node_count {
        return false;
    }
    let mut position = vec![usize::MAX; node_count];
    for (step, &node) in order.iter().enumerate() {
        if node >= node_count || position[node] != usize::MAX {
            return false;
        }
        position[node] = step;
    }

    order.iter().all(|&node| {
        let later: Vec<usize> = neighbours[node]
            .iter()
            .copied()
            .filter(|&other| position[other] > position[node])
            .collect();
        later.iter().enumerate().all(|(index, &first)| {
            later
                .iter()
                .skip(index + 1)
                .all(|second| neighbours[first].contains(second))
        })
    })
}

/// Returns whether the graph is chordal.
///
/// Runs a plain maximum cardinality search (ties broken by smallest id) and
/// checks the reversed visiting order with
/// [`is_perfect_elimination_order`].
///
/// # Examples
/// ```
/// use chordgen_test_support::chordality::is_chordal;
///
/// assert!(is_chordal(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]));
/// assert!(!is_chordal(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]));
/// ```
#[must_use]
pub fn is_chordal(node_count: usize, edges: &[(usize, usize)]) -> bool {
    let Some(neighbours) = adjacency(node_count, edges) else {
        return false;
    };
    let mut weight = vec![0_usize; node_count];
    let mut visited = vec![false; node_count];
    let mut visit_order = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let Some(next) = (0..node_count)
            .filter(|&node| !visited[node])
            .max_by_key(|&node| (weight[node], std::cmp::Reverse(node)))
        else {
            break;
        };
        visited[next] = true;
        visit_order.push(next);
        for &other in &neighbours[next] {
            if !visited[other] {
                weight[other] += 1;
            }
        }
    }
    visit_order.reverse();
    is_perfect_elimination_order(node_count, edges, &visit_order)
}

/// Lists every maximal clique with Bron–Kerbosch pivoting.
///
/// Each clique is sorted ascending and the list is sorted lexicographically.
/// Isolated nodes form singleton cliques. Exponential in the worst case, so
/// keep inputs small.
///
/// # Examples
/// ```
/// use chordgen_test_support::chordality::maximal_cliques_by_enumeration;
///
/// let cliques = maximal_cliques_by_enumeration(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]);
/// assert_eq!(cliques, vec![vec![0, 1, 2], vec![2, 3]]);
/// ```
#[must_use]
pub fn maximal_cliques_by_enumeration(
    node_count: usize,
    edges: &[(usize, usize)],
) -> Vec<Vec<usize>> {
    let Some(neighbours) = adjacency(node_count, edges) else {
        return Vec::new();
    };
    let mut cliques = Vec::new();
    bron_kerbosch(
        &neighbours,
        &mut Vec::new(),
        (0..node_count).collect(),
        BTreeSet::new(),
        &mut cliques,
    );
    for clique in &mut cliques {
        clique.sort_unstable();
    }
    cliques.sort();
    cliques
}

fn bron_kerbosch(
    neighbours: &[BTreeSet<usize>],
    current: &mut Vec<usize>,
    mut candidates: BTreeSet<usize>,
    mut excluded: BTreeSet<usize>,
    cliques: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if !current.is_empty() {
            cliques.push(current.clone());
        }
        return;
    }
    let Some(pivot) = candidates
        .union(&excluded)
        .copied()
        .max_by_key(|&node| neighbours[node].intersection(&candidates).count())
    else {
        return;
    };
    let branches: Vec<usize> = candidates.difference(&neighbours[pivot]).copied().collect();
    for node in branches {
        current.push(node);
        bron_kerbosch(
            neighbours,
            current,
            candidates.intersection(&neighbours[node]).copied().collect(),
            excluded.intersection(&neighbours[node]).copied().collect(),
            cliques,
        );
        current.pop();
        candidates.remove(&node);
        excluded.insert(node);
    }
}
