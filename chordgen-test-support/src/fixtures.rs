//! Small reference graphs as `(node_count, edges)` pairs.

/// A graph given by its node count and undirected edge list.
pub type EdgeList = (usize, Vec<(usize, usize)>);

/// Two triangles sharing the edge `{1, 2}`: a 4-cycle with one chord.
#[must_use]
pub fn diamond() -> EdgeList {
    (4, vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)])
}

/// The path `0 - 1 - ... - (n - 1)`.
#[must_use]
pub fn path(node_count: usize) -> EdgeList {
    let edges = (1..node_count).map(|node| (node - 1, node)).collect();
    (node_count, edges)
}

/// Node `0` joined to every other node.
#[must_use]
pub fn star(node_count: usize) -> EdgeList {
    let edges = (1..node_count).map(|leaf| (0, leaf)).collect();
    (node_count, edges)
}

/// Every pair of distinct nodes joined.
#[must_use]
pub fn complete(node_count: usize) -> EdgeList {
    let edges = (0..node_count)
        .flat_map(|left| (left + 1..node_count).map(move |right| (left, right)))
        .collect();
    (node_count, edges)
}

/// The cycle `0 - 1 - ... - (n - 1) - 0`. Chordless for `n >= 4`.
///
/// # Panics
/// Panics when `node_count < 3`.
#[must_use]
pub fn cycle(node_count: usize) -> EdgeList {
    assert!(node_count >= 3, "a cycle needs at least three nodes");
    let edges = (0..node_count)
        .map(|node| (node, (node + 1) % node_count))
        .collect();
    (node_count, edges)
}
