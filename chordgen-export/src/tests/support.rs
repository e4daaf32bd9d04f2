use chordgen_core::{ChordalGraph, ChordalGraphBuilder, GenerationMethod};

pub(super) fn generated_graph(method: GenerationMethod, nodes: usize, seed: u64) -> ChordalGraph {
    ChordalGraphBuilder::new(method)
        .with_node_count(nodes)
        .with_seed(seed)
        .build()
        .expect("configuration is valid")
        .generate()
        .expect("generation succeeds")
        .into_graph()
}

pub(super) fn diamond() -> ChordalGraph {
    ChordalGraph::from_edges(4, [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)])
        .expect("edges are valid")
}
