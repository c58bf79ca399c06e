use petgraph::graph::{NodeIndex, UnGraph};

use crate::Flavor;

/// The fixed worker adjacency graph.
///
/// Node `0` is always the gatekeeper. Nodes are added in id order at
/// construction, so a worker id and its [`NodeIndex`] coincide — `neighbors`
/// below can go straight from `usize` to `usize` without a lookup table.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<(), ()>,
}

impl Graph {
    /// Builds the graph from `n` worker ids and an undirected edge list.
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut inner = UnGraph::with_capacity(n, edges.len());
        for _ in 0..n {
            inner.add_node(());
        }
        for &(u, v) in edges {
            inner.update_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Neighbors of worker `w`, in petgraph's natural (reverse-insertion)
    /// iteration order.
    pub fn neighbors(&self, w: usize) -> impl Iterator<Item = usize> + '_ {
        self.inner.neighbors(NodeIndex::new(w)).map(|ix| ix.index())
    }
}

/// Fixed topology: the worker graph plus each worker's flavor.
///
/// Established once, on the first turn, and never mutated afterward (see
/// SPEC_FULL.md §1 Non-goals: no dynamic graph topology after
/// initialization).
#[derive(Debug, Clone)]
pub struct Topology {
    pub graph: Graph,
    pub flavors: Vec<Flavor>,
}

impl Topology {
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn flavor(&self, w: usize) -> Flavor {
        self.flavors[w]
    }
}
