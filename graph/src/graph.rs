pub type NodeIndex = usize;
pub type EdgeIndex = usize;

#[derive(Debug, Clone)]
pub struct Node<W: Clone> {
    weight: W,
    outgoing: Vec<EdgeIndex>,
}

impl<W: Clone> Node<W> {
    pub fn new(weight: W) -> Self {
        Node {
            weight,
            outgoing: Vec::new(),
        }
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Outgoing edges in insertion order
    pub fn outgoing(&self) -> &[EdgeIndex] {
        &self.outgoing
    }
}

#[derive(Debug, Clone)]
pub struct Edge<E: Clone> {
    source: NodeIndex,
    target: NodeIndex,
    weight: E,
}

impl<E: Clone> Edge<E> {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: E) -> Self {
        Self {
            source,
            target,
            weight
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn target(&self) -> NodeIndex {
        self.target
    }

    pub fn weight(&self) -> &E {
        &self.weight
    }
}

/// Directed graph stored as per-node adjacency lists over a shared edge arena.
///
/// An undirected connection is represented by two directed edges; see
/// [`Graph::add_edge_pair`].
#[derive(Debug, Clone)]
pub struct Graph<N: Clone, E: Clone> {
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
}

impl<N: Clone, E: Clone> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates `n` nodes, all carrying a copy of `weight`.
    pub fn with_nodes(n: usize, weight: N) -> Self {
        Self {
            nodes: vec![Node::new(weight); n],
            edges: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, u: NodeIndex) -> bool {
        u < self.nodes.len()
    }

    pub fn node(&self, u: NodeIndex) -> &Node<N> {
        &self.nodes[u]
    }

    pub fn nodes(&self) -> &[Node<N>] {
        &self.nodes
    }

    pub fn node_weight_mut(&mut self, u: NodeIndex) -> &mut N {
        &mut self.nodes[u].weight
    }

    pub fn edge(&self, eid: EdgeIndex) -> &Edge<E> {
        &self.edges[eid]
    }

    pub fn add_node(&mut self, weight: N) -> NodeIndex {
        let node = Node::new(weight);
        let id = self.node_count();
        self.nodes.push(node);
        id
    }

    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, weight: E) -> EdgeIndex {
        let eid = self.edges.len();
        self.edges.push(Edge::new(source, target, weight));
        self.nodes[source].outgoing.push(eid);
        eid
    }

    /// Adds `u -> v` and `v -> u` with the same weight.
    pub fn add_edge_pair(&mut self, u: NodeIndex, v: NodeIndex, weight: E) -> (EdgeIndex, EdgeIndex) {
        let forward = self.add_edge(u, v, weight.clone());
        let backward = self.add_edge(v, u, weight);
        (forward, backward)
    }

    pub fn outgoing_edges(&self, u: NodeIndex) -> &[EdgeIndex] {
        &self.nodes[u].outgoing
    }

    /// Iterates over the edges leaving `u`, in insertion order.
    pub fn edges_from(&self, u: NodeIndex) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.nodes[u].outgoing.iter().map(move |&eid| &self.edges[eid])
    }

    pub fn neighbors(&self, u: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.edges_from(u).map(|e| e.target())
    }

    /// The first edge `u -> v` in `u`'s adjacency list.
    pub fn find_edge(&self, u: NodeIndex, v: NodeIndex) -> Option<&Edge<E>> {
        self.edges_from(u).find(|e| e.target() == v)
    }
}

pub type DiGraph<N, E> = Graph<N, E>;
