use crate::domain::error::ValidationError;

/// A directed edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Largest node count a graph may be built with.
pub const MAX_NODE_COUNT: usize = 1 << 25;

/// Directed graph stored as an arena of nodes addressed by index.
///
/// Every edge endpoint is guaranteed to be `< node_count()`: edges from outside the
/// crate go through [`Graph::add_edge`], which rejects out-of-range endpoints.
/// Duplicate edges and self-loops are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Allocates `node_count` isolated nodes. Counts above [`MAX_NODE_COUNT`], or that
    /// the allocator refuses, are rejected instead of aborting the process.
    pub fn new(node_count: usize) -> Result<Self, ValidationError> {
        let too_large = || ValidationError::NodeCountTooLarge {
            node_count,
            max: MAX_NODE_COUNT,
        };
        if node_count > MAX_NODE_COUNT {
            return Err(too_large());
        }

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(node_count)
            .map_err(|_| too_large())?;
        adjacency.resize_with(node_count, Vec::new);

        Ok(Self {
            adjacency,
            edges: Vec::new(),
        })
    }

    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, ValidationError> {
        let mut graph = Self::new(node_count)?;
        for (source, target) in edges {
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<(), ValidationError> {
        let node_count = self.node_count();
        for endpoint in [source, target] {
            if endpoint >= node_count {
                return Err(ValidationError::NodeOutOfRange {
                    token: format!("{source}-{target}"),
                    endpoint: endpoint.to_string(),
                    node_count,
                });
            }
        }

        self.push_edge(source, target);
        Ok(())
    }

    /// Caller must have checked both endpoints against `node_count()`.
    pub(crate) fn push_edge(&mut self, source: usize, target: usize) {
        debug_assert!(source < self.node_count() && target < self.node_count());
        self.adjacency[source].push(target);
        self.edges.push(Edge::new(source, target));
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing neighbors of `node`, in insertion order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_self_loop(&self, node: usize) -> bool {
        self.adjacency[node].iter().any(|&v| v == node)
    }

    pub fn self_loop_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_self_loop()).count()
    }
}

/// Partition of a graph's nodes into strongly connected components.
///
/// `component_of[v]` is the id of the component containing `v`; ids follow the order in
/// which the detector closed the components. `components[id]` lists members ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    /// Assembles the result from components listed in closing order.
    pub fn from_closed_components(graph: &Graph, closed: Vec<Vec<usize>>) -> Self {
        let mut component_of = vec![usize::MAX; graph.node_count()];
        let mut components = Vec::with_capacity(closed.len());
        let mut cyclic_component = Vec::with_capacity(closed.len());

        for (cid, mut members) in closed.into_iter().enumerate() {
            for &v in members.iter() {
                component_of[v] = cid;
            }
            members.sort_unstable();

            let cyclic = match members.as_slice() {
                [only] => graph.has_self_loop(*only),
                _ => true,
            };
            cyclic_component.push(cyclic);
            components.push(members);
        }

        Self {
            component_of,
            components,
            cyclic_component,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    pub fn singleton_count(&self) -> usize {
        self.components.iter().filter(|c| c.len() == 1).count()
    }

    pub fn largest_component_size(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.component_of[u] == self.component_of[v]
    }
}
