//! Explicit weighted graphs and two ways of searching them.
//!
//! Accumulated costs saturate at `u64::MAX` instead of overflowing.
//!
//! - [`NearestWorld`]: one state per node (fingerprint = node). Shortest
//!   distances; duplicate arrivals collapse.
//! - [`RouteWorld`]: one state per route (fingerprint = hash of the node
//!   sequence). Every distinct route to the target is a separate completion,
//!   which is what all-completions mode needs to enumerate paths.

use std::collections::{BTreeSet, HashMap};

use advent_kernel::hash::ContentHash;
use advent_search::contract::{hashed_fingerprint, SearchState, SearchWorld};

/// Dense node identifier assigned by [`AdjacencyGraph`] in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Named nodes with weighted directed edges.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    names: Vec<String>,
    ids: HashMap<String, NodeId>,
    edges: Vec<Vec<(NodeId, u64)>>,
}

impl AdjacencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directed graph from `(from, to, weight)` triples.
    #[must_use]
    pub fn from_edges(edges: &[(&str, &str, u64)]) -> Self {
        let mut graph = Self::new();
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Undirected graph from `(a, b, weight)` triples.
    #[must_use]
    pub fn from_undirected(edges: &[(&str, &str, u64)]) -> Self {
        let mut graph = Self::new();
        for &(a, b, weight) in edges {
            graph.add_undirected(a, b, weight);
        }
        graph
    }

    /// Id for `name`, inserting the node if it is new.
    #[allow(clippy::cast_possible_truncation)]
    pub fn node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.edges.push(Vec::new());
        id
    }

    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) {
        let from = self.node(from);
        let to = self.node(to);
        self.edges[from.0 as usize].push((to, weight));
    }

    pub fn add_undirected(&mut self, a: &str, b: &str, weight: u64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    #[must_use]
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.0 as usize]
    }

    /// Outgoing `(neighbor, weight)` pairs in insertion order.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, u64)] {
        self.edges.get(id.0 as usize).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A node plus the distance travelled to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStep {
    pub node: NodeId,
    pub cost: u64,
}

impl SearchState for NodeStep {
    type Fingerprint = NodeId;

    fn cost(&self) -> u64 {
        self.cost
    }

    fn fingerprint(&self) -> NodeId {
        self.node
    }
}

/// Shortest-distance world: reach `target` as cheaply as possible.
pub struct NearestWorld<'g> {
    graph: &'g AdjacencyGraph,
    target: NodeId,
}

impl<'g> NearestWorld<'g> {
    #[must_use]
    pub fn new(graph: &'g AdjacencyGraph, target: NodeId) -> Self {
        Self { graph, target }
    }

    #[must_use]
    pub fn start(&self, node: NodeId) -> NodeStep {
        NodeStep { node, cost: 0 }
    }
}

impl SearchWorld for NearestWorld<'_> {
    type State = NodeStep;

    fn is_goal(&self, state: &NodeStep) -> bool {
        state.node == self.target
    }

    fn successors(&self, state: &NodeStep) -> Vec<NodeStep> {
        self.graph
            .neighbors(state.node)
            .iter()
            .map(|&(node, weight)| NodeStep {
                node,
                cost: state.cost.saturating_add(weight),
            })
            .collect()
    }
}

/// A full route from the start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub cost: u64,
}

impl Route {
    #[must_use]
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    fn canonical_bytes(&self) -> Vec<u8> {
        self.nodes.iter().flat_map(|n| n.0.to_le_bytes()).collect()
    }
}

impl SearchState for Route {
    type Fingerprint = ContentHash;

    fn cost(&self) -> u64 {
        self.cost
    }

    fn fingerprint(&self) -> ContentHash {
        hashed_fingerprint(&self.canonical_bytes())
    }
}

/// Route-enumeration world: every route from the start to `target` that
/// visits each node at most once, except nodes marked revisitable.
///
/// Two revisitable nodes joined by an edge make the route space infinite;
/// callers must not configure that.
pub struct RouteWorld<'g> {
    graph: &'g AdjacencyGraph,
    target: NodeId,
    revisitable: BTreeSet<NodeId>,
}

impl<'g> RouteWorld<'g> {
    #[must_use]
    pub fn new(graph: &'g AdjacencyGraph, target: NodeId) -> Self {
        Self {
            graph,
            target,
            revisitable: BTreeSet::new(),
        }
    }

    /// Allow `node` to appear more than once in a route.
    #[must_use]
    pub fn allow_revisit(mut self, node: NodeId) -> Self {
        self.revisitable.insert(node);
        self
    }

    #[must_use]
    pub fn start(&self, node: NodeId) -> Route {
        Route {
            nodes: vec![node],
            cost: 0,
        }
    }

    fn may_enter(&self, route: &Route, node: NodeId) -> bool {
        self.revisitable.contains(&node) || !route.nodes.contains(&node)
    }
}

impl SearchWorld for RouteWorld<'_> {
    type State = Route;

    fn is_goal(&self, state: &Route) -> bool {
        state.last() == Some(self.target)
    }

    fn successors(&self, state: &Route) -> Vec<Route> {
        let Some(last) = state.last() else {
            return Vec::new();
        };
        self.graph
            .neighbors(last)
            .iter()
            .filter(|&&(node, _)| self.may_enter(state, node))
            .map(|&(node, weight)| {
                let mut nodes = state.nodes.clone();
                nodes.push(node);
                Route {
                    nodes,
                    cost: state.cost.saturating_add(weight),
                }
            })
            .collect()
    }
}
