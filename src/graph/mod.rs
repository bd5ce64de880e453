//! The board: an undirected multigraph of numbered stops.
//!
//! ## Nodes and edges
//!
//! Stops are identified by `NodeId`. Edges carry the `Transport` needed
//! to travel them; two stops may be linked by several edges of different
//! transports. Adding an edge records it in both directions.
//!
//! ## Queries
//!
//! The graph is immutable after `GraphBuilder::build`. Lookups the engine
//! and agents need are O(1) per node: the typed edges leaving a stop, its
//! degree, and the largest node id (used to size distance tables).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A stop on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Create a new node id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index for dense table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for NodeId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {}", self.0)
    }
}

/// The transport an edge is travelled by.
///
/// Ferry edges are the river crossings; they cost a `Secret` ticket, so
/// detectives can never use them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

impl Transport {
    /// All transports in declaration order.
    pub const ALL: [Transport; 4] = [
        Transport::Taxi,
        Transport::Bus,
        Transport::Underground,
        Transport::Ferry,
    ];
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Taxi => "Taxi",
            Transport::Bus => "Bus",
            Transport::Underground => "Underground",
            Transport::Ferry => "Ferry",
        };
        write!(f, "{name}")
    }
}

/// A directed view of one board connection.
///
/// The builder stores each undirected connection as two of these, one
/// per direction, so `edges_from` always returns edges whose `source`
/// is the queried node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
    pub transport: Transport,
}

/// An immutable board graph.
///
/// ## Example
///
/// ```
/// use shadow_chase::graph::{GraphBuilder, NodeId, Transport};
///
/// let graph = GraphBuilder::new()
///     .edge(1, 2, Transport::Taxi)
///     .edge(2, 3, Transport::Bus)
///     .build();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.degree(NodeId::new(2)), 2);
/// assert_eq!(graph.max_node(), Some(NodeId::new(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: FxHashMap<NodeId, SmallVec<[Edge; 4]>>,
    edge_count: usize,
}

impl Graph {
    /// Check whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections, each counted once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check whether a node is on the board.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// The typed edges leaving a node. Empty for unknown nodes.
    #[must_use]
    pub fn edges_from(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map_or(&[], |edges| edges.as_slice())
    }

    /// The valency of a node: how many typed edges leave it.
    ///
    /// Parallel edges of different transports each count, matching how
    /// many distinct departures a player standing there has.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.edges_from(node).len()
    }

    /// Iterate over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// The largest node id on the board, or `None` for an empty graph.
    ///
    /// Dense per-node tables must be sized from this, not from an assumed
    /// board size.
    #[must_use]
    pub fn max_node(&self) -> Option<NodeId> {
        self.nodes().max()
    }
}

/// Chaining builder for `Graph`.
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
        }
    }

    /// Add a node without any edges.
    ///
    /// Nodes mentioned by `edge` are added implicitly; this is only
    /// needed for stops nothing connects to.
    #[must_use]
    pub fn node(mut self, node: impl Into<NodeId>) -> Self {
        self.graph.adjacency.entry(node.into()).or_default();
        self
    }

    /// Add an undirected connection between two stops.
    ///
    /// The edge is recorded in both directions. Exact duplicates (same
    /// pair, same transport) are ignored.
    #[must_use]
    pub fn edge(mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, transport: Transport) -> Self {
        let a = a.into();
        let b = b.into();

        let forward = Edge {
            source: a,
            destination: b,
            transport,
        };
        if self.graph.edges_from(a).contains(&forward) {
            return self;
        }

        self.graph.adjacency.entry(a).or_default().push(forward);
        self.graph.adjacency.entry(b).or_default().push(Edge {
            source: b,
            destination: a,
            transport,
        });
        self.graph.edge_count += 1;
        self
    }

    /// Finish the graph.
    #[must_use]
    pub fn build(self) -> Graph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
