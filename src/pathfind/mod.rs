//! All-pairs shortest hop counts over a board graph.
//!
//! Distances ignore transport and tickets: every edge costs one hop
//! whatever carries it. That makes the table a loose lower bound on
//! real travel (a player without the right tickets may need longer),
//! which is exactly what pursuit heuristics want.
//!
//! The table is dense, sized by the highest node id in the graph, and
//! built once with Floyd-Warshall. For board-sized graphs (a couple of
//! hundred nodes) construction is microseconds and queries are a single
//! index.

use serde::{Deserialize, Serialize};

use crate::core::GameError;
use crate::graph::{Graph, NodeId};

/// Precomputed hop counts between every pair of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTable {
    size: usize,
    hops: Vec<u32>,
}

impl DistanceTable {
    /// Sentinel hop count for pairs with no connecting path.
    ///
    /// Ids below the table size that never appear in the graph are
    /// unreachable from everywhere, including themselves.
    pub const UNREACHABLE: u32 = u32::MAX;

    /// Builds the table for `graph`.
    ///
    /// The table covers ids `0..=max` where `max` is the highest node
    /// id present; an empty graph yields an empty table.
    pub fn from_graph(graph: &Graph) -> Self {
        let size = graph.max_node().map_or(0, |node| node.index() + 1);
        let mut hops = vec![Self::UNREACHABLE; size * size];

        for node in graph.nodes() {
            hops[node.index() * size + node.index()] = 0;
            for edge in graph.edges_from(node) {
                let slot = &mut hops[node.index() * size + edge.destination.index()];
                *slot = (*slot).min(1);
            }
        }

        for via in 0..size {
            for from in 0..size {
                let first = hops[from * size + via];
                if first == Self::UNREACHABLE {
                    continue;
                }
                for to in 0..size {
                    let second = hops[via * size + to];
                    if second == Self::UNREACHABLE {
                        continue;
                    }
                    let relaxed = first + second;
                    let direct = &mut hops[from * size + to];
                    if relaxed < *direct {
                        *direct = relaxed;
                    }
                }
            }
        }

        DistanceTable { size, hops }
    }

    /// Number of node ids the table covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Hop count from `from` to `to`, [`Self::UNREACHABLE`] when no
    /// path exists.
    ///
    /// # Panics
    ///
    /// Panics if either id lies outside the table.
    #[must_use]
    pub fn hops(&self, from: NodeId, to: NodeId) -> u32 {
        assert!(
            from.index() < self.size && to.index() < self.size,
            "node outside the distance table ({from} or {to}, size {})",
            self.size
        );
        self.hops[from.index() * self.size + to.index()]
    }

    /// Whether any path connects `from` to `to`.
    #[must_use]
    pub fn reachable(&self, from: NodeId, to: NodeId) -> bool {
        self.hops(from, to) != Self::UNREACHABLE
    }

    /// Fallible distance between two possibly concealed positions.
    ///
    /// Positions come in as options because a hidden MrX has no public
    /// location; asking for a distance involving one fails with
    /// [`GameError::ConcealedLocation`] rather than guessing.
    pub fn distance(
        &self,
        from: Option<NodeId>,
        to: Option<NodeId>,
    ) -> Result<u32, GameError> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(self.hops(from, to)),
            _ => Err(GameError::ConcealedLocation),
        }
    }
}
