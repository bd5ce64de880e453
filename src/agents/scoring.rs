//! Distance-scored move selection for the evader.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::agents::Agent;
use crate::engine::GameView;
use crate::graph::{Graph, NodeId};
use crate::moves::Move;
use crate::pathfind::DistanceTable;

/// Greedy escape heuristic.
///
/// Each candidate move is scored by where it ends: the mean hop count
/// to the detectives (further is better) plus the destination's degree
/// (a busy junction keeps options open). Destinations within one hop of
/// any detective are unsafe and only chosen when nothing safe exists.
/// A pass scores below every real move.
///
/// The distance table is built from the board on first use and kept for
/// the rest of the game.
#[derive(Clone, Debug, Default)]
pub struct ScoringAgent {
    distances: Option<DistanceTable>,
}

impl ScoringAgent {
    #[must_use]
    pub fn new() -> Self {
        ScoringAgent { distances: None }
    }
}

impl Agent for ScoringAgent {
    fn choose_move(
        &mut self,
        view: &GameView<'_>,
        _location: NodeId,
        moves: &FxHashSet<Move>,
    ) -> Move {
        let table = self
            .distances
            .get_or_insert_with(|| DistanceTable::from_graph(view.graph()));
        let detectives: Vec<NodeId> = view
            .players()
            .iter()
            .filter(|colour| colour.is_detective())
            .filter_map(|&colour| view.player_location(colour))
            .collect();

        let scored: Vec<(Move, f64, bool)> = moves
            .iter()
            .map(|&mv| match mv.final_destination() {
                Some(destination) => {
                    let score =
                        score_destination(table, view.graph(), &detectives, destination);
                    let safe = detectives
                        .iter()
                        .all(|&detective| table.hops(destination, detective) >= 2);
                    (mv, score, safe)
                }
                None => (mv, f64::NEG_INFINITY, false),
            })
            .collect();

        let pick = scored
            .iter()
            .filter(|(_, _, safe)| *safe)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .or_else(|| {
                scored
                    .iter()
                    .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            });

        match pick {
            Some(&(mv, _, _)) => mv,
            None => panic!("choose_move invoked with no candidate moves"),
        }
    }
}

fn score_destination(
    table: &DistanceTable,
    graph: &Graph,
    detectives: &[NodeId],
    destination: NodeId,
) -> f64 {
    let total: f64 = detectives
        .iter()
        .map(|&detective| f64::from(table.hops(destination, detective)))
        .sum();
    let spread = total / detectives.len() as f64;
    spread + graph.degree(destination) as f64
}
