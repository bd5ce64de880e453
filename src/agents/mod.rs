//! Agents: the decision seam between the engine and move selection.
//!
//! The engine enumerates the legal moves for whoever is to play, then
//! asks that player's [`Agent`] to pick one. The call is synchronous;
//! an interactive frontend that needs to wait on a human blocks inside
//! `choose_move` and the engine neither knows nor cares.
//!
//! The view handed to an agent is the public one. A detective agent
//! therefore sees MrX only as his last revealed position, while the
//! moves offered to MrX's own agent are enumerated from his true
//! position.

use rustc_hash::FxHashSet;

use crate::engine::GameView;
use crate::graph::NodeId;
use crate::moves::Move;

mod random;
mod scoring;

pub use random::RandomAgent;
pub use scoring::ScoringAgent;

/// Chooses one move from a set of legal candidates.
pub trait Agent {
    /// Picks a move from `moves`.
    ///
    /// `location` is the player's true position, which for MrX may be
    /// more than `view` reveals. The engine only consults an agent when
    /// `moves` is non-empty, and rejects any reply outside the set, so
    /// an implementation may select freely but must select from the
    /// set.
    fn choose_move(
        &mut self,
        view: &GameView<'_>,
        location: NodeId,
        moves: &FxHashSet<Move>,
    ) -> Move;
}
