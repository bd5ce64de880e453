//! The read-only view handed to agents and spectators.
//!
//! A `GameView` borrows the engine's state for the duration of one
//! callback or query. It never exposes MrX's true location: his
//! position is reported as the last revealed stop, or nothing at all
//! before his first reveal. Detectives play in the open, so their
//! locations and banks are always visible.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::{Colour, Ticket};
use crate::graph::{Graph, NodeId};
use crate::moves::Move;

use super::state::{GameState, Outcome};

/// A read-only window onto a running game.
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    state: &'a GameState,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Every player's colour, MrX first, detectives in configuration order.
    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.state.players().iter().map(|p| p.colour()).collect()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.state.current_colour()
    }

    /// Completed MrX legs, equal to the number of consumed schedule slots.
    #[must_use]
    pub fn current_round(&self) -> usize {
        self.state.round()
    }

    /// The reveal schedule, one flag per round.
    #[must_use]
    pub fn rounds(&self) -> &[bool] {
        self.state.rounds()
    }

    /// The board.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        self.state.graph()
    }

    /// A player's publicly known location.
    ///
    /// Detectives report their true stop. MrX reports the stop from his
    /// most recent reveal round, and `None` before his first reveal.
    /// Colours not in this game also report `None`.
    #[must_use]
    pub fn player_location(&self, colour: Colour) -> Option<NodeId> {
        let player = self.state.player(colour)?;
        if player.is_mr_x() {
            self.state.last_seen()
        } else {
            Some(player.location())
        }
    }

    /// How many tickets of a kind a player holds, `None` for colours
    /// not in this game.
    #[must_use]
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.state.player(colour).map(|p| p.tickets().count(ticket))
    }

    /// Check whether the game has been decided.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.outcome().is_some()
    }

    /// Which side won, `None` while the chase is still on.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// The winners' colours: empty while running, `{Black}` for a MrX
    /// win, every detective for a capture.
    #[must_use]
    pub fn winning_players(&self) -> FxHashSet<Colour> {
        self.state.winning_players()
    }

    /// The public travel log: one move per completed turn, with MrX's
    /// destinations substituted exactly as they were announced.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        self.state.history()
    }
}
