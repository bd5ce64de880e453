//! Engine-owned game state and its transition rules.
//!
//! `GameState` is the single mutable record behind the engine: the
//! board, the schedule, every player's true position and bank, whose
//! turn it is, how many rounds MrX has played, where he was last seen,
//! and whether the game has been decided.
//!
//! The driver in `engine::mod` choreographs turns and spectator
//! notifications; the methods here perform the individual transitions
//! and win checks, and compute the concealment substitutions.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Colour, PlayerState, Ticket};
use crate::graph::{Graph, NodeId};
use crate::moves::{legal_moves, DoubleMove, Move, TicketMove};

/// Which side won a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    MrXWins,
    DetectivesWin,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::MrXWins => write!(f, "MrX wins"),
            Outcome::DetectivesWin => write!(f, "detectives win"),
        }
    }
}

/// Notifications spectators see when MrX travels on a hidden round carry
/// this destination until his first reveal.
const UNREVEALED: NodeId = NodeId::new(0);

/// The complete mutable state of one game.
///
/// Players are stored MrX first, detectives in configuration order.
/// `round` counts consumed schedule slots, so it equals the number of
/// legs MrX has travelled and is strictly bounded by the schedule
/// length. The outcome is written once and never overwritten.
#[derive(Clone, Debug)]
pub(crate) struct GameState {
    graph: Graph,
    rounds: Vec<bool>,
    players: Vec<PlayerState>,
    current: usize,
    round: usize,
    last_seen: Option<NodeId>,
    outcome: Option<Outcome>,
    history: Vector<Move>,
}

impl GameState {
    pub(crate) fn new(graph: Graph, rounds: Vec<bool>, players: Vec<PlayerState>) -> Self {
        Self {
            graph,
            rounds,
            players,
            current: 0,
            round: 0,
            last_seen: None,
            outcome: None,
            history: Vector::new(),
        }
    }

    // === Read access ===

    pub(crate) fn graph(&self) -> &Graph {
        &self.graph
    }

    pub(crate) fn rounds(&self) -> &[bool] {
        &self.rounds
    }

    pub(crate) fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub(crate) fn player(&self, colour: Colour) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.colour() == colour)
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current
    }

    pub(crate) fn current_colour(&self) -> Colour {
        self.players[self.current].colour()
    }

    pub(crate) fn round(&self) -> usize {
        self.round
    }

    pub(crate) fn last_seen(&self) -> Option<NodeId> {
        self.last_seen
    }

    pub(crate) fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub(crate) fn history(&self) -> &Vector<Move> {
        &self.history
    }

    /// Detective locations, the set no move may end a leg on.
    pub(crate) fn occupied(&self) -> FxHashSet<NodeId> {
        self.players[1..].iter().map(|p| p.location()).collect()
    }

    pub(crate) fn schedule_exhausted(&self) -> bool {
        self.round >= self.rounds.len()
    }

    /// Enumerate the active player's legal moves.
    pub(crate) fn legal_for_current(&self) -> FxHashSet<Move> {
        let remaining = self.rounds.len().saturating_sub(self.round);
        legal_moves(
            &self.graph,
            &self.players[self.current],
            &self.occupied(),
            remaining,
        )
    }

    // === Transitions ===

    /// Travel one MrX leg: pay the ticket, move, consume a schedule slot.
    ///
    /// Returns the new round number and the move as spectators may see
    /// it, with the destination substituted on hidden rounds.
    pub(crate) fn apply_mr_x_leg(&mut self, leg: TicketMove) -> (usize, TicketMove) {
        self.players[0].tickets_mut().debit(leg.ticket);
        self.players[0].set_location(leg.destination);
        self.round += 1;

        let reveal = self.rounds[self.round - 1];
        if reveal {
            self.last_seen = Some(leg.destination);
        }
        let shown = self.public_destination(leg.destination, reveal);
        (self.round, TicketMove::new(leg.colour, leg.ticket, shown))
    }

    /// Move a detective: pay the ticket to MrX, update the location.
    ///
    /// The mover is the active player; donation of the spent ticket to
    /// the evader's bank is part of the game's economy.
    pub(crate) fn apply_detective_move(&mut self, mv: TicketMove) {
        self.players[self.current].tickets_mut().debit(mv.ticket);
        self.players[self.current].set_location(mv.destination);
        self.players[0].tickets_mut().credit(mv.ticket);
    }

    /// Pay for a double move. The legs are applied separately.
    pub(crate) fn spend_double(&mut self) {
        self.players[0].tickets_mut().debit(Ticket::Double);
    }

    /// The double move as spectators may see it, computed before either
    /// leg is applied.
    ///
    /// Each leg's destination is substituted independently from the
    /// schedule slot it will consume; a hidden second leg falls back to
    /// whatever the first leg showed.
    pub(crate) fn masked_double(&self, mv: &DoubleMove) -> DoubleMove {
        let reveal_first = self.rounds[self.round];
        let reveal_second = self.rounds[self.round + 1];

        let first_shown = self.public_destination(mv.first.destination, reveal_first);
        let second_shown = if reveal_second {
            mv.second.destination
        } else {
            first_shown
        };

        DoubleMove::new(
            mv.colour,
            TicketMove::new(mv.colour, mv.first.ticket, first_shown),
            TicketMove::new(mv.colour, mv.second.ticket, second_shown),
        )
    }

    fn public_destination(&self, true_destination: NodeId, reveal: bool) -> NodeId {
        if reveal {
            true_destination
        } else {
            self.last_seen.unwrap_or(UNREVEALED)
        }
    }

    /// Append a turn to the public move history.
    pub(crate) fn record(&mut self, mv: Move) {
        self.history.push_back(mv);
    }

    pub(crate) fn advance_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    // === Win conditions ===

    /// Write the outcome if the game is still undecided. Later checks
    /// can never flip a decided game.
    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    /// Detectives win the moment one of them stands on MrX's stop.
    pub(crate) fn check_capture(&mut self) {
        let target = self.players[0].location();
        if self.players[1..].iter().any(|p| p.location() == target) {
            self.set_outcome(Outcome::DetectivesWin);
        }
    }

    /// MrX wins the moment every detective is out of standard tickets;
    /// none of them can ever move again.
    pub(crate) fn check_detective_exhaustion(&mut self) {
        if !self.players[1..].iter().any(|p| p.tickets().has_any_standard()) {
            self.set_outcome(Outcome::MrXWins);
        }
    }

    /// Degenerate win conditions that can hold before the first turn.
    pub(crate) fn evaluate_initial_outcome(&mut self) {
        self.check_detective_exhaustion();
        if self.outcome.is_none() && self.legal_for_current().is_empty() {
            // It is MrX's turn at construction; no moves means he is
            // boxed in before the chase starts.
            self.set_outcome(Outcome::DetectivesWin);
        }
    }

    pub(crate) fn winning_players(&self) -> FxHashSet<Colour> {
        match self.outcome {
            None => FxHashSet::default(),
            Some(Outcome::MrXWins) => std::iter::once(Colour::Black).collect(),
            Some(Outcome::DetectivesWin) => self.players[1..].iter().map(|p| p.colour()).collect(),
        }
    }
}
