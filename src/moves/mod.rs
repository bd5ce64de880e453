//! Moves: the three things a player can do on their turn.
//!
//! A `Move` is a tagged union so the engine and agents can pattern-match
//! instead of visiting:
//!
//! - `Ticket`: travel one edge, paying one ticket.
//! - `Double`: MrX only. Two ticket legs in one turn, paid for with a
//!   `Double` ticket on top of the leg tickets.
//! - `Pass`: a detective with no affordable edge. Never chosen by an
//!   agent for MrX; an evader who cannot move has lost.
//!
//! Moves are small `Copy` values and hash by content, so the legal set
//! collapses duplicate derivations (a ferry edge reached "by transport"
//! and "by secret" is one move).

use serde::{Deserialize, Serialize};

use crate::core::{Colour, Ticket};
use crate::graph::NodeId;

mod generate;

pub use generate::legal_moves;

/// One edge travelled with one ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: NodeId,
}

impl TicketMove {
    #[must_use]
    pub fn new(colour: Colour, ticket: Ticket, destination: impl Into<NodeId>) -> Self {
        Self {
            colour,
            ticket,
            destination: destination.into(),
        }
    }
}

/// Two ticket legs taken in a single MrX turn.
///
/// Each leg consumes a round of its own, so a double needs two rounds
/// left on the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: TicketMove,
    pub second: TicketMove,
}

impl DoubleMove {
    #[must_use]
    pub const fn new(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }
}

/// A turn spent without moving. Detectives only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassMove {
    pub colour: Colour,
}

impl PassMove {
    #[must_use]
    pub const fn new(colour: Colour) -> Self {
        Self { colour }
    }
}

/// Any move a player can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Ticket(TicketMove),
    Double(DoubleMove),
    Pass(PassMove),
}

impl Move {
    /// Shorthand for a single ticket move.
    #[must_use]
    pub fn ticket(colour: Colour, ticket: Ticket, destination: impl Into<NodeId>) -> Self {
        Move::Ticket(TicketMove::new(colour, ticket, destination))
    }

    /// Shorthand for a pass.
    #[must_use]
    pub const fn pass(colour: Colour) -> Self {
        Move::Pass(PassMove::new(colour))
    }

    /// The colour making this move.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Move::Ticket(m) => m.colour,
            Move::Double(m) => m.colour,
            Move::Pass(m) => m.colour,
        }
    }

    /// Where the mover ends up, or `None` for a pass.
    ///
    /// A double answers with its second leg's destination.
    #[must_use]
    pub const fn final_destination(self) -> Option<NodeId> {
        match self {
            Move::Ticket(m) => Some(m.destination),
            Move::Double(m) => Some(m.second.destination),
            Move::Pass(_) => None,
        }
    }

    /// Check whether this is a pass.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass(_))
    }
}

impl From<TicketMove> for Move {
    fn from(m: TicketMove) -> Self {
        Move::Ticket(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl From<PassMove> for Move {
    fn from(m: PassMove) -> Self {
        Move::Pass(m)
    }
}
