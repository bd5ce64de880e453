//! The error taxonomy surfaced by the engine.
//!
//! Everything is reported synchronously through `Result`; nothing is
//! swallowed or deferred. Construction errors come out of
//! `GameEngineBuilder::build`, play errors out of the rotation driver,
//! subscription errors out of `subscribe`/`unsubscribe`, and
//! `ConcealedLocation` out of distance queries on hidden players.

use thiserror::Error;

use super::colour::Colour;
use super::ticket::Ticket;
use crate::graph::NodeId;
use crate::moves::Move;

/// Any error the engine can surface.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    // === Construction ===
    #[error("the round schedule is empty")]
    EmptyRounds,

    #[error("the board graph is empty")]
    EmptyGraph,

    #[error("no evader was configured")]
    MissingMrX,

    #[error("the evader must play Black, got {0}")]
    MrXNotBlack(Colour),

    #[error("at least one detective is required")]
    NoDetectives,

    #[error("colour {0} was configured twice")]
    DuplicateColour(Colour),

    #[error("{first} and {second} both start at {location}")]
    DuplicateLocation {
        first: Colour,
        second: Colour,
        location: NodeId,
    },

    #[error("{colour} starts at {location}, which is not on the board")]
    LocationOffBoard { colour: Colour, location: NodeId },

    #[error("{colour}'s ticket allocation does not cover every kind")]
    IncompleteTicketBank { colour: Colour },

    #[error("detective {colour} may not hold {ticket} tickets")]
    ForbiddenDetectiveTicket { colour: Colour, ticket: Ticket },

    // === Play ===
    #[error("{colour} chose a move outside the legal set: {attempted:?}")]
    IllegalMove { colour: Colour, attempted: Move },

    #[error("the game is already over")]
    GameAlreadyOver,

    // === Spectators ===
    #[error("that spectator is already subscribed")]
    DuplicateSpectator,

    #[error("that spectator was never subscribed")]
    UnknownSpectator,

    // === Pathfinding ===
    #[error("a queried location is concealed")]
    ConcealedLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_players() {
        let err = GameError::DuplicateLocation {
            first: Colour::Blue,
            second: Colour::Red,
            location: NodeId::new(17),
        };
        assert_eq!(err.to_string(), "Blue and Red both start at Node 17");

        let err = GameError::ForbiddenDetectiveTicket {
            colour: Colour::Green,
            ticket: Ticket::Secret,
        };
        assert_eq!(err.to_string(), "detective Green may not hold Secret tickets");
    }

    #[test]
    fn test_illegal_move_reports_the_attempt() {
        let err = GameError::IllegalMove {
            colour: Colour::Black,
            attempted: Move::ticket(Colour::Black, Ticket::Taxi, NodeId::new(1)),
        };
        let text = err.to_string();
        assert!(text.contains("Black"));
        assert!(text.contains("outside the legal set"));
    }
}
