//! Player configuration and engine-owned player state.
//!
//! ## PlayerConfig
//!
//! What the host hands to the engine builder: a colour, a starting stop
//! and a ticket allocation. The allocation must mention every ticket
//! kind; validation happens in `GameEngineBuilder::build`, not here.
//!
//! ## PlayerState
//!
//! The engine's live record of a player. Only the engine mutates it;
//! everyone else reads it through `GameView`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::ticket::{Ticket, TicketBank};
use crate::graph::NodeId;

/// Construction input for one player.
///
/// ## Example
///
/// ```
/// use shadow_chase::core::{Colour, PlayerConfig, Ticket};
///
/// let blue = PlayerConfig::new(Colour::Blue, 94)
///     .ticket(Ticket::Taxi, 11)
///     .ticket(Ticket::Bus, 8)
///     .ticket(Ticket::Underground, 4)
///     .ticket(Ticket::Secret, 0)
///     .ticket(Ticket::Double, 0);
///
/// assert_eq!(blue.colour, Colour::Blue);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub colour: Colour,
    pub location: NodeId,
    pub tickets: FxHashMap<Ticket, u32>,
}

impl PlayerConfig {
    /// Start a config with an empty ticket allocation.
    #[must_use]
    pub fn new(colour: Colour, location: impl Into<NodeId>) -> Self {
        Self {
            colour,
            location: location.into(),
            tickets: FxHashMap::default(),
        }
    }

    /// Set the count for one ticket kind.
    ///
    /// Every kind must be set before the config is accepted, including
    /// kinds the player holds zero of.
    #[must_use]
    pub fn ticket(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.insert(ticket, count);
        self
    }
}

/// A player's live state inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    colour: Colour,
    location: NodeId,
    tickets: TicketBank,
}

impl PlayerState {
    /// Assemble a player record directly.
    ///
    /// The engine builds these from validated configs; constructing one
    /// by hand is mainly useful for probing move enumeration outside a
    /// running game.
    #[must_use]
    pub fn new(colour: Colour, location: NodeId, tickets: TicketBank) -> Self {
        Self {
            colour,
            location,
            tickets,
        }
    }

    /// The player's colour.
    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// The player's true current stop.
    #[must_use]
    pub fn location(&self) -> NodeId {
        self.location
    }

    /// The player's ticket bank.
    #[must_use]
    pub fn tickets(&self) -> &TicketBank {
        &self.tickets
    }

    /// Check whether this player is the evader.
    #[must_use]
    pub fn is_mr_x(&self) -> bool {
        self.colour.is_mr_x()
    }

    pub(crate) fn set_location(&mut self, location: NodeId) {
        self.location = location;
    }

    pub(crate) fn tickets_mut(&mut self) -> &mut TicketBank {
        &mut self.tickets
    }
}
