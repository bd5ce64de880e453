//! Ticket kinds and per-player ticket banks.
//!
//! ## Ticket
//!
//! Every move is paid for with a ticket. `Taxi`, `Bus` and `Underground`
//! match the transport of the edge travelled. `Secret` pays for any edge
//! and is the only ticket that crosses a ferry. `Double` buys a two-leg
//! turn. Only MrX may hold `Secret` or `Double` tickets.
//!
//! ## TicketBank
//!
//! Dense per-kind counts. A bank is only constructed from an allocation
//! that mentions every kind, so a missing kind is a configuration error
//! rather than an implicit zero.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::Transport;

/// A ticket kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Secret,
    Double,
}

impl Ticket {
    /// All ticket kinds in declaration order.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// The ticket that pays for an edge of the given transport.
    ///
    /// Ferry edges have no ordinary ticket; they cost a `Secret`.
    #[must_use]
    pub const fn for_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Check whether this is a standard travel ticket (taxi, bus or
    /// underground). Detectives may only hold standard tickets.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        matches!(self, Ticket::Taxi | Ticket::Bus | Ticket::Underground)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "Taxi",
            Ticket::Bus => "Bus",
            Ticket::Underground => "Underground",
            Ticket::Secret => "Secret",
            Ticket::Double => "Double",
        };
        write!(f, "{name}")
    }
}

/// Per-player ticket counts, one slot per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketBank {
    counts: [u32; 5],
}

impl TicketBank {
    /// Build a bank from an allocation map.
    ///
    /// Returns `None` unless the map defines a count (possibly zero) for
    /// every ticket kind.
    #[must_use]
    pub fn from_map(allocation: &FxHashMap<Ticket, u32>) -> Option<Self> {
        let mut counts = [0u32; 5];
        for ticket in Ticket::ALL {
            counts[ticket.index()] = *allocation.get(&ticket)?;
        }
        Some(Self { counts })
    }

    /// Count of a ticket kind.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Check whether at least one ticket of the kind is held.
    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Check whether at least `n` tickets of the kind are held.
    #[must_use]
    pub fn has_at_least(&self, ticket: Ticket, n: u32) -> bool {
        self.count(ticket) >= n
    }

    /// Check whether any standard travel ticket is held.
    ///
    /// A detective whose bank fails this check can never move again.
    #[must_use]
    pub fn has_any_standard(&self) -> bool {
        Ticket::ALL
            .into_iter()
            .filter(|t| t.is_standard())
            .any(|t| self.has(t))
    }

    /// Add one ticket of the kind.
    pub fn credit(&mut self, ticket: Ticket) {
        self.counts[ticket.index()] += 1;
    }

    /// Remove one ticket of the kind.
    ///
    /// Panics if none is held. Callers verify affordability when they
    /// enumerate legal moves, so an empty debit is a logic error.
    pub fn debit(&mut self, ticket: Ticket) {
        let slot = &mut self.counts[ticket.index()];
        assert!(*slot > 0, "debit of {ticket} from an empty bank");
        *slot -= 1;
    }
}
