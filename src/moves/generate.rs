//! Legal move enumeration.
//!
//! ## Algorithm
//!
//! Single moves first: every edge leaving the player's stop whose ticket
//! the player holds and whose destination no detective occupies. MrX
//! additionally gets a `Secret` variant of each such edge while he holds
//! secret tickets.
//!
//! Doubles build on singles: each single is a candidate first leg, and
//! second legs are enumerated from its destination under the same
//! occupancy rule. A double needs the `Double` ticket, two rounds left
//! on the schedule, and an affordable ticket pair. Using the same kind
//! twice needs two of that kind.
//!
//! A detective with no affordable edge gets exactly one pass move; an
//! empty set is returned only for a boxed-in MrX.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{PlayerState, Ticket, TicketBank};
use crate::graph::{Graph, NodeId};

use super::{DoubleMove, Move, TicketMove};

/// Enumerate every legal move for `player`.
///
/// `occupied` is the set of detective locations; a move may never end a
/// leg on one. `rounds_remaining` is how many schedule slots are still
/// unconsumed; doubles need at least two.
///
/// The result is a set: duplicate derivations of the same move collapse,
/// and membership is deterministic for a given state. No ordering is
/// guaranteed.
#[must_use]
pub fn legal_moves(
    graph: &Graph,
    player: &PlayerState,
    occupied: &FxHashSet<NodeId>,
    rounds_remaining: usize,
) -> FxHashSet<Move> {
    let colour = player.colour();
    let tickets = player.tickets();
    let has_secret = player.is_mr_x() && tickets.has(Ticket::Secret);

    let mut singles: SmallVec<[TicketMove; 8]> = SmallVec::new();
    for edge in graph.edges_from(player.location()) {
        if occupied.contains(&edge.destination) {
            continue;
        }
        let required = Ticket::for_transport(edge.transport);
        if tickets.has(required) {
            singles.push(TicketMove::new(colour, required, edge.destination));
        }
        // Secret substitutes any transport. Ferry edges already required
        // it above, so skip them to avoid re-deriving the same move.
        if has_secret && required != Ticket::Secret {
            singles.push(TicketMove::new(colour, Ticket::Secret, edge.destination));
        }
    }

    let mut moves: FxHashSet<Move> = singles.iter().map(|&m| Move::Ticket(m)).collect();

    if player.is_mr_x() && tickets.has(Ticket::Double) && rounds_remaining >= 2 {
        for &first in &singles {
            for edge in graph.edges_from(first.destination) {
                if occupied.contains(&edge.destination) {
                    continue;
                }
                let required = Ticket::for_transport(edge.transport);
                push_double(&mut moves, tickets, first, required, edge.destination);
                if has_secret && required != Ticket::Secret {
                    push_double(&mut moves, tickets, first, Ticket::Secret, edge.destination);
                }
            }
        }
    }

    if colour.is_detective() && moves.is_empty() {
        moves.insert(Move::pass(colour));
    }

    moves
}

fn push_double(
    moves: &mut FxHashSet<Move>,
    bank: &TicketBank,
    first: TicketMove,
    second_ticket: Ticket,
    second_destination: NodeId,
) {
    if !pair_affordable(bank, first.ticket, second_ticket) {
        return;
    }
    let second = TicketMove::new(first.colour, second_ticket, second_destination);
    moves.insert(Move::Double(DoubleMove::new(first.colour, first, second)));
}

/// Both leg tickets must come out of the same bank; a repeated kind
/// needs two of it.
fn pair_affordable(bank: &TicketBank, first: Ticket, second: Ticket) -> bool {
    if first == second {
        bank.has_at_least(first, 2)
    } else {
        bank.has(first) && bank.has(second)
    }
}
