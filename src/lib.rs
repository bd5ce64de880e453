//! # shadow-chase
//!
//! A turn-based pursuit engine for Scotland Yard style games on a
//! transport graph: one hidden evader (MrX) against a team of
//! detectives, with ticket economies, scheduled reveals and double
//! moves.
//!
//! ## Design Principles
//!
//! 1. **Any Board**: The engine takes the map as data. Nothing assumes
//!    the London board; a four-stop test ring and a two-hundred-stop
//!    city obey the same rules.
//!
//! 2. **One Source of Truth**: The engine owns all hidden state.
//!    Everyone else, agents and spectators alike, reads through
//!    `GameView`, which substitutes MrX's destination on hidden rounds.
//!
//! 3. **Agents Are Plugged In**: Whoever picks the moves, a human
//!    frontend, a heuristic or a random baseline, implements one
//!    synchronous trait method and is handed only legal candidates.
//!
//! ## Architecture
//!
//! - **Immutable History**: The public move log is an `im-rs` vector,
//!   so snapshotting a travel log is O(1).
//!
//! - **Moves As Values**: Moves are small `Copy` types collected into
//!   hash sets; legality is set membership.
//!
//! ## Modules
//!
//! - `core`: Colours, tickets, players, errors
//! - `graph`: The board: nodes, transport-tagged edges, builder
//! - `moves`: Move types and legal-move enumeration
//! - `engine`: Game construction, the turn cycle, win detection
//! - `spectators`: Read-only event subscriptions
//! - `pathfind`: All-pairs hop distances for heuristics
//! - `agents`: The agent seam plus random and scoring baselines

pub mod agents;
pub mod core;
pub mod engine;
pub mod graph;
pub mod moves;
pub mod pathfind;
pub mod spectators;

// Re-export commonly used types
pub use crate::core::{
    Colour, GameError,
    PlayerConfig, PlayerState,
    Ticket, TicketBank,
};

pub use crate::graph::{Edge, Graph, GraphBuilder, NodeId, Transport};

pub use crate::moves::{legal_moves, DoubleMove, Move, PassMove, TicketMove};

pub use crate::engine::{GameEngine, GameEngineBuilder, GameView, Outcome};

pub use crate::spectators::Spectator;

pub use crate::pathfind::DistanceTable;

pub use crate::agents::{Agent, RandomAgent, ScoringAgent};
