//! Core types: colours, tickets, players, errors.
//!
//! These are the value types every other module builds on. Rules live in
//! `moves` and `engine`; this module only knows what the pieces are.

pub mod colour;
pub mod error;
pub mod player;
pub mod ticket;

pub use colour::Colour;
pub use error::GameError;
pub use player::{PlayerConfig, PlayerState};
pub use ticket::{Ticket, TicketBank};
