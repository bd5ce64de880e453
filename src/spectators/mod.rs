//! Spectators: read-only observers of a running game.
//!
//! Spectators see the game exactly as the public does. MrX moves on
//! hidden rounds arrive with their destination substituted, so a
//! spectator can render a travel log without ever learning his true
//! position.
//!
//! Handlers default to no-ops; implement only what you need. Handlers
//! take `&self`, so a recording spectator keeps its log behind interior
//! mutability.
//!
//! ## Event order
//!
//! For every applied move, subscribers are notified in subscription
//! order. A round-started event precedes the move-made event of any
//! move that advanced the round counter (each MrX leg); detective moves
//! are move-made only. A double move is announced once as a whole
//! before its legs, then each leg follows with its own round-started
//! and move-made pair.

use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::core::{Colour, GameError};
use crate::engine::GameView;
use crate::moves::Move;

/// Receiver for public game events.
pub trait Spectator {
    /// A schedule slot was consumed; `round` is the new round counter.
    fn on_round_started(&self, _view: &GameView<'_>, _round: usize) {}

    /// A move was applied, destination-substituted where the schedule
    /// hides it.
    fn on_move_made(&self, _view: &GameView<'_>, _mv: Move) {}

    /// Every player has moved once and the game continues.
    fn on_rotation_complete(&self, _view: &GameView<'_>) {}

    /// The game has been decided.
    fn on_game_over(&self, _view: &GameView<'_>, _winners: &FxHashSet<Colour>) {}
}

/// Subscription bookkeeping, identity-keyed.
///
/// Identity is the `Rc` allocation: subscribing a clone of an already
/// subscribed handle is a duplicate, while a second spectator that
/// happens to compare equal is not.
#[derive(Default)]
pub(crate) struct SpectatorRegistry {
    spectators: Vec<Rc<dyn Spectator>>,
}

impl SpectatorRegistry {
    pub(crate) fn subscribe(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        if self.spectators.iter().any(|s| Rc::ptr_eq(s, &spectator)) {
            return Err(GameError::DuplicateSpectator);
        }
        self.spectators.push(spectator);
        Ok(())
    }

    pub(crate) fn unsubscribe(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), GameError> {
        match self.spectators.iter().position(|s| Rc::ptr_eq(s, spectator)) {
            Some(index) => {
                self.spectators.remove(index);
                Ok(())
            }
            None => Err(GameError::UnknownSpectator),
        }
    }

    /// Subscribers in subscription order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Rc<dyn Spectator>> {
        self.spectators.iter()
    }
}
