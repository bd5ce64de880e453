//! Uniform random move selection.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

use crate::agents::Agent;
use crate::engine::GameView;
use crate::graph::NodeId;
use crate::moves::Move;

/// Picks uniformly among the legal moves.
///
/// Seeded explicitly so that games replay byte-for-byte: the same seed,
/// board and opponents produce the same sequence of choices.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(
        &mut self,
        _view: &GameView<'_>,
        _location: NodeId,
        moves: &FxHashSet<Move>,
    ) -> Move {
        let candidates: Vec<Move> = moves.iter().copied().collect();
        candidates[self.rng.gen_range(0..candidates.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;
    use crate::core::{PlayerConfig, Ticket};
    use crate::engine::GameEngine;
    use crate::graph::{GraphBuilder, Transport};

    fn any_board() -> crate::graph::Graph {
        GraphBuilder::new()
            .edge(0, 1, Transport::Taxi)
            .edge(1, 2, Transport::Taxi)
            .edge(2, 3, Transport::Taxi)
            .edge(3, 0, Transport::Taxi)
            .build()
    }

    fn taxis_only(colour: Colour, location: u16) -> PlayerConfig {
        PlayerConfig::new(colour, location)
            .ticket(Ticket::Taxi, 10)
            .ticket(Ticket::Bus, 0)
            .ticket(Ticket::Underground, 0)
            .ticket(Ticket::Secret, 0)
            .ticket(Ticket::Double, 0)
    }

    fn engine_with_seeds(mr_x_seed: u64, detective_seed: u64) -> GameEngine {
        GameEngine::builder(any_board(), vec![true; 6])
            .mr_x(taxis_only(Colour::Black, 0), RandomAgent::new(mr_x_seed))
            .detective(taxis_only(Colour::Blue, 2), RandomAgent::new(detective_seed))
            .build()
            .unwrap()
    }

    #[test]
    fn test_choice_is_always_legal() {
        let mut engine = engine_with_seeds(7, 11);
        for _ in 0..4 {
            if engine.is_game_over() {
                break;
            }
            engine.play_turn().unwrap();
        }
    }

    #[test]
    fn test_same_seed_replays_the_same_game() {
        let mut first = engine_with_seeds(42, 99);
        let mut second = engine_with_seeds(42, 99);

        for _ in 0..8 {
            if first.is_game_over() {
                break;
            }
            first.play_turn().unwrap();
            second.play_turn().unwrap();
            assert_eq!(
                first.view().history().len(),
                second.view().history().len()
            );
        }
        let record: Vec<_> = first.view().history().iter().copied().collect();
        let replay: Vec<_> = second.view().history().iter().copied().collect();
        assert_eq!(record, replay);
    }
}
