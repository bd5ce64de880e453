//! The engine: game construction, the turn cycle and win detection.
//!
//! ## Lifecycle
//!
//! A game is assembled through [`GameEngine::builder`]: hand it the
//! board and the reveal schedule, then one MrX and at least one
//! detective, each a [`PlayerConfig`] paired with the [`Agent`] that
//! will be choosing for them. `build` validates the whole setup and
//! returns a ready engine or the first [`GameError`] it finds.
//!
//! Degenerate setups are decided immediately: detectives who start with
//! no standard tickets have already lost, and a MrX who starts boxed in
//! has. Such a game reports its outcome but refuses to be driven.
//!
//! ## Turn flow
//!
//! [`GameEngine::play_turn`] enumerates the active player's legal
//! moves, asks their agent to choose, verifies the answer against the
//! set, applies it and advances the turn order. A reply from outside
//! the set fails with [`GameError::IllegalMove`] and leaves the game
//! untouched, so a frontend can re-prompt and retry the same turn.
//!
//! [`GameEngine::play_rotation`] loops turns until the order wraps back
//! to MrX and then settles the end-of-rotation questions: a survived
//! schedule is a MrX win, a boxed-in MrX is a detective win, anything
//! else is a rotation-complete event. [`GameEngine::play`] runs
//! rotations until someone has won.
//!
//! ## What spectators are told
//!
//! Every notification carries a fresh [`GameView`], so handlers always
//! observe the position after the change they are being told about.
//! MrX legs are announced with their destination substituted on hidden
//! rounds; a double move is announced whole before either leg is
//! travelled.

use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, trace};

use crate::agents::Agent;
use crate::core::{GameError, PlayerConfig, PlayerState, Ticket, TicketBank};
use crate::graph::{Graph, NodeId};
use crate::moves::Move;
use crate::spectators::{Spectator, SpectatorRegistry};

mod state;
mod view;

pub use state::Outcome;
pub use view::GameView;

use state::GameState;

/// Staged construction input for a [`GameEngine`].
pub struct GameEngineBuilder {
    graph: Graph,
    rounds: Vec<bool>,
    mr_x: Option<(PlayerConfig, Box<dyn Agent>)>,
    detectives: Vec<(PlayerConfig, Box<dyn Agent>)>,
}

impl GameEngineBuilder {
    /// Set the evader. A second call replaces the first.
    #[must_use]
    pub fn mr_x(mut self, config: PlayerConfig, agent: impl Agent + 'static) -> Self {
        self.mr_x = Some((config, Box::new(agent)));
        self
    }

    /// Add a detective. Detectives move in the order they are added.
    #[must_use]
    pub fn detective(mut self, config: PlayerConfig, agent: impl Agent + 'static) -> Self {
        self.detectives.push((config, Box::new(agent)));
        self
    }

    /// Validate the setup and produce the engine.
    ///
    /// Checks run in a fixed order: schedule, board, evader presence
    /// and colour, detective presence, then each player in turn order
    /// for colour and starting-stop clashes, off-board starts,
    /// incomplete ticket allocations and forbidden detective tickets.
    /// Only the first failure is reported.
    pub fn build(self) -> Result<GameEngine, GameError> {
        if self.rounds.is_empty() {
            return Err(GameError::EmptyRounds);
        }
        if self.graph.is_empty() {
            return Err(GameError::EmptyGraph);
        }
        let (mr_x_config, mr_x_agent) = self.mr_x.ok_or(GameError::MissingMrX)?;
        if !mr_x_config.colour.is_mr_x() {
            return Err(GameError::MrXNotBlack(mr_x_config.colour));
        }
        if self.detectives.is_empty() {
            return Err(GameError::NoDetectives);
        }

        let mut players = Vec::with_capacity(1 + self.detectives.len());
        let mut agents: Vec<Box<dyn Agent>> = Vec::with_capacity(1 + self.detectives.len());
        let mut colours = FxHashSet::default();
        let mut starts: FxHashMap<NodeId, _> = FxHashMap::default();

        let roster = std::iter::once((mr_x_config, mr_x_agent)).chain(self.detectives);
        for (config, agent) in roster {
            let colour = config.colour;
            if !colours.insert(colour) {
                return Err(GameError::DuplicateColour(colour));
            }
            if let Some(&first) = starts.get(&config.location) {
                return Err(GameError::DuplicateLocation {
                    first,
                    second: colour,
                    location: config.location,
                });
            }
            starts.insert(config.location, colour);
            if !self.graph.contains(config.location) {
                return Err(GameError::LocationOffBoard {
                    colour,
                    location: config.location,
                });
            }
            let bank = TicketBank::from_map(&config.tickets)
                .ok_or(GameError::IncompleteTicketBank { colour })?;
            if colour.is_detective() {
                for ticket in [Ticket::Secret, Ticket::Double] {
                    if bank.has(ticket) {
                        return Err(GameError::ForbiddenDetectiveTicket { colour, ticket });
                    }
                }
            }
            players.push(PlayerState::new(colour, config.location, bank));
            agents.push(agent);
        }

        let mut state = GameState::new(self.graph, self.rounds, players);
        state.evaluate_initial_outcome();
        if let Some(outcome) = state.outcome() {
            info!(%outcome, "game decided at construction");
        }

        Ok(GameEngine {
            state,
            agents,
            spectators: SpectatorRegistry::default(),
        })
    }
}

/// A running game of pursuit on a board graph.
pub struct GameEngine {
    state: GameState,
    agents: Vec<Box<dyn Agent>>,
    spectators: SpectatorRegistry,
}

impl GameEngine {
    /// Start building a game on `graph` with the given reveal schedule.
    ///
    /// `rounds` holds one flag per round MrX will play; `true` marks
    /// the rounds on which his destination is revealed.
    #[must_use]
    pub fn builder(graph: Graph, rounds: Vec<bool>) -> GameEngineBuilder {
        GameEngineBuilder {
            graph,
            rounds,
            mr_x: None,
            detectives: Vec::new(),
        }
    }

    /// The public view of the current position.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.state)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.outcome().is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Register a spectator for all subsequent events.
    ///
    /// Identity is the `Rc` allocation; subscribing the same allocation
    /// twice fails with [`GameError::DuplicateSpectator`].
    pub fn subscribe(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        self.spectators.subscribe(spectator)
    }

    /// Remove a previously subscribed spectator.
    pub fn unsubscribe(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), GameError> {
        self.spectators.unsubscribe(spectator)
    }

    /// Play a single turn.
    ///
    /// Enumerates the active player's moves, consults their agent,
    /// applies the answer and advances the turn order. An agent answer
    /// from outside the legal set fails with [`GameError::IllegalMove`]
    /// and leaves the game untouched, so the turn can be retried.
    ///
    /// MrX's fate can be settled without consulting his agent: due to
    /// move after the last scheduled round he has won, and with no
    /// legal move he has lost.
    pub fn play_turn(&mut self) -> Result<(), GameError> {
        if self.state.outcome().is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let colour = self.state.current_colour();
        if colour.is_mr_x() && self.state.schedule_exhausted() {
            // Rotation drivers settle this at the wrap; turn-by-turn
            // callers reach the same decision here.
            self.state.set_outcome(Outcome::MrXWins);
        } else {
            let moves = self.state.legal_for_current();
            trace!(%colour, candidates = moves.len(), "enumerated legal moves");

            if moves.is_empty() {
                // Only the evader can be moveless; a cornered detective
                // still has its pass.
                self.state.set_outcome(Outcome::DetectivesWin);
            } else {
                let index = self.state.current_index();
                let location = self.state.players()[index].location();
                let chosen =
                    self.agents[index].choose_move(&GameView::new(&self.state), location, &moves);
                if !moves.contains(&chosen) {
                    return Err(GameError::IllegalMove {
                        colour,
                        attempted: chosen,
                    });
                }
                debug!(%colour, mv = ?chosen, "applying move");
                self.apply_move(chosen);
                self.state.advance_player();
            }
        }

        if let Some(outcome) = self.state.outcome() {
            info!(%outcome, "game over");
            self.notify_game_over();
        }
        Ok(())
    }

    /// Play turns until the order wraps back to MrX.
    ///
    /// Returns as soon as the game is decided mid-rotation. On a full
    /// wrap the end-of-rotation questions are settled in precedence
    /// order: MrX has won if the schedule is exhausted, lost if he is
    /// boxed in, and otherwise subscribers hear rotation-complete.
    pub fn play_rotation(&mut self) -> Result<(), GameError> {
        if self.state.outcome().is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        loop {
            self.play_turn()?;
            if self.state.outcome().is_some() {
                return Ok(());
            }
            if self.state.current_index() == 0 {
                break;
            }
        }

        if self.state.schedule_exhausted() {
            self.state.set_outcome(Outcome::MrXWins);
        } else if self.state.legal_for_current().is_empty() {
            self.state.set_outcome(Outcome::DetectivesWin);
        }

        match self.state.outcome() {
            Some(outcome) => {
                info!(%outcome, "game over");
                self.notify_game_over();
            }
            None => self.notify_rotation_complete(),
        }
        Ok(())
    }

    /// Play rotations until the game is decided and return the winner.
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        if self.state.outcome().is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        loop {
            self.play_rotation()?;
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Apply a validated move: mutate state, keep history, tell
    /// spectators, then run the win checks.
    fn apply_move(&mut self, mv: Move) {
        match mv {
            Move::Ticket(leg) if leg.colour.is_mr_x() => {
                let (round, shown) = self.state.apply_mr_x_leg(leg);
                self.state.record(Move::Ticket(shown));
                self.notify_round_started(round);
                self.notify_move_made(Move::Ticket(shown));
            }
            Move::Ticket(leg) => {
                self.state.apply_detective_move(leg);
                self.state.record(Move::Ticket(leg));
                self.notify_move_made(Move::Ticket(leg));
            }
            Move::Double(double) => {
                // The whole double is announced before its legs, each
                // destination substituted from the slot it will consume.
                self.state.spend_double();
                let shown = self.state.masked_double(&double);
                self.state.record(Move::Double(shown));
                self.notify_move_made(Move::Double(shown));
                for leg in [double.first, double.second] {
                    let (round, shown_leg) = self.state.apply_mr_x_leg(leg);
                    self.notify_round_started(round);
                    self.notify_move_made(Move::Ticket(shown_leg));
                }
            }
            Move::Pass(pass) => {
                self.state.record(Move::Pass(pass));
                self.notify_move_made(Move::Pass(pass));
            }
        }

        self.state.check_capture();
        self.state.check_detective_exhaustion();
    }

    fn notify_round_started(&self, round: usize) {
        let view = GameView::new(&self.state);
        for spectator in self.spectators.iter() {
            spectator.on_round_started(&view, round);
        }
    }

    fn notify_move_made(&self, mv: Move) {
        let view = GameView::new(&self.state);
        for spectator in self.spectators.iter() {
            spectator.on_move_made(&view, mv);
        }
    }

    fn notify_rotation_complete(&self) {
        let view = GameView::new(&self.state);
        for spectator in self.spectators.iter() {
            spectator.on_rotation_complete(&view);
        }
    }

    fn notify_game_over(&self) {
        let view = GameView::new(&self.state);
        let winners = self.state.winning_players();
        for spectator in self.spectators.iter() {
            spectator.on_game_over(&view, &winners);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::core::Colour;
    use crate::graph::{GraphBuilder, Transport};

    // Always answers with the same move, legal or not.
    struct Scripted(Move);

    impl Agent for Scripted {
        fn choose_move(
            &mut self,
            _view: &GameView<'_>,
            _location: NodeId,
            _moves: &FxHashSet<Move>,
        ) -> Move {
            self.0
        }
    }

    fn ring() -> Graph {
        GraphBuilder::new()
            .edge(0, 1, Transport::Taxi)
            .edge(1, 2, Transport::Taxi)
            .edge(2, 3, Transport::Taxi)
            .edge(3, 0, Transport::Taxi)
            .build()
    }

    fn full(config: PlayerConfig, taxis: u32) -> PlayerConfig {
        config
            .ticket(Ticket::Taxi, taxis)
            .ticket(Ticket::Bus, 0)
            .ticket(Ticket::Underground, 0)
            .ticket(Ticket::Secret, 0)
            .ticket(Ticket::Double, 0)
    }

    #[test]
    fn test_empty_rounds_rejected() {
        let result = GameEngine::builder(ring(), vec![])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .build();
        assert!(matches!(result, Err(GameError::EmptyRounds)));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let result = GameEngine::builder(Graph::default(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .build();
        assert!(matches!(result, Err(GameError::EmptyGraph)));
    }

    #[test]
    fn test_missing_mr_x_rejected() {
        let result = GameEngine::builder(ring(), vec![true])
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .build();
        assert!(matches!(result, Err(GameError::MissingMrX)));
    }

    #[test]
    fn test_mr_x_must_be_black() {
        let result = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Red, 0), 4), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .build();
        assert!(matches!(result, Err(GameError::MrXNotBlack(Colour::Red))));
    }

    #[test]
    fn test_at_least_one_detective_required() {
        let result = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .build();
        assert!(matches!(result, Err(GameError::NoDetectives)));
    }

    #[test]
    fn test_duplicate_colour_rejected() {
        let result = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .detective(full(PlayerConfig::new(Colour::Blue, 3), 4), RandomAgent::new(2))
            .build();
        assert!(matches!(result, Err(GameError::DuplicateColour(Colour::Blue))));
    }

    #[test]
    fn test_shared_starting_stop_rejected() {
        let result = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .detective(full(PlayerConfig::new(Colour::Red, 2), 4), RandomAgent::new(2))
            .build();
        assert!(matches!(
            result,
            Err(GameError::DuplicateLocation {
                first: Colour::Blue,
                second: Colour::Red,
                ..
            })
        ));
    }

    #[test]
    fn test_off_board_start_rejected() {
        let result = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 9), 4), RandomAgent::new(1))
            .build();
        assert!(matches!(
            result,
            Err(GameError::LocationOffBoard {
                colour: Colour::Blue,
                ..
            })
        ));
    }

    #[test]
    fn test_incomplete_allocation_rejected() {
        let result = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(
                PlayerConfig::new(Colour::Blue, 2).ticket(Ticket::Taxi, 4),
                RandomAgent::new(1),
            )
            .build();
        assert!(matches!(
            result,
            Err(GameError::IncompleteTicketBank {
                colour: Colour::Blue
            })
        ));
    }

    #[test]
    fn test_detective_may_not_hold_secret_or_double() {
        let sneaky = full(PlayerConfig::new(Colour::Blue, 2), 4).ticket(Ticket::Secret, 1);
        let result = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(sneaky, RandomAgent::new(1))
            .build();
        assert!(matches!(
            result,
            Err(GameError::ForbiddenDetectiveTicket {
                colour: Colour::Blue,
                ticket: Ticket::Secret,
            })
        ));
    }

    #[test]
    fn test_illegal_answer_leaves_game_untouched() {
        // Node 2 is occupied by the detective, so moving there is out.
        let mut engine = GameEngine::builder(ring(), vec![true, true])
            .mr_x(
                full(PlayerConfig::new(Colour::Black, 1), 4),
                Scripted(Move::ticket(Colour::Black, Ticket::Taxi, 2)),
            )
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .build()
            .unwrap();

        let result = engine.play_turn();
        assert!(matches!(result, Err(GameError::IllegalMove { colour: Colour::Black, .. })));
        assert_eq!(engine.view().current_round(), 0);
        assert_eq!(engine.view().current_player(), Colour::Black);
        assert!(engine.view().history().is_empty());
        assert!(!engine.is_game_over());
    }

    #[test]
    fn test_rotation_visits_every_player_once() {
        let mut engine = GameEngine::builder(ring(), vec![true, true, true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(5))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(6))
            .build()
            .unwrap();

        engine.play_rotation().unwrap();
        if !engine.is_game_over() {
            assert_eq!(engine.view().current_player(), Colour::Black);
            assert_eq!(engine.view().current_round(), 1);
            assert_eq!(engine.view().history().len(), 2);
        }
    }

    #[test]
    fn test_play_runs_to_a_decision() {
        let mut engine = GameEngine::builder(ring(), vec![true, false, true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 9), RandomAgent::new(5))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 9), RandomAgent::new(6))
            .build()
            .unwrap();

        let outcome = engine.play().unwrap();
        assert_eq!(engine.outcome(), Some(outcome));
        assert!(engine.is_game_over());
        assert!(matches!(engine.play(), Err(GameError::GameAlreadyOver)));
        assert!(matches!(engine.play_turn(), Err(GameError::GameAlreadyOver)));
        assert!(matches!(engine.play_rotation(), Err(GameError::GameAlreadyOver)));
    }

    #[test]
    fn test_turn_by_turn_play_reaches_the_wrap_decision() {
        // Blue can never reach MrX's side of the board or afford the
        // bus, so every Blue turn is a pass and nobody gets captured.
        let graph = GraphBuilder::new()
            .edge(0, 1, Transport::Taxi)
            .edge(2, 3, Transport::Bus)
            .build();
        let mut engine = GameEngine::builder(graph, vec![false])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(3))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(4))
            .build()
            .unwrap();

        engine.play_turn().unwrap();
        engine.play_turn().unwrap();
        assert!(!engine.is_game_over());

        // MrX is due again but the schedule is spent.
        engine.play_turn().unwrap();
        assert_eq!(engine.outcome(), Some(Outcome::MrXWins));
        assert_eq!(engine.view().history().len(), 2);
        assert!(matches!(engine.play_turn(), Err(GameError::GameAlreadyOver)));
    }

    #[test]
    fn test_exhausted_detectives_lose_at_construction() {
        let engine = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 4), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 0), RandomAgent::new(1))
            .build()
            .unwrap();

        assert_eq!(engine.outcome(), Some(Outcome::MrXWins));
        assert_eq!(
            engine.view().winning_players(),
            std::iter::once(Colour::Black).collect()
        );
    }

    #[test]
    fn test_boxed_in_mr_x_loses_at_construction() {
        // MrX holds no taxi tickets, so no ring edge is affordable.
        let engine = GameEngine::builder(ring(), vec![true])
            .mr_x(full(PlayerConfig::new(Colour::Black, 0), 0), RandomAgent::new(0))
            .detective(full(PlayerConfig::new(Colour::Blue, 2), 4), RandomAgent::new(1))
            .build()
            .unwrap();

        assert_eq!(engine.outcome(), Some(Outcome::DetectivesWin));
    }
}
