//! The referee: setup and turn state machine over the canonical board.
//!
//! Every decision an agent returns is validated here. Anything wrong with
//! it (a bad placement, an illegal step or build, a missing piece, an
//! answer for the wrong phase) forfeits the game for that agent. No error
//! leaves the referee.

use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{
    BoardError, Coord, Decision, GameBoard, IllegalMove, Phase, PieceId, PieceSlot, PlayerId,
    PlyRecord, RulesError,
};
use crate::rules::{has_legal_turn, play_turn, to_egocentric, TurnOutcome};

use super::config::RefereeConfig;

/// Pieces each player places during setup.
const PIECES_PER_PLAYER: u8 = 2;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// `placed` pieces are on the board. Player 0 places both of its pieces
    /// first, then player 1.
    Setup { placed: u8 },
    /// The player's turn to move.
    ToMove(PlayerId),
    /// Finished.
    Over(GameOutcome),
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner { winner: PlayerId, victory: Victory },
    /// The ply cap was reached.
    Aborted { plies: u32 },
}

impl GameOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Winner { winner, .. } => Some(*winner),
            GameOutcome::Aborted { .. } => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner {
                winner,
                victory: Victory::Climbed,
            } => write!(f, "{winner} wins by climbing"),
            GameOutcome::Winner {
                winner,
                victory: Victory::Forfeit(reason),
            } => write!(f, "{winner} wins by forfeit ({reason:?})"),
            GameOutcome::Aborted { plies } => write!(f, "aborted after {plies} plies"),
        }
    }
}

/// Why the winner won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victory {
    /// Stepped onto a winning cell.
    Climbed,
    /// The other player forfeited.
    Forfeit(ForfeitReason),
}

/// Why the loser forfeited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForfeitReason {
    /// Setup placement on an occupied or off-board cell.
    InvalidPlacement(Coord),
    /// The step or build broke a rule.
    IllegalMove(IllegalMove),
    /// The decision named a piece the player does not have.
    PieceNotFound(PieceSlot),
    /// No legal full turn, or the agent said so.
    NoLegalMove,
    /// A placement during play or a turn during setup.
    UnexpectedDecision,
}

/// Display hook for collaborators outside the core.
///
/// All methods default to doing nothing.
pub trait GameObserver {
    /// All four pieces are on the board.
    fn on_setup(&mut self, _board: &GameBoard) {}

    /// A ply was applied. On a winning ply `board` shows the step without a
    /// build.
    fn on_ply(&mut self, _board: &GameBoard, _record: &PlyRecord) {}

    /// The game ended.
    fn on_game_over(&mut self, _board: &GameBoard, _outcome: &GameOutcome) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Runs one game between two agents.
#[derive(Clone, Debug)]
pub struct Referee {
    board: GameBoard,
    phase: GamePhase,
    history: Vec<PlyRecord>,
    config: RefereeConfig,
}

impl Referee {
    /// A fresh game on an empty, flat board.
    #[must_use]
    pub fn new(config: RefereeConfig) -> Self {
        Self {
            board: GameBoard::new(),
            phase: GamePhase::Setup { placed: 0 },
            history: Vec::new(),
            config,
        }
    }

    /// A game resumed after setup from `board`, with `to_move` to play.
    pub fn from_position(
        board: GameBoard,
        to_move: PlayerId,
        config: RefereeConfig,
    ) -> Result<Self, BoardError> {
        board.validate()?;
        Ok(Self {
            board,
            phase: GamePhase::ToMove(to_move),
            history: Vec::new(),
            config,
        })
    }

    /// The player the referee will ask next, `None` once the game is over.
    #[must_use]
    pub fn actor(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Setup { placed } if placed < PIECES_PER_PLAYER => Some(PlayerId::FIRST),
            GamePhase::Setup { .. } => Some(PlayerId::SECOND),
            GamePhase::ToMove(player) => Some(player),
            GamePhase::Over(_) => None,
        }
    }

    /// Ask `agent` for the next placement or turn and apply it. `agent`
    /// must be the one playing for `actor()`.
    ///
    /// Returns the outcome once the game is over.
    pub fn step(
        &mut self,
        agent: &mut dyn Agent,
        observer: &mut dyn GameObserver,
    ) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Setup { placed } => self.setup_step(placed, agent, observer),
            GamePhase::ToMove(player) => self.play_step(player, agent, observer),
            GamePhase::Over(outcome) => Some(outcome),
        }
    }

    /// Play a whole game, `first` as player 0.
    pub fn play(&mut self, first: &mut dyn Agent, second: &mut dyn Agent) -> GameOutcome {
        self.play_observed(first, second, &mut NullObserver)
    }

    /// Play a whole game, reporting progress to `observer`.
    pub fn play_observed(
        &mut self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
        observer: &mut dyn GameObserver,
    ) -> GameOutcome {
        loop {
            let agent: &mut dyn Agent = if self.actor() == Some(PlayerId::SECOND) {
                &mut *second
            } else {
                &mut *first
            };
            if let Some(outcome) = self.step(agent, observer) {
                return outcome;
            }
        }
    }

    fn setup_step(
        &mut self,
        placed: u8,
        agent: &mut dyn Agent,
        observer: &mut dyn GameObserver,
    ) -> Option<GameOutcome> {
        let player = if placed < PIECES_PER_PLAYER {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        };
        let slot = PieceSlot::from_index(usize::from(placed % PIECES_PER_PLAYER))
            .unwrap_or(PieceSlot::First);

        let view = to_egocentric(&self.board, player);
        let at = match agent.decide(&view, Phase::Setup) {
            Decision::Place(at) => at,
            other => {
                log::debug!("{} answered setup with {other:?}", agent.name());
                return Some(self.forfeit(player, ForfeitReason::UnexpectedDecision, observer));
            }
        };

        if let Err(err) = self.board.place(at, PieceId::new(player, slot)) {
            log::debug!("{} placement rejected: {err}", agent.name());
            return Some(self.forfeit(player, ForfeitReason::InvalidPlacement(at), observer));
        }

        let placed = placed + 1;
        if placed == 2 * PIECES_PER_PLAYER {
            self.phase = GamePhase::ToMove(PlayerId::FIRST);
            observer.on_setup(&self.board);
        } else {
            self.phase = GamePhase::Setup { placed };
        }
        None
    }

    fn play_step(
        &mut self,
        player: PlayerId,
        agent: &mut dyn Agent,
        observer: &mut dyn GameObserver,
    ) -> Option<GameOutcome> {
        let plies = self.plies();
        if self.config.max_plies.is_some_and(|cap| plies >= cap) {
            return Some(self.finish(GameOutcome::Aborted { plies }, observer));
        }

        let view = to_egocentric(&self.board, player);
        if !has_legal_turn(&view) {
            return Some(self.forfeit(player, ForfeitReason::NoLegalMove, observer));
        }

        let mv = match agent.decide(&view, Phase::Play) {
            Decision::Play(mv) => mv,
            Decision::NoLegalMove => {
                return Some(self.forfeit(player, ForfeitReason::NoLegalMove, observer));
            }
            Decision::Place(_) => {
                return Some(self.forfeit(player, ForfeitReason::UnexpectedDecision, observer));
            }
        };

        let outcome = match play_turn(&mut self.board, PieceId::new(player, mv.slot), mv) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("{} played {mv}: {err}", agent.name());
                let reason = match err {
                    RulesError::Illegal(illegal) => ForfeitReason::IllegalMove(illegal),
                    RulesError::PieceNotFound(_) => ForfeitReason::PieceNotFound(mv.slot),
                    RulesError::NoLegalMove => ForfeitReason::NoLegalMove,
                };
                return Some(self.forfeit(player, reason, observer));
            }
        };

        let won = matches!(outcome, TurnOutcome::Won { .. });
        let record = PlyRecord {
            player,
            mv,
            ply: plies,
            won,
        };
        log::debug!("ply {plies}: {player} ({}) plays {mv}", agent.name());
        self.history.push(record);
        observer.on_ply(&self.board, &record);

        if won {
            let outcome = GameOutcome::Winner {
                winner: player,
                victory: Victory::Climbed,
            };
            return Some(self.finish(outcome, observer));
        }

        self.phase = GamePhase::ToMove(player.opponent());
        None
    }

    fn forfeit(
        &mut self,
        loser: PlayerId,
        reason: ForfeitReason,
        observer: &mut dyn GameObserver,
    ) -> GameOutcome {
        let outcome = GameOutcome::Winner {
            winner: loser.opponent(),
            victory: Victory::Forfeit(reason),
        };
        self.finish(outcome, observer)
    }

    fn finish(&mut self, outcome: GameOutcome, observer: &mut dyn GameObserver) -> GameOutcome {
        log::info!("game over: {outcome}");
        self.phase = GamePhase::Over(outcome);
        observer.on_game_over(&self.board, &outcome);
        outcome
    }

    /// Plies applied since setup.
    #[must_use]
    pub fn plies(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Every ply applied since setup, in order.
    #[must_use]
    pub fn history(&self) -> &[PlyRecord] {
        &self.history
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RefereeConfig {
        &self.config
    }
}
