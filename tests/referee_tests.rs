//! Referee integration tests: setup, forfeits, wins, the ply cap and
//! complete games between the built-in agents.

use rust_santorini::agents::{Agent, ClimbHighest, Defensive, RandomValidated, UniformRandom};
use rust_santorini::core::{
    Coord, Decision, Direction, GameBoard, GameRng, Move, Phase, PieceId, PieceSlot, PlayerId,
    PlyRecord, MAX_HEIGHT,
};
use rust_santorini::referee::{
    ForfeitReason, GameObserver, GameOutcome, GamePhase, Referee, RefereeConfig, Victory,
};
use rust_santorini::rules::EgocentricView;
use rust_santorini::search::{NegamaxPlayer, SearchConfig};

/// Replays a fixed list of decisions, then gives up.
struct Scripted(Vec<Decision>);

impl Agent for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn decide(&mut self, _view: &EgocentricView, _phase: Phase) -> Decision {
        if self.0.is_empty() {
            Decision::NoLegalMove
        } else {
            self.0.remove(0)
        }
    }
}

#[derive(Default)]
struct Recorder {
    setups: usize,
    plies: Vec<PlyRecord>,
    outcomes: Vec<GameOutcome>,
}

impl GameObserver for Recorder {
    fn on_setup(&mut self, _board: &GameBoard) {
        self.setups += 1;
    }

    fn on_ply(&mut self, _board: &GameBoard, record: &PlyRecord) {
        self.plies.push(*record);
    }

    fn on_game_over(&mut self, _board: &GameBoard, outcome: &GameOutcome) {
        self.outcomes.push(*outcome);
    }
}

fn forfeit(winner: PlayerId, reason: ForfeitReason) -> GameOutcome {
    GameOutcome::Winner {
        winner,
        victory: Victory::Forfeit(reason),
    }
}

fn check_game(referee: &Referee, outcome: GameOutcome) {
    assert_eq!(referee.outcome(), Some(outcome));
    assert!(referee.board().validate().is_ok());
    assert!(Coord::all().all(|at| referee.board().height(at) <= MAX_HEIGHT));

    for (i, record) in referee.history().iter().enumerate() {
        assert_eq!(record.ply, i as u32);
        let expected = if i % 2 == 0 { PlayerId::FIRST } else { PlayerId::SECOND };
        assert_eq!(record.player, expected);
        let last = i + 1 == referee.history().len();
        let climbed = matches!(outcome, GameOutcome::Winner { victory: Victory::Climbed, .. });
        assert_eq!(record.won, last && climbed);
    }
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_setup_collision_forfeits() {
    let mut referee = Referee::new(RefereeConfig::default());
    let mut first = Scripted(vec![
        Decision::Place(Coord::new(2, 2)),
        Decision::Place(Coord::new(2, 1)),
    ]);
    let mut second = Scripted(vec![Decision::Place(Coord::new(2, 2))]);

    let outcome = referee.play(&mut first, &mut second);
    assert_eq!(
        outcome,
        forfeit(PlayerId::FIRST, ForfeitReason::InvalidPlacement(Coord::new(2, 2)))
    );
    assert_eq!(referee.plies(), 0);
}

#[test]
fn test_setup_off_board_forfeits() {
    let mut referee = Referee::new(RefereeConfig::default());
    let mut first = Scripted(vec![Decision::Place(Coord::new(5, 0))]);
    let mut second = Scripted(Vec::new());

    let outcome = referee.play(&mut first, &mut second);
    assert_eq!(
        outcome,
        forfeit(PlayerId::SECOND, ForfeitReason::InvalidPlacement(Coord::new(5, 0)))
    );
}

// =============================================================================
// Play
// =============================================================================

#[test]
fn test_from_position_rejects_bad_board() {
    let board = GameBoard::from_rows(["00000"; 5], ["a...y", ".....", ".....", ".....", "....z"]).unwrap();
    assert!(Referee::from_position(board, PlayerId::FIRST, RefereeConfig::default()).is_err());
}

#[test]
fn test_boxed_in_player_forfeits() {
    let board = GameBoard::from_rows(
        ["02020", "22022", "00000", "00000", "00000"],
        ["a...b", ".....", ".....", ".....", "y...z"],
    )
    .unwrap();
    let mut referee = Referee::from_position(board, PlayerId::FIRST, RefereeConfig::default()).unwrap();

    // Never consulted: the referee sees there is nothing legal first.
    let mut first = Scripted(vec![Decision::Place(Coord::CENTER)]);
    let mut second = ClimbHighest::new(GameRng::new(0));

    let outcome = referee.play(&mut first, &mut second);
    assert_eq!(outcome, forfeit(PlayerId::SECOND, ForfeitReason::NoLegalMove));
    assert!(referee.history().is_empty());
}

#[test]
fn test_climb_wins_without_building() {
    let board = GameBoard::from_rows(
        ["00000", "00000", "00000", "00023", "00000"],
        ["b...z", ".....", ".....", "...a.", "y...."],
    )
    .unwrap();
    let heights_before = *board.heights();
    let mut referee = Referee::from_position(board, PlayerId::FIRST, RefereeConfig::default()).unwrap();

    let mut first = ClimbHighest::new(GameRng::new(0));
    let mut second = ClimbHighest::new(GameRng::new(1));
    let outcome = referee.play(&mut first, &mut second);

    assert_eq!(
        outcome,
        GameOutcome::Winner {
            winner: PlayerId::FIRST,
            victory: Victory::Climbed,
        }
    );
    assert_eq!(
        referee.board().occupant(Coord::new(4, 3)),
        Some(PieceId::new(PlayerId::FIRST, PieceSlot::First))
    );
    assert_eq!(referee.board().heights(), &heights_before);
    assert_eq!(referee.history().len(), 1);
    assert!(referee.history()[0].won);
    check_game(&referee, outcome);
}

#[test]
fn test_illegal_move_forfeits_and_leaves_board() {
    let board = GameBoard::from_rows(["00000"; 5], ["a...b", ".....", ".....", ".....", "y...z"]).unwrap();
    let before = board.clone();
    let mut referee = Referee::from_position(board, PlayerId::FIRST, RefereeConfig::default()).unwrap();

    let off_board = Move::new(PieceSlot::First, Direction::new(-1, 0), Direction::new(1, 0));
    let mut first = Scripted(vec![Decision::Play(off_board)]);
    let mut second = Scripted(Vec::new());

    let outcome = referee.play(&mut first, &mut second);
    assert!(matches!(
        outcome,
        GameOutcome::Winner {
            winner: PlayerId::SECOND,
            victory: Victory::Forfeit(ForfeitReason::IllegalMove(_)),
        }
    ));
    assert_eq!(referee.board(), &before);
}

#[test]
fn test_bad_build_forfeits_and_leaves_board() {
    let board = GameBoard::from_rows(["00000"; 5], ["a...b", ".....", ".....", ".....", "y...z"]).unwrap();
    let before = board.clone();
    let mut referee = Referee::from_position(board, PlayerId::FIRST, RefereeConfig::default()).unwrap();

    // The step to (0, 1) is fine, the build at (-1, 1) is not.
    let bad_build = Move::new(PieceSlot::First, Direction::new(0, 1), Direction::new(-1, 0));
    let mut first = Scripted(vec![Decision::Play(bad_build)]);
    let mut second = Scripted(Vec::new());

    let outcome = referee.play(&mut first, &mut second);
    assert!(matches!(
        outcome,
        GameOutcome::Winner {
            winner: PlayerId::SECOND,
            victory: Victory::Forfeit(ForfeitReason::IllegalMove(_)),
        }
    ));
    assert_eq!(referee.board(), &before);
}

#[test]
fn test_agent_giving_up_forfeits() {
    let board = GameBoard::from_rows(["00000"; 5], ["a...b", ".....", ".....", ".....", "y...z"]).unwrap();
    let mut referee = Referee::from_position(board, PlayerId::SECOND, RefereeConfig::default()).unwrap();

    let mut first = ClimbHighest::new(GameRng::new(0));
    let mut second = Scripted(Vec::new());

    let outcome = referee.play(&mut first, &mut second);
    assert_eq!(outcome, forfeit(PlayerId::FIRST, ForfeitReason::NoLegalMove));
}

#[test]
fn test_ply_cap_aborts() {
    // Nothing can reach height 3 within two plies on a flat board.
    let board = GameBoard::from_rows(["00000"; 5], ["a...b", ".....", ".....", ".....", "y...z"]).unwrap();
    let config = RefereeConfig::default().with_max_plies(2);
    let mut referee = Referee::from_position(board, PlayerId::FIRST, config).unwrap();

    let mut first = ClimbHighest::new(GameRng::new(0));
    let mut second = ClimbHighest::new(GameRng::new(1));
    let outcome = referee.play(&mut first, &mut second);

    assert_eq!(outcome, GameOutcome::Aborted { plies: 2 });
    assert_eq!(outcome.winner(), None);
    check_game(&referee, outcome);
}

// =============================================================================
// Complete Games
// =============================================================================

#[test]
fn test_observer_sees_every_ply() {
    let mut referee = Referee::new(RefereeConfig::default().with_max_plies(60));
    let mut first = ClimbHighest::new(GameRng::new(1));
    let mut second = Defensive::new(GameRng::new(2));
    let mut recorder = Recorder::default();

    let outcome = referee.play_observed(&mut first, &mut second, &mut recorder);

    assert_eq!(recorder.setups, 1);
    assert_eq!(recorder.plies.as_slice(), referee.history());
    assert_eq!(recorder.outcomes, vec![outcome]);
    assert!(matches!(referee.phase(), GamePhase::Over(_)));
}

#[test]
fn test_heuristic_games_finish_cleanly() {
    for seed in 0..12 {
        let mut referee = Referee::new(RefereeConfig::default().with_max_plies(200));
        let mut first = Defensive::new(GameRng::new(seed));
        let mut second = ClimbHighest::new(GameRng::new(seed + 100));

        let outcome = referee.play(&mut first, &mut second);
        // Both agents only return legal turns.
        assert!(
            !matches!(
                outcome,
                GameOutcome::Winner {
                    victory: Victory::Forfeit(ForfeitReason::IllegalMove(_) | ForfeitReason::UnexpectedDecision),
                    ..
                }
            ),
            "seed {seed}: {outcome}"
        );
        check_game(&referee, outcome);
    }
}

#[test]
fn test_random_games_are_reproducible() {
    let run = |seed: u64| {
        let mut referee = Referee::new(RefereeConfig::default().with_max_plies(200));
        let mut first = RandomValidated::new(GameRng::new(seed));
        let mut second = RandomValidated::new(GameRng::new(seed + 1));
        let outcome = referee.play(&mut first, &mut second);
        (outcome, referee.history().to_vec(), referee.board().clone())
    };

    for seed in [3, 17] {
        assert_eq!(run(seed), run(seed));
    }
}

#[test]
fn test_uniform_random_eventually_forfeits_or_finishes() {
    let mut referee = Referee::new(RefereeConfig::default().with_max_plies(200));
    let mut first = UniformRandom::new(GameRng::new(5));
    let mut second = RandomValidated::new(GameRng::new(6));

    let outcome = referee.play(&mut first, &mut second);
    check_game(&referee, outcome);
}

#[test]
fn test_negamax_only_plays_legal_turns() {
    for seed in 0..3 {
        let mut referee = Referee::new(RefereeConfig::default().with_max_plies(200));
        let mut first = NegamaxPlayer::new(SearchConfig::default().with_depth(2), GameRng::new(seed));
        let mut second = RandomValidated::new(GameRng::new(seed + 50));

        let outcome = referee.play(&mut first, &mut second);
        check_game(&referee, outcome);
        assert!(
            !matches!(
                outcome,
                GameOutcome::Winner {
                    winner: PlayerId::SECOND,
                    victory: Victory::Forfeit(
                        ForfeitReason::IllegalMove(_)
                            | ForfeitReason::PieceNotFound(_)
                            | ForfeitReason::UnexpectedDecision
                    ),
                }
            ),
            "seed {seed}: {outcome}"
        );
    }
}

#[test]
fn test_history_serializes() {
    let record = PlyRecord {
        player: PlayerId::SECOND,
        mv: Move::new(PieceSlot::Second, Direction::new(0, 1), Direction::new(-1, 0)),
        ply: 7,
        won: false,
    };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(serde_json::from_str::<PlyRecord>(&json).unwrap(), record);

    let outcome = forfeit(PlayerId::FIRST, ForfeitReason::InvalidPlacement(Coord::new(5, 0)));
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(serde_json::from_str::<GameOutcome>(&json).unwrap(), outcome);
}
