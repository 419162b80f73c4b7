//! Negamax integration tests.

use std::time::Duration;

use rust_santorini::core::{Direction, Move, PieceSlot};
use rust_santorini::rules::{legal_turns, EgocentricView};
use rust_santorini::search::{
    Negamax, SearchConfig, SearchNode, TimeBox, INFINITY, WIN_SCORE,
};

fn score_at(view: &EgocentricView, depth: u32) -> i32 {
    let mut search = Negamax::new(SearchConfig::default());
    search.negamax(&mut SearchNode::new(view.clone()), depth, -INFINITY, INFINITY)
}

/// A on height 2 next to a height-3 cell.
fn win_in_one() -> EgocentricView {
    EgocentricView::from_rows(
        ["00000", "00000", "00000", "02024", "02304"],
        ["B    ", "     ", "     ", "   O ", " A O "],
    )
    .unwrap()
}

/// The opponent on (2, 4) threatens (3, 3) and nothing of mine can reach
/// it to cap it.
fn lose_in_two() -> EgocentricView {
    EgocentricView::from_rows(
        ["00000", "00000", "00000", "02034", "02204"],
        ["B    ", "     ", "     ", "  O  ", " AO  "],
    )
    .unwrap()
}

/// B steps to (2, 3) and raises (3, 3) to a level A can climb and the
/// opponent can neither reach nor cap.
fn win_in_two() -> EgocentricView {
    EgocentricView::from_rows(
        ["00000", "00000", "00000", "02024", "02204"],
        ["O    ", "     ", "     ", "     ", " OAB "],
    )
    .unwrap()
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_win_in_one_scores() {
    let view = win_in_one();
    assert_eq!(score_at(&view, 0), -2);
    for depth in 1..=4 {
        assert_eq!(score_at(&view, depth), WIN_SCORE, "depth {depth}");
    }
}

#[test]
fn test_lose_in_two_scores() {
    let view = lose_in_two();
    assert_eq!(score_at(&view, 0), -4);
    assert_eq!(score_at(&view, 1), -2);
    for depth in 2..=4 {
        assert_eq!(score_at(&view, depth), -WIN_SCORE, "depth {depth}");
    }
}

#[test]
fn test_terminal_score_ignores_depth() {
    // An opponent piece already stands on height 3.
    let view = EgocentricView::from_rows(
        ["00000", "00000", "00300", "00000", "00000"],
        ["A    ", "     ", "  O  ", "     ", "B   O"],
    )
    .unwrap();
    for depth in 0..=4 {
        assert_eq!(score_at(&view, depth), -WIN_SCORE, "depth {depth}");
    }
}

// =============================================================================
// Root Search
// =============================================================================

#[test]
fn test_finds_win_in_two() {
    let mut search = Negamax::new(SearchConfig::default().with_depth(2));
    let result = search.search(&win_in_two());

    assert_eq!(result.score, WIN_SCORE);
    assert_eq!(
        result.best,
        Some(Move::new(PieceSlot::Second, Direction::new(-1, -1), Direction::new(1, 0)))
    );
}

#[test]
fn test_search_is_deterministic() {
    let view = EgocentricView::from_rows(
        ["01000", "12100", "01210", "00100", "00000"],
        ["A    ", "   O ", "     ", " B   ", "   O "],
    )
    .unwrap();

    for depth in 0..=2 {
        let config = SearchConfig::default().with_depth(depth);
        let first = Negamax::new(config.clone()).search(&view);
        let second = Negamax::new(config).search(&view);

        assert_eq!(first.best, second.best, "depth {depth}");
        assert_eq!(first.score, second.score, "depth {depth}");
        assert_eq!(first.stats.nodes, second.stats.nodes, "depth {depth}");
    }
}

#[test]
fn test_search_move_is_legal() {
    let view = lose_in_two();
    let result = Negamax::new(SearchConfig::default()).search(&view);

    // Lost either way, but the answer must still be a legal turn.
    assert_eq!(result.score, -WIN_SCORE);
    assert!(legal_turns(&view).contains(&result.best.unwrap()));
}

#[test]
fn test_time_box_degrades_softly() {
    let view = EgocentricView::from_rows(
        ["00000", "00000", "00000", "00000", "00000"],
        ["     ", " A O ", "     ", " O B ", "     "],
    )
    .unwrap();
    let config = SearchConfig::default()
        .with_depth(4)
        .with_time_box(TimeBox::new(Duration::from_nanos(1), 1.0));
    let result = Negamax::new(config).search(&view);

    let best = result.best.expect("a time-boxed search still answers");
    assert!(legal_turns(&view).contains(&best));
    assert!(result.stats.time_cutoffs > 0);
}
