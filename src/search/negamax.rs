//! Negamax with fail-soft alpha-beta pruning.
//!
//! Scores are always relative to the side to move. Children are visited in
//! descending destination height so climbing lines are searched first and
//! cut off the rest early. A step onto a winning cell ends the line without
//! a build.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::Move;
use crate::rules::{winning_move, EgocentricView};

use super::config::SearchConfig;
use super::eval::{Evaluator, HeightCentrality, INFINITY, WIN_SCORE};
use super::node::SearchNode;
use super::stats::SearchStats;

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best turn found, `None` when the side to move has no legal turn.
    pub best: Option<Move>,

    /// Score of `best` for the side to move.
    pub score: i32,

    /// Statistics for this search.
    pub stats: SearchStats,
}

/// Negamax searcher over egocentric views.
///
/// ```
/// use rust_santorini::rules::EgocentricView;
/// use rust_santorini::search::{Negamax, SearchConfig, WIN_SCORE};
///
/// let view = EgocentricView::from_rows(
///     ["00000", "00000", "00000", "02024", "02304"],
///     ["B    ", "     ", "     ", "   O ", " A O "],
/// ).unwrap();
///
/// let mut search = Negamax::new(SearchConfig::default());
/// let result = search.search(&view);
/// assert_eq!(result.score, WIN_SCORE);
/// ```
#[derive(Clone, Debug)]
pub struct Negamax<E = HeightCentrality> {
    config: SearchConfig,
    evaluator: E,
    stats: SearchStats,
}

impl Negamax<HeightCentrality> {
    /// Create a searcher with the default static evaluation.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, HeightCentrality)
    }
}

impl<E: Evaluator> Negamax<E> {
    /// Create a searcher with a custom evaluation at the horizon.
    #[must_use]
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            stats: SearchStats::new(),
        }
    }

    /// Pick the best turn for the side to move in `view`.
    ///
    /// An immediate win is taken without searching. Otherwise every legal
    /// turn is scored by a full-depth search of the position it leaves and
    /// the first strictly best one is returned.
    pub fn search(&mut self, view: &EgocentricView) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let (best, score) = match winning_move(view) {
            Some(win) => (Some(win), WIN_SCORE),
            None => self.search_root(&mut SearchNode::new(view.clone()), start),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "negamax depth {}: best {:?} score {} ({} nodes, {} cutoffs, {} us)",
            self.config.depth,
            best,
            score,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us
        );

        SearchResult {
            best,
            score,
            stats: self.stats.clone(),
        }
    }

    fn search_root(&mut self, node: &mut SearchNode, start: Instant) -> (Option<Move>, i32) {
        let depth = self.config.depth;
        let allowance = self.config.time_box.map(|tb| tb.allowance(depth + 1));

        let mut best = None;
        let mut best_score = -INFINITY;

        'steps: for step in node.ordered_steps() {
            for build in step.builds(node.view()) {
                let undo = node.apply(&step, build);
                let score = -self.negamax(node, depth, -INFINITY, -best_score);
                node.undo(undo);

                log::trace!("root {} scores {}", step.with_build(build), score);
                if score > best_score {
                    best_score = score;
                    best = Some(step.with_build(build));
                }
                if best_score >= WIN_SCORE {
                    break 'steps;
                }
                if allowance.is_some_and(|limit| start.elapsed() > limit) {
                    self.stats.time_cutoffs += 1;
                    break 'steps;
                }
            }
        }

        match best {
            Some(mv) => (Some(mv), best_score),
            None => (None, -WIN_SCORE),
        }
    }

    /// Score `node` for its side to move, searching `depth` plies.
    ///
    /// Fail-soft: a result `<= alpha` is an upper bound, `>= beta` a lower
    /// bound, anything between is exact. `node` is restored before return.
    pub fn negamax(&mut self, node: &mut SearchNode, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;

        if node.is_lost() {
            return -WIN_SCORE;
        }
        if depth == 0 {
            self.stats.evaluations += 1;
            return self.evaluator.evaluate(node.view());
        }

        let deadline = self
            .config
            .time_box
            .map(|tb| (Instant::now(), tb.allowance(depth)));
        let mut best: Option<i32> = None;

        'steps: for step in node.ordered_steps() {
            if step.wins(node.view()) {
                return WIN_SCORE;
            }
            for build in step.builds(node.view()) {
                let undo = node.apply(&step, build);
                let score = -self.negamax(node, depth - 1, -beta, -alpha);
                node.undo(undo);

                let value = best.map_or(score, |b| b.max(score));
                best = Some(value);
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break 'steps;
                }
                if deadline.is_some_and(|(started, limit)| started.elapsed() > limit) {
                    self.stats.time_cutoffs += 1;
                    break 'steps;
                }
            }
        }

        // No legal turn loses.
        best.unwrap_or(-WIN_SCORE)
    }

    /// Statistics from the last `search`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator_mut(&mut self) -> &mut E {
        &mut self.evaluator
    }
}
