//! Minimax search with alpha-beta pruning

use chess_core::{move_to_uci, Color, GamePosition, Move, Outcome, Score};
use tracing::{debug, trace};

use crate::eval::{Evaluator, MATE_SCORE};

/// Node and cutoff counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Picks the best move for the side to move.
///
/// Every root move is applied and scored by [`minimax`] at `depth - 1` with
/// the opponent to move. White keeps the highest score and Black the lowest;
/// on equal scores the move generated first wins.
///
/// # Returns
/// The chosen move with its score, or `None` if there are no legal moves
pub fn find_best_move(
    pos: &mut GamePosition,
    depth: u8,
    evaluator: &Evaluator,
    stats: &mut SearchStats,
) -> Option<(Move, Score)> {
    let maximizing = pos.side_to_move() == Color::White;
    let mut best: Option<(Move, Score)> = None;

    for mv in pos.legal_moves() {
        let uci = move_to_uci(pos.board(), mv);
        pos.apply(mv);
        let score = minimax(
            pos,
            depth.saturating_sub(1),
            !maximizing,
            Score::NEG_INFINITY,
            Score::INFINITY,
            evaluator,
            stats,
        );
        pos.undo();
        debug!(mv = %uci, score, "root move scored");

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// `alpha` is the score White can already guarantee and `beta` the score
/// Black can; once `alpha >= beta` the remaining siblings are skipped.
/// `pos` is returned unchanged.
pub fn minimax(
    pos: &mut GamePosition,
    depth: u8,
    is_maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    evaluator: &Evaluator,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;

    let outcome = pos.outcome();
    if depth == 0 || outcome.is_some() {
        return leaf_score(pos, outcome, depth, evaluator);
    }

    let moves = pos.legal_moves();

    let mut best = if is_maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };

    for mv in moves {
        pos.apply(mv);
        let value = minimax(pos, depth - 1, !is_maximizing, alpha, beta, evaluator, stats);
        pos.undo();

        if is_maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            trace!(depth, alpha, beta, "cutoff");
            break;
        }
    }

    best
}

/// Static score at a leaf. Mate scores grow with the depth still unused, so
/// a mate found sooner outranks one found later.
fn leaf_score(
    pos: &GamePosition,
    outcome: Option<Outcome>,
    depth: u8,
    evaluator: &Evaluator,
) -> Score {
    let score = evaluator.score(pos, outcome);
    if score.abs() >= MATE_SCORE {
        score + score.signum() * Score::from(depth)
    } else {
        score
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
