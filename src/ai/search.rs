//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from the mover's perspective. The search works on a
//! single scratch copy of the root board: each explored move is dropped in
//! place and lifted again before the next sibling is tried, so sibling
//! branches never see each other's pieces.
//!
//! Moves are tried in ascending column order and a later column only replaces
//! the current best on a strictly better score, which makes the lowest
//! best-scoring column the deterministic choice.

use log::debug;

use crate::game::{Board, Outcome, Side};

use super::heuristic::Heuristic;

/// Score of a board the mover has already won. Dominates any heuristic sum.
pub const WIN_SCORE: i32 = 100_000_000;
/// Score of a board the opponent has already won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

/// Work counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Depth-exhausted nodes scored by the heuristic
    pub leaf_evaluations: u64,
    /// Won, lost or drawn nodes
    pub terminal_nodes: u64,
    /// Times the remaining siblings were skipped because alpha >= beta
    pub cutoffs: u64,
}

/// Result of a search from the root.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchResult {
    /// Chosen column, `None` when the root was terminal or the depth was zero
    pub column: Option<usize>,
    pub score: i32,
    pub depth: u32,
    pub stats: SearchStats,
}

/// Minimax search engine bound to a leaf heuristic.
pub struct SearchEngine {
    heuristic: Box<dyn Heuristic>,
    pruning: bool,
}

impl SearchEngine {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            heuristic,
            pruning: true,
        }
    }

    /// Disable pruning to get a plain exhaustive minimax over the same tree.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Search `depth` plies ahead for `mover`, which is on turn at the root.
    pub fn search(&self, board: &Board, mover: Side, depth: u32) -> SearchResult {
        self.search_window(board, mover, depth, i32::MIN, i32::MAX, true)
    }

    /// Search with explicit bounds and side on turn.
    pub fn search_window(
        &self,
        board: &Board,
        mover: Side,
        depth: u32,
        alpha: i32,
        beta: i32,
        mover_turn: bool,
    ) -> SearchResult {
        let mut scratch = board.clone();
        let mut searcher = Searcher {
            heuristic: self.heuristic.as_ref(),
            mover,
            pruning: self.pruning,
            stats: SearchStats::default(),
        };
        let (column, score) = searcher.minimax(&mut scratch, depth, alpha, beta, mover_turn);
        debug_assert_eq!(&scratch, board, "search left pieces on the board");

        debug!(
            "search mover={} depth={} column={:?} score={} nodes={} leaves={} cutoffs={}",
            mover.name(),
            depth,
            column,
            score,
            searcher.stats.nodes,
            searcher.stats.leaf_evaluations,
            searcher.stats.cutoffs
        );

        SearchResult {
            column,
            score,
            depth,
            stats: searcher.stats,
        }
    }
}

/// Per-search state: the mover, the pruning switch and the counters.
struct Searcher<'a> {
    heuristic: &'a dyn Heuristic,
    mover: Side,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher<'_> {
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        mover_turn: bool,
    ) -> (Option<usize>, i32) {
        self.stats.nodes += 1;

        let terminal_score = match board.classify(self.mover) {
            Outcome::MoverWins => Some(WIN_SCORE),
            Outcome::OpponentWins => Some(LOSS_SCORE),
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Undecided => None,
        };
        if let Some(score) = terminal_score {
            self.stats.terminal_nodes += 1;
            return (None, score);
        }

        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return (None, self.heuristic.evaluate(board, self.mover));
        }

        let moves = board.valid_moves();
        let Some(&first) = moves.first() else {
            unreachable!("undecided board with no legal moves");
        };

        let side = if mover_turn {
            self.mover
        } else {
            self.mover.other()
        };
        let mut column = first;
        let mut value = if mover_turn { i32::MIN } else { i32::MAX };

        for col in moves {
            let row = match board.drop_piece(col, side) {
                Ok(row) => row,
                Err(e) => unreachable!("valid move {col} rejected: {e}"),
            };
            let (_, score) = self.minimax(board, depth - 1, alpha, beta, !mover_turn);
            board.undo_drop(row, col);

            if mover_turn {
                if score > value {
                    value = score;
                    column = col;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = col;
                }
                beta = beta.min(value);
            }

            if self.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (Some(column), value)
    }
}
