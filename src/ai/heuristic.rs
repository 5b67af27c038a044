use crate::game::{Board, Cell, Direction, Side};

/// Trait for evaluating a board position from a side's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, side: Side) -> i32;
}

/// Points awarded per window pattern and per centre piece.
///
/// "One short" means `connect_length - 1` pieces plus one empty cell, "two
/// short" means `connect_length - 2` pieces plus two empty cells. Each pattern
/// needs at least one piece of the side it scores.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub full_window: i32,
    pub one_short: i32,
    pub two_short: i32,
    pub opponent_one_short: i32,
    pub center_piece: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            full_window: 100,
            one_short: 5,
            two_short: 2,
            opponent_one_short: -4,
            center_piece: 3,
        }
    }
}

impl HeuristicWeights {
    /// Upper bound on `|evaluate|` for any board of these dimensions.
    pub fn max_magnitude(&self, width: usize, height: usize, connect_length: usize) -> i64 {
        let board = match Board::new(width, height, connect_length) {
            Ok(board) => board,
            Err(_) => return 0,
        };
        let windows: i64 = Direction::ALL
            .iter()
            .map(|&dir| board.windows(dir).count() as i64)
            .sum();
        let per_window = [
            self.full_window,
            self.one_short,
            self.two_short,
            self.opponent_one_short,
        ]
        .iter()
        .map(|w| i64::from(w.unsigned_abs()))
        .max()
        .unwrap_or(0);
        windows * per_window + height as i64 * i64::from(self.center_piece.unsigned_abs())
    }
}

/// Counts of own, opponent and empty cells in one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WindowCounts {
    own: usize,
    opp: usize,
    empty: usize,
}

impl WindowCounts {
    fn tally(cells: impl Iterator<Item = Cell>, side: Side) -> Self {
        let own_cell = side.to_cell();
        let mut counts = WindowCounts::default();
        for cell in cells {
            match cell {
                Cell::Empty => counts.empty += 1,
                c if c == own_cell => counts.own += 1,
                _ => counts.opp += 1,
            }
        }
        counts
    }
}

/// Windowed evaluator: a centre-column bonus plus a score for every window
/// of `connect_length` cells in all four directions.
#[derive(Debug, Clone, Default)]
pub struct WindowHeuristic {
    weights: HeuristicWeights,
}

impl WindowHeuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        WindowHeuristic { weights }
    }

    /// Score a single window of cells for `side`.
    pub fn score_window(&self, cells: &[Cell], side: Side) -> i32 {
        let counts = WindowCounts::tally(cells.iter().copied(), side);
        self.score_counts(counts, cells.len())
    }

    fn score_counts(&self, counts: WindowCounts, len: usize) -> i32 {
        let w = &self.weights;
        let mut score = 0;

        if counts.own == len {
            score += w.full_window;
        } else if counts.own > 0 && counts.own + 1 == len && counts.empty == 1 {
            score += w.one_short;
        } else if counts.own > 0 && counts.own + 2 == len && counts.empty == 2 {
            score += w.two_short;
        }

        if counts.opp > 0 && counts.opp + 1 == len && counts.empty == 1 {
            score += w.opponent_one_short;
        }

        score
    }

    /// Full positional score of `board` for `side`.
    pub fn score_position(&self, board: &Board, side: Side) -> i32 {
        let own_cell = side.to_cell();
        let len = board.connect_length();

        let center = board.width() / 2;
        let center_count = (0..board.height())
            .filter(|&row| board.get(row, center) == own_cell)
            .count() as i32;
        let mut score = center_count * self.weights.center_piece;

        for dir in Direction::ALL {
            for start in board.windows(dir) {
                let counts = WindowCounts::tally(board.window_cells(start, dir), side);
                score += self.score_counts(counts, len);
            }
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        self.score_position(board, side)
    }
}
