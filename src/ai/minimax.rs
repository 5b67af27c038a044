use crate::game::{Board, GameState, Side};

use super::agent::Agent;
use super::heuristic::{Heuristic, HeuristicWeights, WindowHeuristic};
use super::search::{SearchEngine, SearchResult};

/// Pick a column for `mover` with the default heuristic.
///
/// Returns `None` only when no column is open. A depth of zero is treated as
/// one ply.
pub fn choose_move(board: &Board, mover: Side, depth: u32) -> Option<usize> {
    MinimaxAgent::new(depth).choose_move(board, mover)
}

/// Minimax agent with alpha-beta pruning at a fixed search depth.
pub struct MinimaxAgent {
    depth: u32,
    engine: SearchEngine,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic::default()))
    }

    pub fn with_weights(depth: u32, weights: HeuristicWeights) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic::new(weights)))
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth: depth.max(1),
            engine: SearchEngine::new(heuristic),
        }
    }

    /// Toggle alpha-beta cutoffs; the chosen column is the same either way.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.engine = self.engine.with_pruning(pruning);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Run the full search and return the root result.
    pub fn search(&self, board: &Board, mover: Side) -> SearchResult {
        self.engine.search(board, mover, self.depth)
    }

    pub fn choose_move(&self, board: &Board, mover: Side) -> Option<usize> {
        if board.valid_moves().is_empty() {
            return None;
        }
        self.search(board, mover).column
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        self.choose_move(state.board(), state.current_side())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
