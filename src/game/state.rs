use crate::error::MoveError;

use super::{Board, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// A game in progress: the board, whose turn it is, and the result once decided.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_side: Side,
    outcome: Option<GameOutcome>,
    moves: Vec<usize>,
}

impl GameState {
    /// Create initial game state on an empty board. Side A moves first.
    pub fn initial(board: Board) -> Self {
        GameState {
            board,
            current_side: Side::A,
            outcome: None,
            moves: Vec::new(),
        }
    }

    /// Resume from an arbitrary position with `to_move` on turn.
    pub fn from_position(board: Board, to_move: Side) -> Self {
        let outcome = if board.has_connection(to_move.other()) {
            Some(GameOutcome::Winner(to_move.other()))
        } else if board.has_connection(to_move) {
            Some(GameOutcome::Winner(to_move))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };
        GameState {
            board,
            current_side: to_move,
            outcome,
            moves: Vec::new(),
        }
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns played so far, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Legal columns; empty once the game is over
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, self.current_side)?;
        self.moves.push(column);

        if self.board.has_connection(self.current_side) {
            self.outcome = Some(GameOutcome::Winner(self.current_side));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_side = self.current_side.other();
        }

        Ok(())
    }

    /// Clear the board and start over with side A to move
    pub fn reset(&mut self) {
        let mut board = std::mem::take(&mut self.board);
        board.clear();
        *self = GameState::initial(board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(Board::standard());
        assert_eq!(state.current_side(), Side::A);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial(Board::standard());
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_side(), Side::B);
        assert_eq!(new_state.board().get(5, 3), Cell::A);
        assert_eq!(new_state.moves(), &[3]);
        // Original is untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial(Board::standard());

        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // A
            if col < 3 {
                state = state.apply_move(col).unwrap(); // B
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Side::A)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial(Board::standard());
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_draw_on_small_board() {
        // 3x2 with connect 3: rows end up ABA / BAB
        let mut state = GameState::initial(Board::new(3, 2, 3).unwrap());
        for col in [0, 1, 2, 0, 1, 2] {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::initial(Board::new(5, 4, 3).unwrap());
        state.apply_move_mut(2).unwrap();
        state.reset();
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_side(), Side::A);
        assert_eq!(state.board().width(), 5);
        assert_eq!(state.board().piece_count(), 0);
    }

    #[test]
    fn test_from_position_detects_finished_game() {
        let board = Board::from_rows(&["...", "B..", "BAA", "BAA"], 3).unwrap();
        let state = GameState::from_position(board, Side::A);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Side::B)));
    }
}
