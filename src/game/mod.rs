//! Core game logic: a parametric gravity board, the two sides, and a game
//! state machine for confirmed moves.

mod board;
mod side;
mod state;

pub use board::{
    Board, Cell, Direction, Outcome, MIN_CONNECT, STANDARD_CONNECT, STANDARD_HEIGHT,
    STANDARD_WIDTH,
};
pub use side::Side;
pub use state::{GameOutcome, GameState};
