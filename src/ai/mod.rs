//! Move selection: the windowed evaluator, the minimax search engine, and the
//! agents that wrap it.

mod agent;
pub mod heuristic;
mod minimax;
mod random;
pub mod search;

pub use agent::Agent;
pub use heuristic::{Heuristic, HeuristicWeights, WindowHeuristic};
pub use minimax::{choose_move, MinimaxAgent};
pub use random::RandomAgent;
pub use search::{SearchEngine, SearchResult, SearchStats, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
