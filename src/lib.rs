//! # Connect Search
//!
//! A bounded-depth adversarial search engine for gravity connection games
//! (connect four and its variants on any board size and run length).
//!
//! ## Modules
//!
//! - [`game`] — Board, sides, win detection, game state machine
//! - [`ai`] — Windowed heuristic, minimax search with alpha-beta pruning, agents
//! - [`arena`] — Headless games and matches between agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;

pub use ai::choose_move;
pub use game::{Board, Outcome, Side};
