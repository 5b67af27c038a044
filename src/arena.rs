//! Headless games between two agents.

use log::{debug, info};

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Board, GameOutcome, GameState, Side};

/// A finished game.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GameRecord {
    /// Agent playing side A (moves first)
    pub first: String,
    /// Agent playing side B
    pub second: String,
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            GameOutcome::Winner(side) => Some(side),
            GameOutcome::Draw => None,
        }
    }

    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Win/loss/draw tally from `agent_a`'s point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MatchSummary {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchSummary {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    pub fn average_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

/// Play one game on `board`; `first` is side A and moves first.
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    board: Board,
) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::initial(board);

    while !state.is_terminal() {
        let side = state.current_side();
        let agent: &mut dyn Agent = match side {
            Side::A => &mut *first,
            Side::B => &mut *second,
        };
        let col = agent.select_action(&state).ok_or_else(|| ArenaError::NoMove {
            agent: agent.name().to_string(),
            side,
        })?;
        if state.apply_move_mut(col).is_err() {
            return Err(ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                col,
                legal: state.legal_actions(),
            });
        }
        debug!("{} ({}) plays column {}", agent.name(), side.name(), col);
    }

    let outcome = match state.outcome() {
        Some(outcome) => outcome,
        None => unreachable!("loop exits only on a terminal state"),
    };

    Ok(GameRecord {
        first: first.name().to_string(),
        second: second.name().to_string(),
        moves: state.moves().to_vec(),
        outcome,
    })
}

/// Play `games` games, alternating which agent moves first.
pub fn play_match(
    agent_a: &mut dyn Agent,
    agent_b: &mut dyn Agent,
    games: usize,
    board: &Board,
) -> Result<MatchSummary, ArenaError> {
    let mut summary = MatchSummary::default();

    for game in 0..games {
        let a_side = if game % 2 == 0 { Side::A } else { Side::B };
        let record = match a_side {
            Side::A => play_game(agent_a, agent_b, board.clone())?,
            Side::B => play_game(agent_b, agent_a, board.clone())?,
        };

        summary.games += 1;
        summary.total_moves += record.length();
        match record.winner() {
            Some(side) if side == a_side => summary.wins += 1,
            Some(_) => summary.losses += 1,
            None => summary.draws += 1,
        }

        info!(
            "game {}: {} vs {} -> {:?} in {} moves",
            game + 1,
            record.first,
            record.second,
            record.outcome,
            record.length()
        );
    }

    Ok(summary)
}
