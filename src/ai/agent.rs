use crate::game::GameState;

/// Anything that can pick a column for the side on turn.
pub trait Agent {
    /// Select a column for `state.current_side()`. `None` only when the game
    /// is over or no column is open.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
