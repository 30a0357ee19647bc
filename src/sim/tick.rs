//! Fixed timestep simulation tick
//!
//! One tick advances the ball, advances the paddle, then runs the
//! collision pass, in that order. Once the phase is terminal the tick is a
//! no-op; the final frame stays frozen for the shell to keep drawing.

use super::collision;
use super::state::GameState;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    if state.phase.is_terminal() {
        return;
    }

    state.ball.advance();
    state.paddle.advance();
    collision::resolve(state);
}
