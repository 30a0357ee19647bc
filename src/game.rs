//! External game boundary
//!
//! The shell never touches `GameState` directly. It holds a [`Game`] handle
//! with exactly three entry points (`tick`, `set_paddle_direction`,
//! `snapshot`) and optionally a [`GameLoop`] that drives the tick at a
//! fixed rate on a dedicated thread. The mutex makes each tick atomic
//! relative to snapshots and input writes: the renderer only ever observes
//! the world between completed ticks, and direction commands land as flag
//! writes that take effect on the next tick.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

use crate::consts::TICK_PERIOD;
use crate::sim::{self, GamePhase, GameState, PaddleDirection, Snapshot};

/// Shared handle to one simulation instance. Cloning shares the instance;
/// the input shell and the tick loop hold clones of the same game.
#[derive(Clone)]
pub struct Game {
    state: Arc<Mutex<GameState>>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Wrap an existing state, e.g. one positioned for a test scenario
    pub fn from_state(state: GameState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        // A poisoned lock means a tick panicked; the simulation contract
        // (total functions over well-formed state) is already broken
        self.state.lock().expect("simulation state poisoned")
    }

    /// Advance the simulation by one fixed timestep
    pub fn tick(&self) {
        sim::tick(&mut self.lock());
    }

    /// Input command from the shell: a direction key went down or up.
    /// Applied on the next tick's paddle movement, never mid-tick.
    pub fn set_paddle_direction(&self, direction: PaddleDirection, engaged: bool) {
        self.lock().paddle.set_direction(direction, engaged);
    }

    /// Read-only render snapshot of the world between ticks
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.lock().phase
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-rate ticking thread. Publishes a [`Snapshot`] per completed tick
/// on a bounded channel (frames are dropped, not queued, when the consumer
/// lags) and exits on its own at the first tick boundary where the phase
/// is terminal.
pub struct GameLoop {
    frames: Receiver<Snapshot>,
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl GameLoop {
    /// Spawn the loop at the standard tick period
    pub fn spawn(game: Game) -> Self {
        Self::spawn_with_period(game, TICK_PERIOD)
    }

    pub fn spawn_with_period(game: Game, period: Duration) -> Self {
        let (frame_tx, frames) = bounded(1);
        let (stop_tx, stop_rx) = bounded(1);
        let handle = thread::Builder::new()
            .name("brickfall-sim".into())
            .spawn(move || run(game, period, frame_tx, stop_rx))
            .expect("failed to spawn simulation thread");

        Self {
            frames,
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Per-tick snapshot stream. Disconnects when the loop ends, so the
    /// shell can simply iterate until the channel closes.
    pub fn frames(&self) -> &Receiver<Snapshot> {
        &self.frames
    }

    /// Cancel at the next tick boundary and wait for the thread to finish
    pub fn stop(mut self) {
        let _ = self.stop_tx.send(());
        self.join_inner();
    }

    /// Wait for the loop to finish on its own (terminal phase)
    pub fn join(mut self) {
        self.join_inner();
    }

    fn join_inner(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("simulation thread panicked");
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        let _ = self.stop_tx.try_send(());
        self.join_inner();
    }
}

fn run(game: Game, period: Duration, frames: Sender<Snapshot>, stop: Receiver<()>) {
    log::info!("simulation loop started, period {period:?}");
    let mut deadline = Instant::now() + period;

    loop {
        if stop.try_recv().is_ok() {
            log::info!("simulation loop cancelled");
            break;
        }

        game.tick();
        let snapshot = game.snapshot();
        let terminal = snapshot.phase.is_terminal();

        if let Err(TrySendError::Full(_)) = frames.try_send(snapshot) {
            log::debug!("frame dropped, consumer lagging");
        }

        if terminal {
            log::info!("simulation loop finished at terminal phase");
            break;
        }

        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        deadline += period;
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::consts::*;

    #[test]
    fn test_entry_points() {
        let game = Game::new();
        let before = game.snapshot();
        assert_eq!(before.phase, GamePhase::Playing);
        assert_eq!(before.bricks.len(), BRICK_COUNT);
        // Snapshot without an intervening tick is stable
        assert_eq!(game.snapshot(), before);

        game.set_paddle_direction(PaddleDirection::Left, true);
        game.tick();
        let after = game.snapshot();
        assert_eq!(after.paddle.left(), before.paddle.left() - PADDLE_SPEED);
    }

    #[test]
    fn test_loop_exits_at_terminal_phase() {
        let mut state = GameState::new();
        state.ball.rect.pos = IVec2::new(100, BOTTOM_EDGE - BALL_SIZE);
        state.ball.dir = IVec2::new(0, 1);
        let game = Game::from_state(state);

        let game_loop = GameLoop::spawn_with_period(game.clone(), Duration::from_micros(100));
        game_loop.join();
        assert_eq!(game.phase(), GamePhase::Lost);
        assert_eq!(game.snapshot().message, MSG_GAME_OVER);
    }

    #[test]
    fn test_loop_stops_on_request() {
        let game = Game::new();
        let game_loop = GameLoop::spawn_with_period(game.clone(), Duration::from_millis(1));
        game_loop.stop();
        // Stopping early leaves a playable, unfinished game behind
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_loop_publishes_frames() {
        let game = Game::new();
        let game_loop = GameLoop::spawn_with_period(game, Duration::from_millis(1));
        let frame = game_loop
            .frames()
            .recv_timeout(Duration::from_secs(5))
            .expect("no frame received");
        assert_eq!(frame.phase, GamePhase::Playing);
        assert_eq!(frame.bricks.len(), BRICK_COUNT);
        game_loop.stop();
    }
}
