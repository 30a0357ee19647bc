//! Brickfall entry point
//!
//! Headless demo shell: spawns the fixed-rate simulation loop, steers the
//! paddle with a simple ball-tracking autopilot and dumps the final
//! snapshot as JSON once the game ends.

use brickfall::sim::PaddleDirection;
use brickfall::{Game, GameLoop};

/// Give up on a run that somehow never terminates (~20 minutes at 100 Hz)
const MAX_FRAMES: u64 = 120_000;

/// Autopilot dead zone, keeps the paddle from jittering under the ball
const DEAD_ZONE: i32 = 2;

fn main() {
    env_logger::init();

    let game = Game::new();
    let game_loop = GameLoop::spawn(game.clone());

    let mut engaged: Option<PaddleDirection> = None;
    let mut frames_seen: u64 = 0;
    let mut capped = false;

    // Iterate frames until the loop ends and disconnects the channel
    for frame in game_loop.frames() {
        frames_seen += 1;
        if frames_seen >= MAX_FRAMES {
            capped = true;
            break;
        }

        // Track the ball: keep the paddle center under the ball center
        let ball_center = frame.ball.left() + frame.ball.width() / 2;
        let paddle_center = frame.paddle.left() + frame.paddle.width() / 2;
        let want = if ball_center < paddle_center - DEAD_ZONE {
            Some(PaddleDirection::Left)
        } else if ball_center > paddle_center + DEAD_ZONE {
            Some(PaddleDirection::Right)
        } else {
            None
        };

        if want != engaged {
            if let Some(dir) = engaged {
                game.set_paddle_direction(dir, false);
            }
            if let Some(dir) = want {
                game.set_paddle_direction(dir, true);
            }
            engaged = want;
        }
    }

    if capped {
        log::warn!("frame cap reached after {frames_seen} frames, stopping");
        game_loop.stop();
    } else {
        game_loop.join();
    }

    let end = game.snapshot();
    log::info!(
        "run over: {:?} after {frames_seen} frames, {} bricks left",
        end.phase,
        end.bricks.len()
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&end).expect("snapshot serializes")
    );
}
