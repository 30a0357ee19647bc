//! Collision resolution for the brick playfield
//!
//! The tricky part of Brickfall: a single pass per tick that checks, in a
//! fixed order, the bottom-edge loss condition, the win condition, the
//! five-zone paddle deflection and the brick probe-point bounce. Everything
//! is a total function over well-formed state; there is nothing to fail.

use glam::IVec2;

use super::state::{Ball, Brick, GamePhase, GameState, Paddle};
use crate::consts::*;

/// Run the full collision pass for one tick. Must be called after
/// `Ball::advance` and `Paddle::advance`.
pub fn resolve(state: &mut GameState) {
    if check_bottom_loss(state) {
        return;
    }
    check_win(state);
    ball_paddle(&mut state.ball, &state.paddle);
    ball_bricks(&mut state.ball, &mut state.bricks);
}

/// Loss condition: the ball's bottom edge passed below the bottom line.
/// Returns true when the game just ended, which terminates the pass.
fn check_bottom_loss(state: &mut GameState) -> bool {
    if state.ball.rect.bottom() > BOTTOM_EDGE {
        state.finish(GamePhase::Lost, MSG_GAME_OVER);
        true
    } else {
        false
    }
}

/// Win condition: every brick destroyed. Because this runs before the
/// brick pass, a win is observed on the tick after the last brick dies.
fn check_win(state: &mut GameState) {
    if state.bricks.iter().all(|b| b.is_destroyed()) {
        state.finish(GamePhase::Won, MSG_VICTORY);
    }
}

/// Which of the five equal-width paddle zones the ball's left edge falls
/// in. Positions left of the paddle count as the leftmost zone, positions
/// at or beyond the last boundary as the rightmost.
fn paddle_zone(paddle: &Paddle, ball_left: i32) -> i32 {
    let zone_width = paddle.rect.width() / PADDLE_ZONES;
    (ball_left - paddle.rect.left())
        .div_euclid(zone_width)
        .clamp(0, PADDLE_ZONES - 1)
}

/// Angle-dependent paddle deflection: the zone the ball strikes decides
/// the outgoing direction. The center sends the ball straight up whatever
/// the incoming angle; the outer zones force it upward and outward so it
/// cannot re-enter the bottom edge immediately.
fn ball_paddle(ball: &mut Ball, paddle: &Paddle) {
    if !ball.rect.overlaps(&paddle.rect) {
        return;
    }

    let zone = paddle_zone(paddle, ball.rect.left());
    log::debug!("paddle hit: ball_left={} zone={zone}", ball.rect.left());
    match zone {
        0 => {
            ball.set_x_dir(-1);
            ball.set_y_dir(-1);
        }
        1 => {
            ball.set_x_dir(-1);
            ball.set_y_dir(-ball.dir.y);
        }
        2 => {
            ball.set_x_dir(0);
            ball.set_y_dir(-1);
        }
        3 => {
            ball.set_x_dir(1);
            ball.set_y_dir(-ball.dir.y);
        }
        _ => {
            ball.set_x_dir(1);
            ball.set_y_dir(-1);
        }
    }
}

/// Brick pass: only the first non-destroyed brick overlapping the ball is
/// processed per tick, in creation order. Probe points one unit outside
/// the ball's box decide the deflection; only the right and top probes
/// influence direction, while a hit from any side still destroys the
/// brick.
fn ball_bricks(ball: &mut Ball, bricks: &mut [Brick]) {
    let probe_right = IVec2::new(ball.rect.right() + 1, ball.rect.top());
    let probe_top = IVec2::new(ball.rect.left(), ball.rect.top() - 1);

    for (idx, brick) in bricks.iter_mut().enumerate() {
        if brick.is_destroyed() || !ball.rect.overlaps(&brick.rect) {
            continue;
        }

        if brick.rect.contains_point(probe_right) {
            ball.set_x_dir(-1);
        } else if brick.rect.contains_point(probe_top) {
            ball.set_y_dir(-1);
        }
        brick.destroy();
        log::debug!("brick {idx} destroyed at {:?}", brick.rect.pos);
        return;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;

    fn ball_at(x: i32, y: i32, dir: (i32, i32)) -> Ball {
        let mut ball = Ball::new();
        ball.rect = Rect::new(x, y, BALL_SIZE, BALL_SIZE);
        ball.dir = IVec2::new(dir.0, dir.1);
        ball
    }

    fn paddle_at(x: i32, y: i32) -> Paddle {
        let mut paddle = Paddle::new();
        paddle.rect = Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT);
        paddle
    }

    #[test]
    fn test_paddle_zone_partition() {
        let paddle = paddle_at(100, 300);
        // Boundaries at 108, 116, 124, 132 for a 40-wide paddle at x=100
        assert_eq!(paddle_zone(&paddle, 104), 0);
        assert_eq!(paddle_zone(&paddle, 107), 0);
        assert_eq!(paddle_zone(&paddle, 108), 1);
        assert_eq!(paddle_zone(&paddle, 120), 2);
        assert_eq!(paddle_zone(&paddle, 124), 3);
        assert_eq!(paddle_zone(&paddle, 132), 4);
        assert_eq!(paddle_zone(&paddle, 139), 4);
        // Ball edges outside the paddle still classify to the outer zones
        assert_eq!(paddle_zone(&paddle, 95), 0);
        assert_eq!(paddle_zone(&paddle, 150), 4);
    }

    #[test]
    fn test_paddle_hit_leftmost_zone_forces_up_left() {
        let paddle = paddle_at(100, 300);
        let mut ball = ball_at(104, 295, (1, 1));
        ball_paddle(&mut ball, &paddle);
        assert_eq!(ball.dir, IVec2::new(-1, -1));
    }

    #[test]
    fn test_paddle_hit_center_zone_goes_straight_up() {
        let paddle = paddle_at(100, 300);
        let mut ball = ball_at(120, 295, (1, 1));
        ball_paddle(&mut ball, &paddle);
        assert_eq!(ball.dir, IVec2::new(0, -1));
    }

    #[test]
    fn test_paddle_hit_inner_zones_reverse_vertical() {
        let paddle = paddle_at(100, 300);

        let mut ball = ball_at(110, 295, (1, 1));
        ball_paddle(&mut ball, &paddle);
        assert_eq!(ball.dir, IVec2::new(-1, -1));

        // Zone 3 with an upward-moving ball flips it back downward
        let mut ball = ball_at(125, 295, (0, -1));
        ball_paddle(&mut ball, &paddle);
        assert_eq!(ball.dir, IVec2::new(1, 1));
    }

    #[test]
    fn test_paddle_hit_rightmost_zone_forces_up_right() {
        let paddle = paddle_at(100, 300);
        let mut ball = ball_at(135, 295, (-1, 1));
        ball_paddle(&mut ball, &paddle);
        assert_eq!(ball.dir, IVec2::new(1, -1));
    }

    #[test]
    fn test_paddle_miss_leaves_direction_alone() {
        let paddle = paddle_at(100, 300);
        let mut ball = ball_at(200, 200, (1, 1));
        ball_paddle(&mut ball, &paddle);
        assert_eq!(ball.dir, IVec2::new(1, 1));
    }

    #[test]
    fn test_brick_right_probe_bounces_left() {
        // Brick directly right of the ball, overlapping by one column
        let mut bricks = vec![Brick::new(109, 100)];
        let mut ball = ball_at(100, 100, (1, 1));
        ball_bricks(&mut ball, &mut bricks);
        assert!(bricks[0].is_destroyed());
        assert_eq!(ball.dir.x, -1);
    }

    #[test]
    fn test_brick_top_probe_bounces_vertical() {
        // Brick overlapping the ball's top-left corner; the right probe
        // misses, the top probe lands inside
        let mut bricks = vec![Brick::new(65, 95)];
        let mut ball = ball_at(100, 100, (1, 1));
        assert!(ball.rect.overlaps(&bricks[0].rect));
        assert!(!bricks[0].rect.contains_point(IVec2::new(111, 100)));
        ball_bricks(&mut ball, &mut bricks);
        assert!(bricks[0].is_destroyed());
        assert_eq!(ball.dir.y, -1);
    }

    #[test]
    fn test_brick_destroyed_even_when_no_probe_matches() {
        // Ball center overlaps the brick but both checked probes land
        // outside of it
        let mut bricks = vec![Brick::new(95, 105)];
        let mut ball = ball_at(100, 100, (1, 1));
        assert!(ball.rect.overlaps(&bricks[0].rect));
        ball_bricks(&mut ball, &mut bricks);
        assert!(bricks[0].is_destroyed());
        assert_eq!(ball.dir, IVec2::new(1, 1));
    }

    #[test]
    fn test_only_first_overlapping_brick_processed() {
        // Two side-by-side bricks, ball straddling both
        let mut bricks = vec![Brick::new(70, 100), Brick::new(110, 100)];
        let mut ball = ball_at(105, 102, (1, 1));
        assert!(ball.rect.overlaps(&bricks[0].rect));
        assert!(ball.rect.overlaps(&bricks[1].rect));
        ball_bricks(&mut ball, &mut bricks);
        assert!(bricks[0].is_destroyed());
        assert!(!bricks[1].is_destroyed());
    }

    #[test]
    fn test_destroyed_bricks_skipped() {
        let mut bricks = vec![Brick::new(70, 100), Brick::new(110, 100)];
        bricks[0].destroy();
        let mut ball = ball_at(105, 102, (1, 1));
        ball_bricks(&mut ball, &mut bricks);
        assert!(bricks[1].is_destroyed());
    }

    #[test]
    fn test_bottom_loss() {
        let mut state = GameState::new();
        state.ball.rect.pos.y = BOTTOM_EDGE;
        resolve(&mut state);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.message, MSG_GAME_OVER);
    }

    #[test]
    fn test_win_when_all_bricks_destroyed() {
        let mut state = GameState::new();
        for brick in &mut state.bricks {
            brick.destroy();
        }
        resolve(&mut state);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.message, MSG_VICTORY);
    }

    #[test]
    fn test_no_win_while_bricks_remain() {
        let mut state = GameState::new();
        for brick in &mut state.bricks[1..] {
            brick.destroy();
        }
        resolve(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.message.is_empty());
    }

    #[test]
    fn test_loss_takes_priority_over_win() {
        let mut state = GameState::new();
        for brick in &mut state.bricks {
            brick.destroy();
        }
        state.ball.rect.pos.y = BOTTOM_EDGE;
        resolve(&mut state);
        assert_eq!(state.phase, GamePhase::Lost);
    }
}
