//! One frame of simulation
//!
//! Motion is constant-velocity with no sub-stepping. A fast ball can sink up
//! to one frame of travel into a wall before its velocity flips; the wall
//! checks only flip velocity and never push the ball back out.

use crate::config::Config;

use super::entities::{Ball, Paddle};
use super::geometry::{overlaps, Rectangle};
use super::state::{Events, GameEvent, GameState};

/// Advance the world by one frame. Callers skip this while the round is over.
pub fn step(
    config: &Config,
    ball: &mut Ball,
    paddle: &mut Paddle,
    state: &mut GameState,
    events: &mut Events,
) {
    ball.x += ball.vx;
    ball.y += ball.vy;

    // Walls
    if ball.x <= config.wall_margin || ball.x >= config.screen_width - config.wall_margin {
        ball.vx = -ball.vx;
    }
    if ball.y <= config.wall_margin {
        ball.vy = -ball.vy;
    }

    // Paddle
    if ball.vy > 0.0
        && ball.bottom() >= paddle.y
        && ball.x >= paddle.x
        && ball.x <= paddle.x + paddle.width
    {
        events.push(GameEvent::Impact);
        ball.vx = (ball.x - paddle.center_x()) * config.deflection;
        ball.vy = -ball.vy;
        ball.y = paddle.y - ball.radius;
    }

    // Missed
    if ball.y > config.screen_height {
        state.lose_life(ball, paddle, events);
    }

    // Blocks. Each block hit this frame flips vy once, so an even number of
    // simultaneous hits leaves the direction unchanged.
    let before = state.blocks.len();
    state.blocks.retain(|block| {
        if overlaps(&*ball, block) {
            events.push(GameEvent::Impact);
            ball.vy = -ball.vy;
            false
        } else {
            true
        }
    });
    if state.blocks.len() != before {
        log::debug!("{} blocks left", state.blocks.len());
    }

    paddle.advance(config.screen_width);
    if ball.on_paddle {
        ball.x = paddle.center_x();
    }

    if state.blocks.is_empty() {
        state.win_round(ball, paddle, events);
    }
}
