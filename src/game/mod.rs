pub mod entities;
pub mod geometry;
pub mod input;
pub mod sim;
pub mod state;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

use entities::{Ball, Paddle};
use state::{Events, GameState};

/// The whole game: the two singleton entities, round state, and the event
/// buffer the frontend drains after each frame.
pub struct Breakout {
    pub config: Config,
    pub ball: Ball,
    pub paddle: Paddle,
    pub state: GameState,
    pub events: Events,
    rng: StdRng,
}

impl Breakout {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic launch angles
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            state: GameState::new(&config),
            events: Events::new(),
            rng,
            config,
        }
    }

    /// One frame. Frozen once the round is over, until a restart.
    pub fn update(&mut self) {
        if self.state.is_paused() {
            return;
        }
        sim::step(
            &self.config,
            &mut self.ball,
            &mut self.paddle,
            &mut self.state,
            &mut self.events,
        );
    }

    pub fn reset(&mut self) {
        self.state
            .reset(&self.config, &mut self.ball, &self.paddle, &mut self.events);
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn is_round_won(&self) -> bool {
        self.state.round_won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_frozen_after_game_over() {
        let mut game = Breakout::with_seed(Config::default(), 7);
        game.state.lives = 0;
        game.state.game_over = true;
        game.ball.on_paddle = false;
        game.ball.vx = 1.0;
        game.ball.vy = -1.0;
        let before = game.ball.clone();

        game.update();
        assert_eq!(game.ball, before);
    }

    #[test]
    fn test_update_frozen_after_round_won() {
        let mut game = Breakout::with_seed(Config::default(), 7);
        game.state.round_won = true;
        game.paddle.dx = 6.0;
        let x = game.paddle.x;

        game.update();
        assert_eq!(game.paddle.x, x);
    }
}
