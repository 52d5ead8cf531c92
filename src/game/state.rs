use crate::config::Config;

use super::entities::{block_grid, heart_row, Ball, Block, Heart, Paddle};

/// Things the core asks its host to show or play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the paddle or broke a block
    Impact,
    Launched,
    LifeLost { remaining: u32 },
    GameOver,
    RoundWon,
    Reset,
}

/// Events produced since the host last drained them
#[derive(Debug, Default)]
pub struct Events {
    queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn count(&self, event: GameEvent) -> usize {
        self.queue.iter().filter(|e| **e == event).count()
    }
}

/// Lives, end-of-round flags and the block/heart collections.
#[derive(Debug, Clone)]
pub struct GameState {
    pub lives: u32,
    pub game_over: bool,
    pub round_won: bool,
    pub blocks: Vec<Block>,
    /// One per remaining life; the last one goes first
    pub hearts: Vec<Heart>,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        Self {
            lives: config.starting_lives,
            game_over: false,
            round_won: false,
            blocks: block_grid(config),
            hearts: heart_row(config),
        }
    }

    /// No motion or collisions happen while a round has ended.
    pub fn is_paused(&self) -> bool {
        self.lives == 0 || self.game_over || self.round_won
    }

    /// Ball fell past the bottom edge.
    pub fn lose_life(&mut self, ball: &mut Ball, paddle: &Paddle, events: &mut Events) {
        if self.lives == 0 {
            return;
        }
        self.hearts.pop();
        self.lives -= 1;
        events.push(GameEvent::LifeLost { remaining: self.lives });

        if self.lives > 0 {
            log::info!("Life lost, {} remaining", self.lives);
            ball.serve(paddle);
        } else {
            log::info!("Game over, {} blocks left", self.blocks.len());
            self.game_over = true;
            events.push(GameEvent::GameOver);
        }
    }

    /// Every block is gone.
    pub fn win_round(&mut self, ball: &mut Ball, paddle: &Paddle, events: &mut Events) {
        if self.round_won {
            return;
        }
        log::info!("Round won with {} lives left", self.lives);
        self.round_won = true;
        ball.serve(paddle);
        events.push(GameEvent::RoundWon);
    }

    /// Start over with a full grid and full lives. The paddle stays where it is.
    pub fn reset(&mut self, config: &Config, ball: &mut Ball, paddle: &Paddle, events: &mut Events) {
        *self = GameState::new(config);
        ball.serve(paddle);
        log::info!("Game reset");
        events.push(GameEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Config, GameState, Ball, Paddle, Events) {
        let config = Config::default();
        let state = GameState::new(&config);
        let ball = Ball::new(&config);
        let paddle = Paddle::new(&config);
        (config, state, ball, paddle, Events::new())
    }

    #[test]
    fn test_lose_life_reserves_ball() {
        let (_, mut state, mut ball, paddle, mut events) = setup();
        ball.on_paddle = false;
        ball.y = 650.0;
        ball.vy = 2.0;

        state.lose_life(&mut ball, &paddle, &mut events);
        assert_eq!(state.lives, 2);
        assert_eq!(state.hearts.len(), 2);
        assert!(!state.game_over);
        assert!(ball.on_paddle);
        assert_eq!(ball.vy, 0.0);
        assert_eq!(events.count(GameEvent::LifeLost { remaining: 2 }), 1);
    }

    #[test]
    fn test_last_life_ends_game() {
        let (_, mut state, mut ball, paddle, mut events) = setup();
        for _ in 0..3 {
            state.lose_life(&mut ball, &paddle, &mut events);
        }
        assert_eq!(state.lives, 0);
        assert!(state.game_over);
        assert!(state.hearts.is_empty());
        assert!(state.is_paused());
        assert_eq!(events.count(GameEvent::GameOver), 1);

        // Nothing left to take
        state.lose_life(&mut ball, &paddle, &mut events);
        assert_eq!(state.lives, 0);
        assert_eq!(events.count(GameEvent::GameOver), 1);
    }

    #[test]
    fn test_win_round_fires_once() {
        let (_, mut state, mut ball, paddle, mut events) = setup();
        state.blocks.clear();
        ball.on_paddle = false;
        ball.vx = 1.0;

        state.win_round(&mut ball, &paddle, &mut events);
        state.win_round(&mut ball, &paddle, &mut events);
        assert!(state.round_won);
        assert!(ball.on_paddle);
        assert_eq!(ball.vx, 0.0);
        assert_eq!(events.count(GameEvent::RoundWon), 1);
    }

    #[test]
    fn test_reset_restores_everything() {
        let (config, mut state, mut ball, paddle, mut events) = setup();
        state.blocks.truncate(7);
        state.hearts.clear();
        state.lives = 0;
        state.game_over = true;

        state.reset(&config, &mut ball, &paddle, &mut events);
        assert_eq!(state.lives, 3);
        assert!(!state.game_over && !state.round_won);
        assert_eq!(state.hearts.len(), 3);
        assert_eq!(state.blocks.len(), 50);
        assert!(ball.on_paddle);
        let drained: Vec<GameEvent> = events.drain().collect();
        assert_eq!(drained, vec![GameEvent::Reset]);
        assert!(events.is_empty());
    }
}
