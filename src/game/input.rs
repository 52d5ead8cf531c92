use rand::Rng;

use super::state::GameEvent;
use super::Breakout;

/// Logical game keys, independent of any terminal key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Launch,
    Restart,
}

impl Breakout {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.paddle.dx = -self.paddle.speed,
            Key::Right => self.paddle.dx = self.paddle.speed,
            Key::Launch => self.launch(),
            Key::Restart => self.reset(),
        }
    }

    /// Releasing either arrow stops the paddle, even if the other arrow is
    /// still held.
    pub fn key_up(&mut self, key: Key) {
        if matches!(key, Key::Left | Key::Right) {
            self.paddle.dx = 0.0;
        }
    }

    fn launch(&mut self) {
        if !self.ball.on_paddle || self.state.is_paused() {
            return;
        }
        let speed = self.ball.speed;
        self.ball.vy = -speed;
        self.ball.vx = self.rng.gen_range(-speed..=speed);
        self.ball.on_paddle = false;
        log::debug!("Ball launched, vx={:.2}", self.ball.vx);
        self.events.push(GameEvent::Launched);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn game() -> Breakout {
        Breakout::with_seed(Config::default(), 42)
    }

    #[test]
    fn test_launch_frees_ball() {
        let mut g = game();
        g.key_down(Key::Launch);
        assert!(!g.ball.on_paddle);
        assert_eq!(g.ball.vy, -2.0);
        assert!((-2.0..=2.0).contains(&g.ball.vx));
        assert_eq!(g.events.count(GameEvent::Launched), 1);
    }

    #[test]
    fn test_launch_ignored_in_flight() {
        let mut g = game();
        g.key_down(Key::Launch);
        let (vx, vy) = (g.ball.vx, g.ball.vy);
        g.key_down(Key::Launch);
        assert_eq!((g.ball.vx, g.ball.vy), (vx, vy));
        assert_eq!(g.events.count(GameEvent::Launched), 1);
    }

    #[test]
    fn test_launch_ignored_after_round_won() {
        let mut g = game();
        g.state.round_won = true;
        g.key_down(Key::Launch);
        assert!(g.ball.on_paddle);
    }

    #[test]
    fn test_arrows_overwrite_dx() {
        let mut g = game();
        g.key_down(Key::Left);
        g.key_down(Key::Left);
        assert_eq!(g.paddle.dx, -6.0);
        g.key_down(Key::Right);
        assert_eq!(g.paddle.dx, 6.0);
    }

    #[test]
    fn test_any_arrow_release_stops_paddle() {
        let mut g = game();
        g.key_down(Key::Right);
        g.key_up(Key::Left);
        assert_eq!(g.paddle.dx, 0.0);
    }

    #[test]
    fn test_launch_release_keeps_dx() {
        let mut g = game();
        g.key_down(Key::Right);
        g.key_up(Key::Launch);
        assert_eq!(g.paddle.dx, 6.0);
    }

    #[test]
    fn test_restart_key_resets() {
        let mut g = game();
        g.state.blocks.clear();
        g.state.round_won = true;
        g.key_down(Key::Restart);
        assert!(!g.state.round_won);
        assert_eq!(g.state.blocks.len(), 50);
    }
}
