use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use breakout::{Breakout, Config, GameEvent, Key};

pub struct App {
    pub should_quit: bool,
    pub game: Breakout,
    pub muted: bool,
    /// The terminal reports key releases. Without them the paddle only stops
    /// on the Down key.
    pub release_events: bool,
    // Impact sounds waiting to be played
    bells: usize,
}

impl App {
    pub fn new(release_events: bool) -> Self {
        Self {
            should_quit: false,
            game: Breakout::new(Config::default()),
            muted: false,
            release_events,
            bells: 0,
        }
    }

    pub fn on_tick(&mut self) {
        self.game.update();
        for event in self.game.events.drain() {
            match event {
                GameEvent::Impact => {
                    if !self.muted {
                        self.bells += 1;
                    }
                }
                GameEvent::LifeLost { remaining } => {
                    log::debug!("Heart removed, {} left", remaining);
                }
                GameEvent::GameOver | GameEvent::RoundWon | GameEvent::Launched | GameEvent::Reset => {}
            }
        }
    }

    /// Number of impact sounds since the last call
    pub fn take_bells(&mut self) -> usize {
        std::mem::take(&mut self.bells)
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.kind {
            KeyEventKind::Press => self.on_press(key.code),
            KeyEventKind::Repeat => {
                // Only the arrows care about auto-repeat
                if let Some(k @ (Key::Left | Key::Right)) = game_key(key.code) {
                    self.game.key_down(k);
                }
            }
            KeyEventKind::Release => {
                if let Some(k) = game_key(key.code) {
                    self.game.key_up(k);
                }
            }
        }
    }

    fn on_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.muted = !self.muted;
                log::debug!("Sound {}", if self.muted { "off" } else { "on" });
            }
            KeyCode::Down => self.game.key_up(Key::Left),
            _ => {
                if let Some(k) = game_key(code) {
                    self.game.key_down(k);
                }
            }
        }
    }
}

fn game_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Launch),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),
        _ => None,
    }
}
