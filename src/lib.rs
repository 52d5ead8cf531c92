//! Breakout: a paddle, a ball, a wall of blocks and three lives.
//!
//! - `game`: the frame-by-frame simulation, independent of any frontend
//! - `config`: playfield dimensions and tuning

pub mod config;
pub mod game;

pub use config::Config;
pub use game::input::Key;
pub use game::state::GameEvent;
pub use game::Breakout;
