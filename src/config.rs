/// Playfield dimensions and tuning. Everything is measured in world pixels,
/// independent of the terminal size the frontend scales into.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,

    pub block_rows: usize,
    pub block_cols: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub block_gap: f32,
    /// Top-left corner of the first block in the grid
    pub grid_origin: (f32, f32),

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Distance from the bottom edge of the screen to the paddle's top
    pub paddle_bottom_offset: f32,

    pub ball_radius: f32,
    pub ball_speed: f32,

    pub starting_lives: u32,
    /// Distance from a side or top wall at which the ball bounces
    pub wall_margin: f32,
    /// Horizontal velocity gained per pixel of offset from the paddle center
    pub deflection: f32,

    pub heart_size: f32,
    pub heart_gap: f32,
    pub heart_origin: (f32, f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            block_rows: 5,
            block_cols: 10,
            block_width: 60.0,
            block_height: 20.0,
            block_gap: 10.0,
            grid_origin: (35.0, 50.0),
            paddle_width: 100.0,
            paddle_height: 10.0,
            paddle_speed: 6.0,
            paddle_bottom_offset: 20.0,
            ball_radius: 10.0,
            ball_speed: 2.0,
            starting_lives: 3,
            wall_margin: 10.0,
            deflection: 0.1,
            heart_size: 35.0,
            heart_gap: 10.0,
            heart_origin: (20.0, 10.0),
        }
    }
}

impl Config {
    pub fn block_count(&self) -> usize {
        self.block_rows * self.block_cols
    }

    pub fn paddle_y(&self) -> f32 {
        self.screen_height - self.paddle_bottom_offset
    }
}
