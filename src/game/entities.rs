use crate::config::Config;

use super::geometry::Rectangle;

/// The ball. `(x, y)` is its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    /// Launch speed
    pub speed: f32,
    /// Carried by the paddle: no velocity, follows the paddle until launched
    pub on_paddle: bool,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.screen_width / 2.0,
            y: config.paddle_y() - config.ball_radius,
            vx: 0.0,
            vy: 0.0,
            radius: config.ball_radius,
            speed: config.ball_speed,
            on_paddle: true,
        }
    }

    /// Put the ball back on top of the paddle, at rest.
    pub fn serve(&mut self, paddle: &Paddle) {
        self.x = paddle.center_x();
        self.y = paddle.y - self.radius;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_paddle = true;
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }
}

impl Rectangle for Ball {
    fn left(&self) -> f32 {
        self.x - self.radius
    }
    fn top(&self) -> f32 {
        self.y - self.radius
    }
    fn width(&self) -> f32 {
        self.radius * 2.0
    }
    fn height(&self) -> f32 {
        self.radius * 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    /// Horizontal intent: -speed, 0 or +speed
    pub dx: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(config: &Config) -> Self {
        Self {
            x: (config.screen_width - config.paddle_width) / 2.0,
            y: config.paddle_y(),
            dx: 0.0,
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    /// Apply `dx` and keep the paddle on screen.
    pub fn advance(&mut self, screen_width: f32) {
        self.x = (self.x + self.dx).clamp(0.0, screen_width - self.width);
    }
}

impl Rectangle for Paddle {
    fn left(&self) -> f32 {
        self.x
    }
    fn top(&self) -> f32 {
        self.y
    }
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub row: usize,
}

impl Rectangle for Block {
    fn left(&self) -> f32 {
        self.x
    }
    fn top(&self) -> f32 {
        self.y
    }
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
}

/// One remaining life
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Rectangle for Heart {
    fn left(&self) -> f32 {
        self.x
    }
    fn top(&self) -> f32 {
        self.y
    }
    fn width(&self) -> f32 {
        self.size
    }
    fn height(&self) -> f32 {
        self.size
    }
}

/// Full block grid, row by row
pub fn block_grid(config: &Config) -> Vec<Block> {
    let (ox, oy) = config.grid_origin;
    let mut blocks = Vec::with_capacity(config.block_count());
    for row in 0..config.block_rows {
        for col in 0..config.block_cols {
            blocks.push(Block {
                x: col as f32 * (config.block_width + config.block_gap) + ox,
                y: row as f32 * (config.block_height + config.block_gap) + oy,
                width: config.block_width,
                height: config.block_height,
                row,
            });
        }
    }
    blocks
}

/// One heart per starting life, left to right
pub fn heart_row(config: &Config) -> Vec<Heart> {
    let (ox, oy) = config.heart_origin;
    (0..config.starting_lives)
        .map(|i| Heart {
            x: i as f32 * (config.heart_gap + config.heart_size) + ox,
            y: oy,
            size: config.heart_size,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_starts_on_paddle() {
        let config = Config::default();
        let ball = Ball::new(&config);
        let paddle = Paddle::new(&config);
        assert!(ball.on_paddle);
        assert_eq!(ball.x, paddle.center_x());
        assert_eq!(ball.bottom(), paddle.y);
    }

    #[test]
    fn test_serve_resets_velocity() {
        let config = Config::default();
        let mut ball = Ball::new(&config);
        let mut paddle = Paddle::new(&config);
        paddle.x = 100.0;
        ball.x = 20.0;
        ball.y = 300.0;
        ball.vx = 1.5;
        ball.vy = -2.0;
        ball.on_paddle = false;

        ball.serve(&paddle);
        assert_eq!((ball.x, ball.y), (150.0, 570.0));
        assert_eq!((ball.vx, ball.vy), (0.0, 0.0));
        assert!(ball.on_paddle);
    }

    #[test]
    fn test_paddle_clamped_to_screen() {
        let config = Config::default();
        let mut paddle = Paddle::new(&config);
        paddle.x = 2.0;
        paddle.dx = -6.0;
        paddle.advance(config.screen_width);
        assert_eq!(paddle.x, 0.0);

        paddle.x = 698.0;
        paddle.dx = 6.0;
        paddle.advance(config.screen_width);
        assert_eq!(paddle.x, 700.0);
    }

    #[test]
    fn test_block_grid_layout() {
        let config = Config::default();
        let blocks = block_grid(&config);
        assert_eq!(blocks.len(), 50);
        assert_eq!((blocks[0].x, blocks[0].y), (35.0, 50.0));
        // Second column, second row
        assert_eq!((blocks[11].x, blocks[11].y), (105.0, 80.0));
        assert_eq!(blocks[49].row, 4);
    }

    #[test]
    fn test_heart_row_layout() {
        let hearts = heart_row(&Config::default());
        let xs: Vec<f32> = hearts.iter().map(|h| h.x).collect();
        assert_eq!(xs, vec![20.0, 65.0, 110.0]);
    }
}
