use ratatui::prelude::*;

use breakout::game::geometry::Rectangle;
use breakout::Breakout;

const BG: Color = Color::Rgb(10, 10, 20);

const ROW_COLORS: [Color; 6] = [
    Color::Rgb(220, 50, 50),  // Red
    Color::Rgb(220, 130, 30), // Orange
    Color::Rgb(220, 200, 30), // Yellow
    Color::Rgb(50, 200, 50),  // Green
    Color::Rgb(50, 130, 220), // Blue
    Color::Rgb(150, 50, 220), // Purple
];

/// Character grid for the playfield, with the world scaled to `width`×`height` cells.
pub fn render_field(game: &Breakout, width: usize, height: usize) -> Vec<Line<'static>> {
    let w = width;
    let h = height;
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BG)); w]; h];
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let sx = w as f32 / game.config.screen_width;
    let sy = h as f32 / game.config.screen_height;
    let col = |x: f32| (x * sx).max(0.0) as usize;
    let row = |y: f32| (y * sy).max(0.0) as usize;

    // Hearts
    for heart in &game.state.hearts {
        let hx = col(heart.center_x());
        let hy = row(heart.center_y());
        if hx < w && hy < h {
            grid[hy][hx] = ('♥', Style::default().fg(Color::Rgb(255, 60, 90)).bg(BG).add_modifier(Modifier::BOLD));
        }
    }

    // Blocks
    for block in &game.state.blocks {
        let bx_start = col(block.left());
        let bx_end = col(block.left() + block.width()).max(bx_start + 1).min(w);
        let by = row(block.center_y());
        if by >= h {
            continue;
        }
        let color = ROW_COLORS[block.row % ROW_COLORS.len()];
        for bx in bx_start..bx_end {
            let ch = if bx == bx_start {
                '▐'
            } else if bx + 1 >= bx_end {
                '▌'
            } else {
                '█'
            };
            grid[by][bx] = (ch, Style::default().fg(color).bg(BG));
        }
    }

    // Paddle
    let paddle = &game.paddle;
    let px_start = col(paddle.left());
    let px_end = col(paddle.left() + paddle.width()).min(w);
    let py = row(paddle.top()).min(h - 1);
    for px in px_start..px_end {
        let ch = if px == px_start {
            '╣'
        } else if px + 1 >= px_end {
            '╠'
        } else {
            '═'
        };
        grid[py][px] = (ch, Style::default()
            .fg(Color::Rgb(180, 200, 255))
            .bg(Color::Rgb(30, 50, 120))
            .add_modifier(Modifier::BOLD));
    }

    // Ball, with a short trail while in flight
    let ball = &game.ball;
    let bx = col(ball.x);
    let by = row(ball.y);
    if bx < w && by < h {
        if !ball.on_paddle {
            let tx = col(ball.x - ball.vx * 8.0);
            let ty = row(ball.y - ball.vy * 8.0);
            if tx < w && ty < h && (tx != bx || ty != by) && grid[ty][tx].0 == ' ' {
                grid[ty][tx] = ('·', Style::default().fg(Color::Rgb(100, 100, 120)).bg(BG));
            }
        }
        grid[by][bx] = ('●', Style::default()
            .fg(Color::Rgb(255, 255, 255))
            .bg(BG)
            .add_modifier(Modifier::BOLD));
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
