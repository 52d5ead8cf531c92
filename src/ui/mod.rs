mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

const HELP_KEY: Color = Color::Rgb(80, 200, 255);
const HELP_TEXT: Color = Color::DarkGray;

pub fn render(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" 🧱 Breakout ")
        .title_style(Style::default().fg(Color::Rgb(255, 100, 100)).add_modifier(Modifier::BOLD));

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Field
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    render_status(frame, app, chunks[0]);

    let lines = field::render_field(&app.game, chunks[1].width as usize, chunks[1].height as usize);
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    render_help(frame, app, chunks[2]);

    let game = &app.game;
    if game.is_game_over() {
        render_banner(frame, chunks[1], &["Game Over!", "Press R to Restart"], Color::Rgb(255, 90, 90));
    } else if game.is_round_won() {
        render_banner(
            frame,
            chunks[1],
            &["Round Win!", "CONGRATULATIONS!", "Press R to Restart"],
            Color::Rgb(80, 220, 120),
        );
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut spans = vec![
        Span::styled(
            format!(" Lives: {} ", "♥ ".repeat(game.state.lives as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Blocks: {}/{} ", game.state.blocks.len(), game.config.block_count()),
            Style::default().fg(Color::Green),
        ),
    ];
    if app.muted {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("🔇 Muted", Style::default().fg(Color::Gray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut entries: Vec<(&str, &str)> = vec![("←→", "Move")];
    if !app.release_events {
        entries.push(("↓", "Stop"));
    }
    if app.game.ball.on_paddle && !app.game.state.is_paused() {
        entries.push(("SPACE", "Launch"));
    }
    entries.extend([("R", "Restart"), ("M", "Mute"), ("Esc", "Quit")]);

    let mut spans = Vec::new();
    for (i, (key, label)) in entries.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))));
        }
        let key_style = if key == "SPACE" {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HELP_KEY)
        };
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(HELP_TEXT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centered text overlay on top of the field
fn render_banner(frame: &mut Frame, area: Rect, text: &[&str], color: Color) {
    let widest = text.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let w = (widest + 6).min(area.width);
    let h = (text.len() as u16 + 4).min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    let popup = Rect::new(x, y, w, h);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));

    let mut lines = vec![Line::from("")];
    lines.extend(text.iter().map(|l| {
        Line::from(Span::styled(*l, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)))
    }));

    let p = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(p, popup);
}
