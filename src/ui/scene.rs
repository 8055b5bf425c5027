//! UI rendering for the game: playfield, status bar, and overlays.
//!
//! World coordinates are scaled onto whatever terminal cell grid is
//! available; the session is read-only here.

use crate::engine::{GameSession, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole game scene into `area`.
pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" flap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], session);
    render_status_bar(frame, chunks[1], session);

    match session.phase() {
        Phase::Idle => render_idle_overlay(frame, chunks[0]),
        Phase::Over => render_game_over_overlay(frame, chunks[0], session),
        Phase::Running => {}
    }
}

/// Render the playfield: bird, pipes, and the ground band.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = session.config();
    let world = session.world();

    // World units per terminal cell
    let x_scale = config.playfield_width / width as f64;
    let y_scale = config.playfield_height / height as f64;

    let bird_col = ((config.bird_x / x_scale).round() as usize).min(width - 1);
    let bird_row = ((world.bird_y / y_scale).round().max(0.0) as usize).min(height - 1);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let world_y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let world_x = (col as f64 + 0.5) * x_scale;

            if row == bird_row && col == bird_col {
                let bird_char = if world.bird_velocity < -0.5 {
                    "▲"
                } else if world.bird_velocity > 1.0 {
                    "▼"
                } else {
                    "►"
                };
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            if world_y >= config.floor_y() {
                spans.push(Span::styled("▒", Style::default().fg(Color::DarkGray)));
                continue;
            }

            let in_pipe = world.pipes.iter().any(|p| {
                world_x >= p.x
                    && world_x < p.x + config.pipe_width
                    && (world_y < p.gap_top || world_y >= p.gap_top + config.gap_height)
            });
            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Score, best score, and key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, session: &GameSession) {
    let hint = match session.phase() {
        Phase::Idle => "Space/Up/click: flap · q: quit",
        Phase::Running => "Space/Up/click: flap · r: reset · q: quit",
        Phase::Over => "Space: play again · r: reset · q: quit",
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Score: {}", session.score()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Best: {}", session.best_score()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_idle_overlay(frame: &mut Frame, area: Rect) {
    let overlay = centered_box(area, 28, 3);
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new("Press Space to start").alignment(Alignment::Center),
        inner,
    );
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, session: &GameSession) {
    let overlay = centered_box(area, 30, 6);
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(format!("Score: {}", session.score())),
        Line::from(format!("Best:  {}", session.best_score())),
        Line::from(Span::styled(
            "Space to fly again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// A box of at most `width` x `height` cells centered in `area`.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
