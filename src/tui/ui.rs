//! Stateless rendering of the layout.

use crate::layout::{ElementRole, Layout as Page};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::Coord;

const PLAYER_COLORS: [Color; 6] = [
    Color::Red,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::LightGreen,
];

/// Draws the whole page.
pub fn draw(frame: &mut Frame, page: &Page) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Counter + button
            Constraint::Length(3), // Status
            Constraint::Min(3),    // Board
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = page
        .elements()
        .iter()
        .find(|e| e.role == ElementRole::Head)
        .and_then(|e| e.text)
        .unwrap_or_default();
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_controls(frame, chunks[1], page);

    let status = Paragraph::new(page.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_board(frame, chunks[3], page);

    let help = Paragraph::new("arrows: move  enter: mark  s: start/reset  0-9: counter  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_controls(frame: &mut Frame, area: Rect, page: &Page) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let placeholder = page
        .elements()
        .iter()
        .find(|e| e.role == ElementRole::Count)
        .and_then(|e| e.placeholder)
        .unwrap_or_default();
    let counter = if page.counter().text().is_empty() {
        Span::styled(
            format!("{} ({})", placeholder, page.counter().value()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(page.counter().text().to_string())
    };
    let counter = Paragraph::new(Line::from(counter))
        .block(Block::default().borders(Borders::ALL).title("Counter"));
    frame.render_widget(counter, cols[0]);

    let button = Paragraph::new(page.button_label())
        .style(Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, cols[1]);
}

fn draw_board(frame: &mut Frame, area: Rect, page: &Page) {
    let board = page.board();
    let size = board.size();
    if size == 0 {
        return;
    }

    let mut lines = Vec::with_capacity(size * 2);
    for row in 0..size {
        if row > 0 {
            let separator = vec!["───"; size].join("┼");
            lines.push(Line::from(Span::styled(
                separator,
                Style::default().fg(Color::DarkGray),
            )));
        }

        let mut spans = Vec::with_capacity(size * 2);
        for col in 0..size {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(draw_cell(page, Coord::new(row, col)));
        }
        lines.push(Line::from(spans));
    }

    let width = (size * 4) as u16;
    let height = (size * 2) as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, center_rect(area, width, height));
}

fn draw_cell(page: &Page, coord: Coord) -> Span<'static> {
    let board = page.board();
    let (symbol, base_style) = match board.label(coord) {
        None => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Some(label) => {
            let index = page
                .engine()
                .players()
                .iter()
                .position(|l| l == label)
                .unwrap_or_default();
            let color = PLAYER_COLORS[index % PLAYER_COLORS.len()];
            (
                format!("{:^3}", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if coord == page.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if board.is_highlighted(coord) {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
