//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use tateti_engine::{Board, Mark, MoveSelector, Position, Square};

use super::app::{App, Mode};
use crate::leaderboard::ScoreStore;

const HELP: &str = "s: Start | r: Restart | Arrows + Enter or 1-9: Play | q: Quit";

/// Renders the whole screen.
pub fn draw<S: MoveSelector, T: ScoreStore>(frame: &mut Frame, app: &App<S, T>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + leaderboard
            Constraint::Length(3), // Status + time
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tateti - Beat the Clock")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app.session().board(), app.cursor());
    draw_leaderboard(frame, body[1], &app.leaderboard().rows());
    draw_status(frame, chunks[2], app.session().status(), app.clock_label());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Mode::NameEntry { name, .. } = app.mode() {
        draw_name_prompt(frame, area, name);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::at(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let square = board.get(pos);

    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let symbol = format!(" {:^1} ", square.symbol());
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_leaderboard(frame: &mut Frame, area: Rect, rows: &[String]) {
    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new("No times yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        rows.iter().map(|row| ListItem::new(row.as_str())).collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Best Times"),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, area: Rect, status: &str, clock: &str) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(area);

    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, cols[0]);

    let time = Paragraph::new(format!("Time: {}", clock))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(time, cols[1]);
}

fn draw_name_prompt(frame: &mut Frame, area: Rect, name: &str) {
    let popup = center_rect(area, 44, 5);
    frame.render_widget(Clear, popup);

    let prompt = Paragraph::new(vec![
        Line::from("You won! Enter your name for the record:"),
        Line::from(Span::styled(
            format!("{}_", name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter: save | Esc: skip",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("New Best Time?"));
    frame.render_widget(prompt, popup);
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

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use tateti_engine::HeuristicSelector;

    use super::*;
    use crate::leaderboard::JsonFileStore;
    use crate::session::GameSession;

    fn screen_text<S: MoveSelector, T: ScoreStore>(app: &App<S, T>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_time_and_empty_leaderboard() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            GameSession::new(HeuristicSelector::default()),
            JsonFileStore::new(dir.path().join("scores.json")),
        );
        let text = screen_text(&app);
        assert!(text.contains("Time: 00:00"));
        assert!(text.contains("No times yet"));
        assert!(text.contains("Best Times"));
    }
}
