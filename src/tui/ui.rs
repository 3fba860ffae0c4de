//! Stateless UI rendering for N x N tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use nxn_tictactoe::{Board, Cell, Player, Position};

use super::app::App;

/// Width of one tile in terminal columns.
const TILE_WIDTH: u16 = 5;

/// Renders the whole screen.
pub fn draw<const N: usize>(frame: &mut Frame, app: &App<N>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + round
            Constraint::Min(N as u16 * 2 + 1), // Board
            Constraint::Length(5), // Score
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let session = app.session();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Tic Tac Toe {}x{}", N, N),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Round {}", session.score().current_round())),
        Line::from(format!(
            "{}'s turn",
            app.config().name_of(session.engine().turn())
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    draw_board(frame, chunks[1], session.engine().board(), app.cursor());

    let score = Paragraph::new(session.score().to_string())
        .alignment(Alignment::Center)
        .block(Block::default().title("Session").borders(Borders::ALL));
    frame.render_widget(score, chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_board<const N: usize>(
    frame: &mut Frame,
    area: Rect,
    board: &Board<N>,
    cursor: Position<N>,
) {
    let width = N as u16 * (TILE_WIDTH + 1) - 1;
    let height = N as u16 * 2 - 1;
    let board_area = center_rect(area, width, height);

    // Tile rows alternate with separator rows.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); N * 2 - 1])
        .split(board_area);

    for (i, row_area) in rows.iter().enumerate() {
        if i % 2 == 1 {
            let sep = Paragraph::new("─".repeat(width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, *row_area);
            continue;
        }
        draw_row(frame, *row_area, board, cursor, i / 2);
    }
}

fn draw_row<const N: usize>(
    frame: &mut Frame,
    area: Rect,
    board: &Board<N>,
    cursor: Position<N>,
    row: usize,
) {
    let constraints: Vec<_> = (0..N * 2 - 1)
        .map(|i| {
            if i % 2 == 0 {
                Constraint::Length(TILE_WIDTH)
            } else {
                Constraint::Length(1)
            }
        })
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, col_area) in cols.iter().enumerate() {
        if i % 2 == 1 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, *col_area);
            continue;
        }
        if let Ok(pos) = Position::new(row, i / 2) {
            draw_cell(frame, *col_area, board.get(pos), pos == cursor);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, highlighted: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => (' ', Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            let color = match player {
                Player::O => Color::Red,
                Player::X => Color::Blue,
            };
            (
                player.symbol(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
            .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
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
