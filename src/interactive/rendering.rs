//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::game::{KEY_ROWS, Mode, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.config.mode {
        Mode::Normal => "🟩 WORDLE 🟨",
        Mode::Hard => "🟩 WORDLE 🟨  (hard mode)",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn feedback_style(feedback: LetterFeedback) -> Style {
    let bg = match feedback {
        LetterFeedback::Exact => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let empty = Style::default().fg(Color::DarkGray);
    // Two lines per row inside the border; never draw more rows than fit
    let visible = usize::from(area.height.saturating_sub(2) / 2).max(1);
    let rows = app.config.max_attempts.min(visible);
    let in_play = history.len() + usize::from(app.input_mode == InputMode::Guessing);
    let first = in_play.min(app.config.max_attempts).saturating_sub(rows);
    let mut lines = Vec::with_capacity(rows * 2);

    for row in first..first + rows {
        let spans: Vec<Span> = if let Some((word, result)) = history.get(row) {
            word.chars()
                .iter()
                .zip(result.letters())
                .flat_map(|(&letter, &feedback)| tile(char::from(letter), feedback_style(feedback)))
                .collect()
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| match typed.get(i) {
                    Some(&c) => tile(c, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    None => tile('_', empty),
                })
                .collect()
        } else {
            (0..WORD_LENGTH).flat_map(|_| tile('·', empty)).collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let style = keyboard
                        .state(c)
                        .map_or_else(|| Style::default().fg(Color::White), feedback_style);
                    [
                        Span::styled(c.to_ascii_uppercase().to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = match app.input_mode {
        InputMode::Guessing => (
            format!(" Guess #{} ", app.session.attempts() + 1),
            format!("> {}", app.input_buffer.to_uppercase()),
        ),
        InputMode::GameOver => (
            " Game over ".to_string(),
            "n: new game   q: quit".to_string(),
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = match app.session.status() {
        Status::Active => Span::styled(
            format!("{} left", app.session.remaining_attempts()),
            Style::default().fg(Color::Cyan),
        ),
        Status::Won => Span::styled("won", Style::default().fg(Color::Green)),
        Status::Lost => Span::styled("lost", Style::default().fg(Color::Red)),
    };

    let stats = &app.stats;
    let line = Line::from(vec![
        state,
        Span::raw(format!(
            "  │  played {}  won {}  streak {}  │  Enter: submit  Esc: quit",
            stats.games_played, stats.games_won, stats.current_streak
        )),
    ]);

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}
