//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and status bar. The keyboard geometry
//! is computed by [`keyboard_keys`] for both drawing and mouse hit-testing.

use super::app::{App, MessageStyle};
use crate::core::{KEY_ROWS, Tier};
use crate::game::{GameConfig, GameStatus, RowView, VirtualKey};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const WIDE_KEY_WIDTH: u16 = 7;

/// Screen regions
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    pub header: Rect,
    pub board: Rect,
    pub messages: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the frame into its regions
#[must_use]
pub fn areas(frame: Rect, config: &GameConfig) -> Areas {
    let rows = u16::try_from(config.max_attempts).unwrap_or(u16::MAX);
    let board_height = TILE_HEIGHT.saturating_mul(rows).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Header
            Constraint::Min(board_height),          // Board + messages
            Constraint::Length(TILE_HEIGHT * 3 + 2), // Keyboard
            Constraint::Length(1),                  // Status bar
        ])
        .split(frame);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    Areas {
        header: chunks[0],
        board: body[0],
        messages: body[1],
        keyboard: chunks[2],
        status: chunks[3],
    }
}

/// On-screen keyboard rows: three letter rows, Enter and ⌫ around the last
fn virtual_rows() -> Vec<Vec<VirtualKey>> {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let letters = row.chars().map(VirtualKey::Letter);
            if i == KEY_ROWS.len() - 1 {
                std::iter::once(VirtualKey::Enter)
                    .chain(letters)
                    .chain(std::iter::once(VirtualKey::Backspace))
                    .collect()
            } else {
                letters.collect()
            }
        })
        .collect()
}

/// Key rectangles inside the keyboard region
#[must_use]
pub fn keyboard_keys(area: Rect) -> Vec<(Rect, VirtualKey)> {
    let inner = keyboard_block().inner(area);
    let rows = virtual_rows();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); rows.len()])
        .split(inner);

    rows.iter()
        .zip(row_areas.iter())
        .flat_map(|(keys, &row_area)| {
            let widths = keys.iter().map(|key| match key {
                VirtualKey::Enter => Constraint::Length(WIDE_KEY_WIDTH),
                _ => Constraint::Length(TILE_WIDTH),
            });
            let cells = Layout::horizontal(widths)
                .flex(Flex::Center)
                .split(row_area);
            cells.iter().copied().zip(keys.iter().copied()).collect::<Vec<_>>()
        })
        .collect()
}

/// The on-screen key under a terminal cell, if any
#[must_use]
pub fn key_at(frame: Rect, config: &GameConfig, column: u16, row: u16) -> Option<VirtualKey> {
    let keyboard = areas(frame, config).keyboard;
    let position = Position::new(column, row);
    keyboard_keys(keyboard)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, key)| key)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let areas = areas(f.area(), app.session.config());

    render_header(f, areas.header);
    render_board(f, app, areas.board);
    render_messages(f, app, areas.messages);
    render_keyboard(f, app, areas.keyboard);
    render_status(f, app, areas.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

/// Colors for a tile or key of the given tier
fn tier_style(tier: Tier) -> Style {
    match tier {
        Tier::Unused => Style::default().fg(Color::White),
        Tier::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        Tier::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Tier::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_tile(f: &mut Frame, area: Rect, label: &str, tier: Tier, highlighted: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if highlighted {
            BorderType::Double
        } else {
            BorderType::Plain
        })
        .border_style(if highlighted {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let tile = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(tier_style(tier))
        .block(block);
    f.render_widget(tile, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = app.session.rows();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); rows.len()])
        .flex(Flex::Center)
        .split(inner);

    for (row, &row_area) in rows.iter().zip(row_areas.iter()) {
        render_row(f, row, row_area);
    }
}

fn render_row(f: &mut Frame, row: &RowView, area: Rect) {
    let cells = Layout::horizontal(vec![Constraint::Length(TILE_WIDTH); row.letters.len()])
        .flex(Flex::Center)
        .split(area);

    for ((letter, &tier), &cell) in row.letters.iter().zip(&row.tiers).zip(cells.iter()) {
        let label = letter.map_or_else(String::new, |c| c.to_ascii_uppercase().to_string());
        render_tile(f, cell, &label, tier, row.active);
    }
}

fn keyboard_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" Keyboard ")
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(keyboard_block(), area);

    let keyboard = app.session.keyboard();
    for (rect, key) in keyboard_keys(area) {
        let tier = match key {
            VirtualKey::Letter(ch) => keyboard.tier(ch as u8),
            VirtualKey::Enter | VirtualKey::Backspace => Tier::Unused,
        };
        render_tile(f, rect, &key.label(), tier, false);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(18),
            Constraint::Percentage(22),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let (word_text, word_color) = if app.session.is_ready() {
        ("Word: ready", Color::Green)
    } else {
        ("Word: choosing…", Color::Yellow)
    };
    let word = Paragraph::new(word_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(word_color));
    f.render_widget(word, chunks[0]);

    let (dict_text, dict_color) = if app.accept_all {
        ("Dictionary: off", Color::DarkGray)
    } else if app.dictionary_ready() {
        ("Dictionary: ready", Color::Green)
    } else {
        ("Dictionary: loading…", Color::Yellow)
    };
    let dict = Paragraph::new(dict_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(dict_color));
    f.render_widget(dict, chunks[1]);

    let distribution: Vec<String> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(guesses, count)| format!("{guesses}:{count}"))
        .collect();
    let stats_text = Line::from(vec![
        Span::raw(format!(
            "Games: {} | Wins: {} ({:.0}%)",
            app.stats.total_games,
            app.stats.games_won,
            app.stats.win_rate()
        )),
        Span::styled(
            if distribution.is_empty() {
                String::new()
            } else {
                format!(" | {}", distribution.join(" "))
            },
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = if app.session.status() == GameStatus::InProgress {
        "Enter: Submit | Ctrl-R: New | Esc: Quit"
    } else {
        "n: New Game | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
