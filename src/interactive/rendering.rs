//! TUI rendering with ratatui
//!
//! Puzzle entry on the left, solutions and session info on the right.

use super::app::{App, MessageStyle};
use crate::output::formatters::{format_duration, puzzle_box};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Puzzle and solutions
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTER BOXED SOLVER - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Puzzle box
            Constraint::Min(5),    // Solutions
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_solutions(f, app, chunks[1]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let labels = app.sides.each_ref().map(String::as_str);
    let lines: Vec<Line> = puzzle_box(labels)
        .into_iter()
        .map(|line| {
            Line::styled(
                line,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Puzzle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let block = |title: String| {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green))
    };

    let Some(result) = &app.result else {
        let paragraph = Paragraph::new("Nothing solved yet").block(block(" Solutions ".into()));
        f.render_widget(paragraph, area);
        return;
    };

    if result.lines.is_empty() {
        let paragraph = Paragraph::new("No two-word solutions").block(block(" Solutions ".into()));
        f.render_widget(paragraph, area);
        return;
    }

    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = result
        .lines
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(visible)
        .map(|(i, line)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(line.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block(format!(
        " Solutions {}-{} of {} ",
        app.scroll + 1,
        (app.scroll + visible).min(result.lines.len()),
        result.lines.len()
    )));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Playable words gauge
            Constraint::Length(5),      // Timings
            Constraint::Percentage(50), // History
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_playable(f, app, chunks[0]);
    render_timings(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_playable(f: &mut Frame, app: &App, area: Rect) {
    let (playable, total) = app
        .result
        .as_ref()
        .map_or((0, app.dictionary.len()), |r| (r.playable_words, r.dictionary_words));
    let pct = if total > 0 {
        (playable * 100 / total).min(100) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Playable Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct)
        .label(format!("{playable}/{total}"));

    f.render_widget(gauge, area);
}

fn render_timings(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.result {
        Some(result) => vec![
            Line::from(format!("Cull:      {}", format_duration(result.cull_time))),
            Line::from(format!("Solve:     {}", format_duration(result.solve_time))),
            Line::from(format!("Pairs:     {}", result.raw_solutions)),
        ],
        None => vec![Line::from("No timings yet")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Timing ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|entry| {
            let style = if entry.solutions > 0 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format!("{}  {} solutions", entry.puzzle, entry.solutions)).style(style)
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::with_capacity(app.sides.len() * 2);
    for (i, side) in app.sides.iter().enumerate() {
        let text = format!("{side:_<3}");
        let style = if i == app.active_side {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("   "));
    }

    let color = if app.is_complete() {
        Color::Green
    } else {
        Color::Yellow
    };
    let input = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Enter Sides (a-z) | TAB/Space: next side | Enter: solve ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Side: {}", app.active_side + 1);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Puzzles: {} | Solved: {:.0}%",
        app.stats.puzzles,
        if app.stats.puzzles > 0 {
            app.stats.solved as f64 / app.stats.puzzles as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words: {}", app.dictionary.len());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help = Paragraph::new("Esc: Clear/Quit | ↑↓ PgUp PgDn: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
