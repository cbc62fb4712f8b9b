//! TUI application state and logic

use crate::commands::solve::{SolveResult, parse_puzzle_args, solve_puzzle};
use crate::core::{LETTERS_PER_SIDE, SIDE_COUNT};
use crate::dictionary::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Puzzles kept in the history panel
const HISTORY_LEN: usize = 8;

/// Messages kept in the messages panel
const MESSAGE_LEN: usize = 5;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub sides: [String; SIDE_COUNT],
    pub active_side: usize,
    pub result: Option<SolveResult>,
    pub scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub puzzle: String,
    pub solutions: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles: usize,
    pub solved: usize,
    pub total_solutions: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            sides: Default::default(),
            active_side: 0,
            result: None,
            scroll: 0,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: format!("Loaded {} playable words.", dictionary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type the four sides, three letters each, then Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// True when every side holds three letters
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sides.iter().all(|side| side.len() == LETTERS_PER_SIDE)
    }

    /// Type a letter into the active side, moving on when it fills up
    ///
    /// Letters typed onto a full side are ignored.
    pub fn push_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() || self.sides[self.active_side].len() >= LETTERS_PER_SIDE {
            return;
        }
        self.sides[self.active_side].push(c.to_ascii_lowercase());
        if self.sides[self.active_side].len() == LETTERS_PER_SIDE
            && self.active_side + 1 < SIDE_COUNT
        {
            self.active_side += 1;
        }
    }

    /// Delete the last letter, stepping back a side when this one is empty
    pub fn backspace(&mut self) {
        if self.sides[self.active_side].is_empty() && self.active_side > 0 {
            self.active_side -= 1;
        }
        self.sides[self.active_side].pop();
    }

    pub fn next_side(&mut self) {
        self.active_side = (self.active_side + 1) % SIDE_COUNT;
    }

    pub fn prev_side(&mut self) {
        self.active_side = (self.active_side + SIDE_COUNT - 1) % SIDE_COUNT;
    }

    /// Clear the puzzle being typed
    pub fn clear(&mut self) {
        self.sides = Default::default();
        self.active_side = 0;
    }

    /// Solve the typed puzzle and keep the result for browsing
    pub fn solve(&mut self) {
        if !self.is_complete() {
            self.add_message("Every side needs three letters.", MessageStyle::Error);
            return;
        }

        let puzzle = self.sides.join(" ");
        let solved = parse_puzzle_args(&[puzzle.clone()])
            .and_then(|(sides, labels)| solve_puzzle(self.dictionary, &sides, labels));

        match solved {
            Ok(result) => {
                let count = result.lines.len();
                self.stats.puzzles += 1;
                self.stats.total_solutions += count;
                if count > 0 {
                    self.stats.solved += 1;
                    self.add_message(
                        &format!("{puzzle}: {count} solutions"),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(&format!("{puzzle}: no solutions"), MessageStyle::Error);
                }

                self.history.insert(
                    0,
                    HistoryEntry {
                        puzzle,
                        solutions: count,
                    },
                );
                self.history.truncate(HISTORY_LEN);
                self.result = Some(result);
                self.scroll = 0;
            }
            Err(e) => self.add_message(&e, MessageStyle::Error),
        }
    }

    /// Move the solution list by `delta` lines, clamped to the list
    pub fn scroll_by(&mut self, delta: isize) {
        let len = self.result.as_ref().map_or(0, |r| r.lines.len());
        let max = len.saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        let excess = self.messages.len().saturating_sub(MESSAGE_LEN);
        self.messages.drain(..excess);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    if app.sides.iter().all(String::is_empty) {
                        app.should_quit = true;
                    } else {
                        app.clear();
                    }
                }
                KeyCode::Char(' ') | KeyCode::Tab | KeyCode::Right => app.next_side(),
                KeyCode::BackTab | KeyCode::Left => app.prev_side(),
                KeyCode::Char(c) => app.push_letter(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter => app.solve(),
                KeyCode::Up => app.scroll_by(-1),
                KeyCode::Down => app.scroll_by(1),
                KeyCode::PageUp => app.scroll_by(-10),
                KeyCode::PageDown => app.scroll_by(10),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::test_dictionary;

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_letter(c);
        }
    }

    #[test]
    fn typing_fills_sides_in_order() {
        let dict = test_dictionary();
        let mut app = App::new(&dict);
        type_str(&mut app, "BTNakdoesmir");
        assert_eq!(app.sides, ["btn", "akd", "oes", "mir"]);
        assert!(app.is_complete());

        // extra letters are ignored once the puzzle is full
        app.push_letter('x');
        assert_eq!(app.sides[3], "mir");
    }

    #[test]
    fn typing_on_full_side_is_ignored() {
        let dict = test_dictionary();
        let mut app = App::new(&dict);
        type_str(&mut app, "btnakdoesmir");

        app.next_side();
        assert_eq!(app.active_side, 0);
        app.push_letter('x');
        app.prev_side();
        app.prev_side();
        app.push_letter('y');

        assert_eq!(app.sides, ["btn", "akd", "oes", "mir"]);
        assert!(app.sides.iter().all(|side| side.len() <= LETTERS_PER_SIDE));
    }

    #[test]
    fn messages_are_capped() {
        let dict = test_dictionary();
        let mut app = App::new(&dict);
        for i in 0..8 {
            app.add_message(&format!("note {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LEN);
        assert_eq!(app.messages[0].text, "note 3");
        assert_eq!(app.messages[MESSAGE_LEN - 1].text, "note 7");
    }

    #[test]
    fn backspace_steps_back_across_sides() {
        let dict = test_dictionary();
        let mut app = App::new(&dict);
        type_str(&mut app, "btna");
        assert_eq!(app.active_side, 1);
        app.backspace();
        app.backspace();
        assert_eq!(app.sides, ["bt", "", "", ""]);
        assert_eq!(app.active_side, 0);
    }

    #[test]
    fn solve_records_result_and_history() {
        let dict = test_dictionary();
        let mut app = App::new(&dict);
        type_str(&mut app, "btnakdoesmir");
        app.solve();

        let result = app.result.as_ref().unwrap();
        assert_eq!(result.lines, vec!["bearskin -> nematode"]);
        assert_eq!(app.history[0].puzzle, "btn akd oes mir");
        assert_eq!(app.stats.solved, 1);
    }

    #[test]
    fn incomplete_or_invalid_puzzle_reports_error() {
        let dict = test_dictionary();
        let mut app = App::new(&dict);
        type_str(&mut app, "btnakd");
        app.solve();
        assert!(app.result.is_none());

        type_str(&mut app, "oesmib");
        app.solve();
        assert!(app.result.is_none());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn scroll_is_clamped() {
        let dict = test_dictionary();
        let mut app = App::new(&dict);
        app.scroll_by(5);
        assert_eq!(app.scroll, 0);

        type_str(&mut app, "btnakdoesmir");
        app.solve();
        app.scroll_by(10);
        assert_eq!(app.scroll, 0);
        app.scroll_by(-3);
        assert_eq!(app.scroll, 0);
    }
}
