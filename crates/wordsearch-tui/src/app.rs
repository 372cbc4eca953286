use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::warn;
use std::time::Duration;
use wordsearch_core::{ClickOutcome, GameSession, Placement, Position};

/// Width of one grid cell on screen: " X "
pub const CELL_WIDTH: u16 = 3;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    /// Current game
    pub session: GameSession,
    /// Keyboard cursor
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    dark_theme: bool,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Last hint, highlighted until the next click
    pub hint: Option<Placement>,
    /// Seed the generator was started with
    pub seed: u64,
    /// Screen cell of the grid's top-left border corner, set while rendering
    pub grid_origin: (u16, u16),
}

impl App {
    pub fn new(session: GameSession, seed: u64) -> Self {
        let center = session.grid().size() / 2;
        Self {
            session,
            cursor: Position::new(center, center),
            theme: Theme::dark(),
            dark_theme: true,
            message: None,
            message_timer: 0,
            hint: None,
            seed,
            grid_origin: (0, 0),
        }
    }

    pub fn get_tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Select the cell under the cursor
            KeyCode::Char(' ') | KeyCode::Enter => self.click(self.cursor),

            KeyCode::Esc => {
                if self.session.clear_chain() {
                    self.show_message("Selection cleared");
                }
            }

            KeyCode::Char('?') => self.show_hint(),

            KeyCode::Char('n') => self.next_level(),

            KeyCode::Char('r') => match self.session.restart_level() {
                Ok(()) => {
                    self.hint = None;
                    self.show_message("New grid for this level");
                }
                Err(e) => self.show_error(&e.to_string()),
            },

            KeyCode::Char('t') => {
                self.dark_theme = !self.dark_theme;
                self.theme = if self.dark_theme {
                    Theme::dark()
                } else {
                    Theme::light()
                };
            }

            _ => {}
        }
        AppAction::Continue
    }

    /// Handle a mouse event; left button presses on the grid click a cell
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            if let Some(pos) = self.cell_at(event.column, event.row) {
                self.cursor = pos;
                self.click(pos);
            }
        }
    }

    /// Map a terminal cell to a grid position
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let (x, y) = self.grid_origin;
        if column <= x || row <= y {
            return None;
        }
        let pos = Position::new(
            (row - y - 1) as usize,
            ((column - x - 1) / CELL_WIDTH) as usize,
        );
        self.session.grid().contains(pos).then_some(pos)
    }

    /// Send a click to the session and report what happened
    pub fn click(&mut self, pos: Position) {
        self.hint = None;
        match self.session.click(pos) {
            ClickOutcome::WordFound { word, .. } => {
                let left = self.session.remaining_words().count();
                self.show_message(&format!(
                    "Found {}! {} {} to go",
                    word,
                    left,
                    if left == 1 { "word" } else { "words" }
                ));
            }
            ClickOutcome::LevelComplete { word, .. } => {
                self.show_message(&format!(
                    "Found {}! Level complete, press n for the next level",
                    word
                ));
            }
            ClickOutcome::Ignored
            | ClickOutcome::Selected
            | ClickOutcome::Deselected
            | ClickOutcome::ChainReset => {}
        }
    }

    fn show_hint(&mut self) {
        match self.session.hint() {
            Some(placement) => {
                self.cursor = placement.start;
                self.show_message(&format!("Look for {} here", placement.word));
                self.hint = Some(placement);
            }
            None if self.session.is_round_ended() => self.show_message("All words found"),
            None => self.show_message("No hint available"),
        }
    }

    fn next_level(&mut self) {
        if !self.session.is_round_ended() {
            self.show_message("Find every word first");
            return;
        }
        match self.session.next_level() {
            Ok(()) => {
                let center = self.session.grid().size() / 2;
                self.cursor = Position::new(center, center);
                self.hint = None;
                self.show_message(&format!("Level {}", self.session.level() + 1));
            }
            Err(e) => self.show_error(&e.to_string()),
        }
    }

    fn show_error(&mut self, msg: &str) {
        warn!("{}", msg);
        self.show_message(msg);
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let max = self.session.grid().size() as isize - 1;
        let row = (self.cursor.row as isize + dr).clamp(0, max);
        let col = (self.cursor.col as isize + dc).clamp(0, max);
        self.cursor = Position::new(row as usize, col as usize);
    }
}
