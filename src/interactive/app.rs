//! TUI application state and logic

use super::rendering::{self, key_at};
use super::worker::{Loader, Reply};
use crate::game::{GameSession, GameStatus, InputEvent, InputOutcome, Statistics};
use crate::wordlists::{AcceptAll, Lexicon, WordValidator};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::debug;

/// How long to wait for input before checking the loader again
const TICK_RATE: Duration = Duration::from_millis(100);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub lexicon: Lexicon,
    pub accept_all: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    loader: Loader,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app; the first game starts immediately
    #[must_use]
    pub fn new(session: GameSession, loader: Loader, accept_all: bool) -> Self {
        let mut app = Self {
            session,
            lexicon: Lexicon::pending(),
            accept_all,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            loader,
        };
        app.add_message(
            "Welcome! Type a word and press Enter. Ctrl-R: new game, Esc: quit.",
            MessageStyle::Info,
        );
        app.new_game();
        app
    }

    /// Reset the board and ask the loader for a fresh word
    pub fn new_game(&mut self) {
        let session = self.session.reset();
        self.loader.request_target(session);
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Apply everything the loader has sent since the last call
    pub fn poll_loader(&mut self) {
        for reply in self.loader.drain() {
            self.apply_reply(reply);
        }
    }

    fn apply_reply(&mut self, reply: Reply) {
        match reply {
            Reply::Target(session, Ok(word)) => {
                // A stale reply is expected after a quick reset; just drop it
                if let Err(err) = self.session.install_target(session, word) {
                    debug!(%err, "target word discarded");
                }
            }
            Reply::Target(session, Err(err)) => {
                if session == self.session.session_id() {
                    self.add_message(
                        &format!("Could not pick a word: {err}. Press Ctrl-R to retry."),
                        MessageStyle::Error,
                    );
                }
            }
            Reply::Dictionary(Ok(words)) => {
                self.lexicon.fill(&words);
                self.add_message(
                    &format!("Dictionary ready ({} words)", self.lexicon.len()),
                    MessageStyle::Info,
                );
            }
            Reply::Dictionary(Err(err)) => {
                self.add_message(
                    &format!("Dictionary failed to load: {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Route one game input and report its outcome
    pub fn handle_input(&mut self, event: InputEvent) {
        let validator: &dyn WordValidator = if self.accept_all {
            &AcceptAll
        } else {
            &self.lexicon
        };

        match self.session.handle(event, validator) {
            InputOutcome::Submitted(submission) => match submission.status {
                GameStatus::Won => {
                    self.stats.record(&self.session);
                    let guesses = submission.row + 1;
                    let celebration = match guesses {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                        n => format!("🎉 YOU WON in {n} guesses! 🎉"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::Lost => {
                    self.stats.record(&self.session);
                    self.add_message(
                        &format!("YOU LOST! The word was {}", submission_answer(&self.session)),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::InProgress => {
                    let left = self.session.config().max_attempts - self.session.attempt_index();
                    self.add_message(
                        &format!("{} {left} left", submission.feedback.to_emoji()),
                        MessageStyle::Info,
                    );
                }
            },
            InputOutcome::Rejected(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            InputOutcome::Edited | InputOutcome::Ignored => {}
        }
    }

    /// Handle a key press from the physical keyboard
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if ctrl => {}
            KeyCode::Char('q') if self.session.status().is_over() => self.should_quit = true,
            KeyCode::Char('n') if self.session.status().is_over() => self.new_game(),
            code => {
                if let Some(event) = input_event(code) {
                    self.handle_input(event);
                }
            }
        }
    }

    /// Handle a left click at a terminal cell
    ///
    /// Clicks on the on-screen keyboard act like the matching key press.
    pub fn handle_click(&mut self, frame: Rect, column: u16, row: u16) {
        if let Some(key) = key_at(frame, self.session.config(), column, row) {
            self.handle_input(key.into());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Whether the dictionary can answer validity checks
    #[must_use]
    pub const fn dictionary_ready(&self) -> bool {
        self.accept_all || self.lexicon.is_ready()
    }
}

fn submission_answer(session: &GameSession) -> String {
    session
        .revealed_target()
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default()
}

/// Translate a key code into a game input, dropping anything else
fn input_event(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(ch) => InputEvent::letter(ch),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        _ => None,
    }
}

/// Restore the terminal if the app panics
pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    initialize_panic_handler();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        app.poll_loader();
        terminal.draw(|f| rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    app.handle_click(frame, mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
