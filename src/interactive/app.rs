//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::dictionary::Dictionary;
use crate::game::{Session, SessionConfig, SessionError, Statistics, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: SessionConfig,
    pub rng: StdRng,
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

impl<'a> App<'a> {
    /// Create the app with a first session already running
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be started.
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng, config: SessionConfig) -> Result<Self> {
        let session = Session::new(dictionary, &mut rng, config)?;

        Ok(Self {
            dictionary,
            config,
            rng,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {WORD_LENGTH}-letter word in {} tries. Type and press Enter.",
                    config.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&guess) {
            Ok(SubmitOutcome::Invalid(reason)) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
                // Keep what was typed so it can be corrected
                self.input_buffer = guess;
            }
            Ok(SubmitOutcome::Evaluated {
                remaining_attempts, ..
            }) => {
                self.add_message(
                    &format!("{remaining_attempts} attempt(s) left"),
                    MessageStyle::Info,
                );
            }
            Ok(SubmitOutcome::Won { attempts, .. }) => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish_game();
            }
            Ok(SubmitOutcome::Lost { target, .. }) => {
                self.add_message(
                    &format!("Out of attempts. The word was {}", target.text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.finish_game();
            }
            Err(err @ SessionError::Closed(_)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh session with a new target
    pub fn new_game(&mut self) {
        match Session::new(self.dictionary, &mut self.rng, self.config) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Append a typed letter, ignoring anything past the word length
    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LENGTH {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::GameOver => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char(c) => app.push_letter(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_input(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;
    use rand::SeedableRng;

    fn app(dict: &Dictionary) -> App<'_> {
        App::new(dict, StdRng::seed_from_u64(8), SessionConfig::default()).unwrap()
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
        app.submit_input();
    }

    #[test]
    fn typing_is_capped_and_lowercased() {
        let dict = Dictionary::load(["crane"]).unwrap();
        let mut app = app(&dict);
        for c in "CRANES1".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "crane");
    }

    #[test]
    fn invalid_guess_keeps_buffer_and_attempts() {
        let dict = Dictionary::load(["crane", "slate"]).unwrap();
        let mut app = app(&dict);

        type_word(&mut app, "zzzzz");
        assert_eq!(app.input_buffer, "zzzzz");
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn winning_moves_to_game_over_and_records() {
        let dict = Dictionary::load(["crane"]).unwrap();
        let mut app = app(&dict);

        type_word(&mut app, "crane");
        assert_eq!(app.session.status(), Status::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn messages_are_capped() {
        let dict = Dictionary::load(["crane"]).unwrap();
        let mut app = app(&dict);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
