//! TUI rendering and the event loop (impure shell).

pub mod constants;
mod confirm;
mod editor;
mod help;
mod helpers;
pub mod layout;
mod recipes;
mod search_input;
pub mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::{pagination_status, render_layout};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::client::{CollectionApi, RecipeApi};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::dispatch::Dispatcher;
use crate::model::KeyAction;
use crate::session::User;
use crate::state::{AppState, Completion, Overlay, Request};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Every sender is gone, so no completion can ever arrive.
    #[error("Request channel closed")]
    ChannelClosed,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    dispatcher: Dispatcher,
    completions: Receiver<Completion>,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen. Raw mode is
    /// switched back off if the rest of the setup fails.
    pub fn new(
        app_state: AppState,
        dispatcher: Dispatcher,
        completions: Receiver<Completion>,
        palette: Palette,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let terminal = restore_on_error(open_alternate_screen(), log_restore_terminal)?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            dispatcher,
            completions,
            palette,
        ))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create the application on an already set-up terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        dispatcher: Dispatcher,
        completions: Receiver<Completion>,
        palette: Palette,
    ) -> Self {
        Self {
            terminal,
            app_state,
            dispatcher,
            completions,
            key_bindings: KeyBindings::default(),
            palette,
        }
    }

    /// Run the main event loop
    ///
    /// Issues the initial request, then alternates between waiting up to one
    /// tick for a key and folding in finished requests. Returns when the user
    /// quits (q or Ctrl+C).
    pub fn run(&mut self, initial_query: Option<&str>) -> Result<(), TuiError> {
        let request = self.app_state.start(initial_query);
        self.dispatcher.dispatch(request);
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            info!("quit requested");
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                    _ => {}
                }
            }

            self.drain_completions()?;
            self.app_state.tick(Instant::now());
            self.draw()?;
        }
    }

    /// Fold every completion that has already arrived into the state.
    fn drain_completions(&mut self) -> Result<(), TuiError> {
        loop {
            match self.completions.try_recv() {
                Ok(completion) => self.app_state.complete(completion),
                Err(TryRecvError::Empty) => return Ok(()),
                // The dispatcher holds a sender for as long as we do.
                Err(TryRecvError::Disconnected) => return Err(TuiError::ChannelClosed),
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.app_state.handle_action(KeyAction::Quit);
            return true;
        }

        let overlay = self.app_state.overlay();
        let request = if matches!(overlay, Overlay::Editor(_)) {
            self.handle_editor_key(key)
        } else if *overlay == Overlay::ConfirmDelete {
            self.handle_confirm_key(key)
        } else if *overlay == Overlay::Help {
            // Any key closes help; quit still quits.
            let action = match self.key_bindings.get(key) {
                Some(KeyAction::Quit) => KeyAction::Quit,
                _ => KeyAction::Help,
            };
            self.app_state.handle_action(action)
        } else if self.app_state.search().is_typing() {
            self.handle_search_key(key)
        } else {
            self.key_bindings
                .get(key)
                .and_then(|action| self.app_state.handle_action(action))
        };

        if let Some(request) = request {
            self.dispatch(request);
        }
        self.app_state.should_quit()
    }

    /// Keys while the search bar has focus. Bindings are bypassed so every
    /// printable key can be typed.
    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Enter => return self.app_state.submit_search(),
            KeyCode::Esc => self.app_state.cancel_search(),
            KeyCode::Backspace => self.app_state.search_backspace(),
            KeyCode::Left => self.app_state.search_left(),
            KeyCode::Right => self.app_state.search_right(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state.search_input(ch)
            }
            _ => {}
        }
        None
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Enter => return self.app_state.submit_editor(),
            KeyCode::Esc => {
                self.app_state.cancel_editor();
                return None;
            }
            _ => {}
        }

        let editor = self.app_state.editor_mut()?;
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => editor.toggle_focus(),
            KeyCode::Down => editor.next_tag(),
            KeyCode::Up => editor.prev_tag(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete(),
            KeyCode::Left => editor.left(),
            KeyCode::Right => editor.right(),
            KeyCode::Home => editor.home(),
            KeyCode::End => editor.end(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.input_char(ch)
            }
            _ => {}
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.app_state.confirm_delete()
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.app_state.cancel_delete();
                None
            }
            _ => None,
        }
    }

    fn dispatch(&self, request: Request) {
        debug!(id = %request.id, operation = request.operation.label(), "dispatching");
        self.dispatcher.dispatch(request);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            app_state,
            key_bindings,
            palette,
            ..
        } = self;
        terminal.draw(|frame| layout::render_layout(frame, app_state, key_bindings, palette))?;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    config: &ResolvedConfig,
    user: User,
    posts: Arc<dyn CollectionApi>,
    recipes: Arc<dyn RecipeApi>,
    initial_query: Option<&str>,
) -> Result<(), TuiError> {
    let app_state = AppState::new(user, config.page_size).with_notice_ttl(config.notice_ttl());
    let (dispatcher, completions) = Dispatcher::new(posts, recipes);
    let palette = Palette::new(ColorConfig::from_env_and_args(!config.color));

    let mut app = TuiApp::new(app_state, dispatcher, completions, palette)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run(initial_query);

    // Always restore terminal state
    log_restore_terminal();

    result
}

fn open_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `restore` when terminal setup failed, then hand the result back.
fn restore_on_error<T>(
    result: Result<T, TuiError>,
    restore: impl FnOnce(),
) -> Result<T, TuiError> {
    if result.is_err() {
        restore();
    }
    result
}

fn log_restore_terminal() {
    if let Err(err) = restore_terminal() {
        warn!(error = %err, "failed to restore terminal");
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Flatten a rendered buffer to text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
