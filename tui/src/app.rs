//! Main Application
//!
//! The App owns the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize)
//! - The core Controller for screen state and lookups
//! - Input buffers and list selections for rendering
//!
//! Lookups and exports are awaited inline in the key handler, so the UI
//! loop is blocked for their duration: at most one fetch or export is ever
//! in flight, and the controller owns the current record exclusively.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use herodex_core::{Action, AppConfig, Controller, Notice, Screen, SuperheroApi};

use crate::assets;
use crate::screens;

/// The three main menu entries, in display order.
pub(crate) const MENU_ENTRIES: &[&str] = &["SEARCH HERO", "HEROES", "RANDOM"];

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Screen state machine and current record owner.
    pub(crate) controller: Controller<SuperheroApi>,
    /// Shared text input (password gate / search box).
    pub(crate) input: String,
    /// Selected main menu entry.
    pub(crate) menu_selected: usize,
    /// Selected roster list entry.
    pub(crate) list_selected: usize,
    /// Roster names sorted for the browsable list.
    pub(crate) roster_sorted: Vec<&'static str>,
    /// Pending modal notice, dismissed by any key.
    pub(crate) notice: Option<Notice>,
    /// Export destination being edited, when the prompt is open.
    pub(crate) export_prompt: Option<String>,
    /// Banner art for the menu, when the asset exists.
    pub(crate) banner: Option<String>,
}

impl App {
    /// Create a new App instance at the password gate.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let banner = config
            .banner
            .as_deref()
            .and_then(|path| match assets::load_banner(path) {
                Ok(art) => Some(art),
                Err(err) => {
                    tracing::warn!(error = %err, "banner asset missing; using plain title");
                    None
                }
            });

        let source = SuperheroApi::from_config(&config);
        let controller = Controller::new(source, config);
        let roster_sorted = controller.roster().sorted();

        Self {
            running: true,
            controller,
            input: String::new(),
            menu_selected: 0,
            list_selected: 0,
            roster_sorted,
            notice: None,
            export_prompt: None,
            banner,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render the initial frame immediately so the user sees the gate.
        self.draw(terminal)?;

        while self.running {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key).await;
                            }
                            Event::Resize(_, _) => {}
                            _ => {}
                        }
                    }
                }

                // Periodic tick keeps the frame fresh.
                () = tokio::time::sleep(Duration::from_millis(250)) => {}
            }

            self.draw(terminal)?;
        }

        Ok(())
    }

    /// Render the current screen.
    fn draw(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| screens::draw(frame, self))?;
        Ok(())
    }

    /// Dispatch an action to the controller and keep any notice for the
    /// modal overlay.
    async fn dispatch(&mut self, action: Action) {
        self.notice = self.controller.handle(action).await;
    }

    /// Handle keyboard input
    async fn handle_key(&mut self, key: event::KeyEvent) {
        // Ctrl-C always quits.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        // A pending notice swallows the next key as its dismissal.
        if self.notice.is_some() {
            self.notice = None;
            return;
        }

        if self.export_prompt.is_some() {
            self.handle_export_prompt_key(key).await;
            return;
        }

        match self.controller.screen() {
            Screen::PasswordGate => self.handle_gate_key(key).await,
            Screen::Menu => self.handle_menu_key(key).await,
            Screen::Search => self.handle_search_key(key).await,
            Screen::RosterList => self.handle_roster_key(key).await,
            Screen::Detail => self.handle_detail_key(key).await,
        }
    }

    async fn handle_gate_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input);
                self.dispatch(Action::SubmitPassword(input)).await;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    async fn handle_menu_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Up => {
                self.menu_selected =
                    (self.menu_selected + MENU_ENTRIES.len() - 1) % MENU_ENTRIES.len();
            }
            KeyCode::Down => {
                self.menu_selected = (self.menu_selected + 1) % MENU_ENTRIES.len();
            }
            KeyCode::Enter => {
                let action = match self.menu_selected {
                    0 => Action::OpenSearch,
                    1 => Action::OpenRoster,
                    _ => Action::PickRandom,
                };
                self.dispatch(action).await;
            }
            _ => {}
        }
    }

    async fn handle_search_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.dispatch(Action::Back).await;
            }
            KeyCode::Enter => {
                let query = self.input.clone();
                self.dispatch(Action::SubmitQuery(query)).await;
                // Keep the text on a failed search so the user can edit it.
                if self.controller.screen() == Screen::Detail {
                    self.input.clear();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    async fn handle_roster_key(&mut self, key: event::KeyEvent) {
        let len = self.roster_sorted.len();
        match key.code {
            KeyCode::Esc => self.dispatch(Action::Back).await,
            KeyCode::Up => self.list_selected = (self.list_selected + len - 1) % len,
            KeyCode::Down => self.list_selected = (self.list_selected + 1) % len,
            KeyCode::Enter => {
                let name = self.roster_sorted[self.list_selected].to_string();
                self.dispatch(Action::PickEntry(name)).await;
            }
            _ => {}
        }
    }

    async fn handle_detail_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dispatch(Action::Back).await,
            KeyCode::Char('e' | 'E') => self.open_export_prompt(),
            _ => {}
        }
    }

    /// Open the export prompt prefilled with the default destination.
    fn open_export_prompt(&mut self) {
        let Some(record) = self.controller.record() else {
            return;
        };
        let default = self
            .controller
            .config()
            .export_dir
            .join(format!("{}.pdf", record.file_stem()));
        self.export_prompt = Some(default.display().to_string());
    }

    async fn handle_export_prompt_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc => self.export_prompt = None,
            KeyCode::Enter => {
                if let Some(path) = self.export_prompt.take() {
                    let path = path.trim().to_string();
                    if path.is_empty() {
                        return;
                    }
                    self.dispatch(Action::Export(Some(path.into()))).await;
                }
            }
            KeyCode::Backspace => {
                if let Some(buf) = self.export_prompt.as_mut() {
                    buf.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buf) = self.export_prompt.as_mut() {
                    buf.push(c);
                }
            }
            _ => {}
        }
    }
}

/// Spaced-uppercase echo for the password entry: `kro` renders as `K R O`.
#[must_use]
pub(crate) fn spaced_echo(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = String::with_capacity(compact.len() * 2);
    for (i, c) in compact.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.extend(c.to_uppercase());
    }
    out
}
