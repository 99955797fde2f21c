//! Presentation Controller
//!
//! The screen state machine. A render surface feeds it [`Action`]s; it
//! dispatches lookups and exports, owns the current record and portrait,
//! and answers with an optional [`Notice`] for the surface to display
//! modally. All side effects are confined to the `fetch` (network) and
//! `export` (file) transitions; every other transition is a pure state
//! change.
//!
//! ```text
//! PasswordGate ──(passphrase ok)──> Menu ──> {Search, RosterList, Detail}
//!       ▲                            ▲                  │
//!       └── wrong input stays ───────┴───── back ───────┘
//! ```
//!
//! The current record and portrait are replaced wholesale on each
//! successful lookup and discarded on back-to-menu, which keeps the
//! transitions testable in isolation from any rendering surface.

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::{ExportError, LookupError};
use crate::export::{default_export_path, export_pdf};
use crate::lookup::HeroSource;
use crate::record::{HeroRecord, PortraitImage};
use crate::roster::Roster;

/// The visual screens a surface renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Initial passphrase prompt.
    PasswordGate,
    /// Main menu: search, roster list, random pick.
    Menu,
    /// Free-text search box.
    Search,
    /// Browsable roster list.
    RosterList,
    /// Detail view for the current record.
    Detail,
}

/// User actions a surface dispatches to the controller.
#[derive(Debug, Clone)]
pub enum Action {
    /// Passphrase submitted at the gate.
    SubmitPassword(String),
    /// Menu: open the search screen.
    OpenSearch,
    /// Menu: open the roster list.
    OpenRoster,
    /// Menu: pick a uniform random roster member and fetch it.
    PickRandom,
    /// Search: submit a query.
    SubmitQuery(String),
    /// Roster list: fetch a selected entry.
    PickEntry(String),
    /// Return to the menu, discarding the current record.
    Back,
    /// Export the current record; `None` uses the default destination.
    Export(Option<PathBuf>),
}

/// Severity of a surfaced notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation, e.g. a successful export.
    Info,
    /// Recoverable input problem.
    Warning,
    /// Failed lookup or export.
    Error,
}

/// A modal notification for the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Short heading.
    pub title: String,
    /// Message body.
    pub body: String,
}

impl Notice {
    fn info(title: &str, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.to_string(),
            body: body.into(),
        }
    }

    fn warning(title: &str, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.to_string(),
            body: body.into(),
        }
    }

    fn error(title: &str, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.to_string(),
            body: body.into(),
        }
    }
}

/// The currently displayed hero, replaced wholesale per lookup.
struct CurrentHero {
    record: HeroRecord,
    portrait: Option<PortraitImage>,
}

/// The presentation controller.
///
/// Generic over [`HeroSource`] so tests drive it with a mock service.
pub struct Controller<S: HeroSource> {
    source: S,
    roster: Roster,
    config: AppConfig,
    screen: Screen,
    current: Option<CurrentHero>,
}

impl<S: HeroSource> Controller<S> {
    /// Create a controller at the password gate.
    pub fn new(source: S, config: AppConfig) -> Self {
        Self {
            source,
            roster: Roster::new(),
            config,
            screen: Screen::PasswordGate,
            current: None,
        }
    }

    /// The screen the surface should render.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The roster registry.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current record, if a lookup succeeded.
    #[must_use]
    pub fn record(&self) -> Option<&HeroRecord> {
        self.current.as_ref().map(|c| &c.record)
    }

    /// The current portrait, if one was fetched and decoded.
    #[must_use]
    pub fn portrait(&self) -> Option<&PortraitImage> {
        self.current.as_ref().and_then(|c| c.portrait.as_ref())
    }

    /// The resolved configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The underlying hero source; tests inspect call counts through it.
    #[must_use]
    pub fn source_ref(&self) -> &S {
        &self.source
    }

    /// Dispatch a user action, returning a notice for the surface when one
    /// should be shown. Failed transitions leave the state unchanged.
    pub async fn handle(&mut self, action: Action) -> Option<Notice> {
        match action {
            Action::SubmitPassword(input) => {
                if self.config.passphrase_matches(&input) {
                    self.screen = Screen::Menu;
                    None
                } else {
                    Some(Notice::error("Error", "Incorrect password"))
                }
            }
            Action::OpenSearch => {
                self.screen = Screen::Search;
                None
            }
            Action::OpenRoster => {
                self.screen = Screen::RosterList;
                None
            }
            Action::PickRandom => {
                let name = self.roster.random();
                self.lookup(name).await
            }
            Action::SubmitQuery(query) => {
                let query = query.trim().to_string();
                if query.is_empty() {
                    return Some(Notice::warning(
                        "Empty input",
                        "Please enter a hero name.",
                    ));
                }
                if !self.roster.contains(&query) {
                    // Validation failure: no network call is issued.
                    let err = LookupError::Validation(format!(
                        "'{query}' is not a playable character."
                    ));
                    return Some(Notice::error("Invalid hero", err.to_string()));
                }
                self.lookup(&query).await
            }
            Action::PickEntry(name) => self.lookup(&name).await,
            Action::Back => {
                if self.screen != Screen::PasswordGate {
                    self.screen = Screen::Menu;
                    self.current = None;
                }
                None
            }
            Action::Export(dest) => self.export(dest),
        }
    }

    /// Fetch, normalize, and display a hero. On failure the screen is
    /// unchanged and the error comes back as a notice.
    async fn lookup(&mut self, name: &str) -> Option<Notice> {
        match self.source.search(name).await {
            Ok(raw) => {
                let record = HeroRecord::normalize(&raw);
                let portrait = self.fetch_portrait(&record).await;
                tracing::info!(hero = %record.name, "lookup succeeded");
                self.current = Some(CurrentHero { record, portrait });
                self.screen = Screen::Detail;
                None
            }
            Err(LookupError::NotFound(name)) => Some(Notice::error(
                "Search error",
                format!("No hero found for '{name}'."),
            )),
            Err(err @ LookupError::Connection(_)) => {
                tracing::warn!(error = %err, "lookup transport failure");
                Some(Notice::error("Connection error", err.to_string()))
            }
            Err(LookupError::Validation(msg)) => Some(Notice::error("Invalid hero", msg)),
        }
    }

    /// Fetch and decode the portrait for a record.
    ///
    /// Portrait failures are non-fatal to the lookup: the record still
    /// displays with the placeholder-image path.
    async fn fetch_portrait(&self, record: &HeroRecord) -> Option<PortraitImage> {
        let url = record.portrait_url.as_deref()?;
        match self.source.fetch_portrait(url).await {
            Ok(bytes) => match PortraitImage::from_bytes(bytes) {
                Ok(portrait) => Some(portrait),
                Err(err) => {
                    tracing::warn!(%url, error = %err, "portrait decode failed");
                    None
                }
            },
            Err(err) => {
                tracing::warn!(%url, error = %err, "portrait fetch failed");
                None
            }
        }
    }

    /// Export the current record. Does not change the screen.
    fn export(&self, dest: Option<PathBuf>) -> Option<Notice> {
        let result = self.try_export(dest);
        Some(match result {
            Ok(path) => Notice::info(
                "Export complete",
                format!("Saved to {}", path.display()),
            ),
            Err(err) => Notice::error("Export error", err.to_string()),
        })
    }

    fn try_export(&self, dest: Option<PathBuf>) -> Result<PathBuf, ExportError> {
        let current = self.current.as_ref().ok_or(ExportError::NoRecord)?;
        let path = match dest {
            Some(path) => path,
            None => default_export_path(&current.record, &self.config.export_dir)?,
        };
        export_pdf(&current.record, current.portrait.as_ref(), &path)?;
        Ok(path)
    }
}
