//! Herodex binary entrypoint
//!
//! Sets up logging (to a file; the terminal belongs to the TUI), loads
//! configuration, and runs the app on an alternate screen with raw mode.
//! The terminal is restored on both clean exit and panic.

use std::fs::File;
use std::io;
use std::sync::Arc;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use herodex_core::{load_config, AppConfig};
use herodex_tui::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            // Config problems degrade to defaults rather than aborting.
            tracing::warn!(error = %err, "config load failed; using defaults");
            AppConfig::default().with_env_overrides()
        }
    };

    let mut terminal = setup_terminal()?;
    install_panic_hook();

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    restore_terminal()?;
    result
}

/// Route tracing to a log file under the local data dir.
///
/// Logging is best-effort: with no writable data dir the subscriber is
/// simply not installed.
fn init_tracing() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("herodex")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("herodex.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Restore the terminal before the default panic output, so a panic does
/// not leave the shell in raw mode.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
