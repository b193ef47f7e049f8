//! eHIGHWAY - the company site in a terminal
//!
//! Pages are reached through an address bar, a navigation header and a
//! collapsible menu on narrow terminals. Every page change scrolls the view
//! back to the top.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use ehighway::application::{App, AppMode};
use ehighway::infrastructure::{init_logging, Settings};
use ehighway::presentation::{render_ui, InputHandler};

#[derive(Parser, Debug)]
#[command(name = "ehighway", version, about = "The eHIGHWAY site in your terminal")]
struct Args {
    /// Path to open first, e.g. /services
    #[arg(long)]
    path: Option<String>,
    /// Settings file (defaults to ./ehighway.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Widths below this many columns use the mobile layout
    #[arg(long)]
    breakpoint: Option<u16>,
    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log filter directive, e.g. "ehighway=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn apply(self, settings: &mut Settings) {
        if let Some(path) = self.path {
            settings.start_path = path;
        }
        if let Some(breakpoint) = self.breakpoint {
            settings.breakpoint = breakpoint;
        }
        if let Some(log_file) = self.log_file {
            settings.log_file = Some(log_file);
        }
        if let Some(log_filter) = self.log_filter {
            settings.log_filter = log_filter;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings =
        Settings::load(args.config.as_deref()).context("failed to load settings")?;
    args.apply(&mut settings);
    init_logging(&settings).context("failed to start logging")?;

    tracing::info!(start_path = %settings.start_path, breakpoint = settings.breakpoint, "starting");

    let mut terminal = enter_terminal().context("failed to set up the terminal")?;

    let mut app = App::new(&settings.start_path, settings.breakpoint);
    let tick = Duration::from_millis(settings.tick_ms.max(1));
    let res = run_app(&mut terminal, &mut app, tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "terminal failure");
    }
    res.context("terminal failure")
}

/// Enters raw mode and the alternate screen, undoing both if a later step
/// fails.
fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    if entered.is_err() {
        // The setup error is the one reported.
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    entered
}

/// Draws, commits the path, then waits up to one tick for a key.
///
/// Exits when `q` is pressed while browsing.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;
        app.after_render();

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.mode, AppMode::Browsing) => {
                            tracing::info!("quit");
                            return Ok(());
                        }
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        }

        app.tick();
    }
}
