//! Tabstrip - closable tab strip demo
//!
//! A browser-like tab bar for the terminal: open tabs, switch between
//! them, close them, and watch the newest-survivor re-selection policy
//! when the active tab goes away.

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use tabstrip_ui::{App, TextPane, Theme};
use tracing_subscriber::EnvFilter;

/// Closable browser-like tab strip demo for the terminal
#[derive(Parser)]
#[command(name = "tabstrip")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of tabs to open at startup
    #[arg(long, default_value_t = 3)]
    tabs: usize,

    /// Use the light theme
    #[arg(long)]
    light: bool,

    /// Write debug logs to this file (stderr would corrupt the screen)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("tabstrip_core=debug".parse()?)
                    .add_directive("tabstrip_ui=debug".parse()?),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = if cli.light {
        Theme::light()
    } else {
        Theme::dark()
    };
    let mut app = App::with_theme(theme);

    // Seed the strip; the last opened tab starts active
    let mut opened = 0usize;
    for _ in 0..cli.tabs {
        opened += 1;
        open_numbered(&mut app, opened);
    }

    let result = run_app(&mut terminal, &mut app, &mut opened);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn open_numbered(app: &mut App, n: usize) {
    let title = format!("TAB_{n}");
    let body = format!(
        "This is tab {n}.\n\n\
         a: open tab   1-9: select by id   x: close active   q: quit"
    );
    app.open(title, Box::new(TextPane::new(body)));
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App, opened: &mut usize) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c'))
                    | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                        app.quit();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('a')) => {
                        *opened += 1;
                        open_numbered(app, *opened);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('x')) => {
                        app.close_active();
                    }
                    (KeyModifiers::NONE, KeyCode::Char(c)) if c.is_ascii_digit() => {
                        // Digits select by tab id; stale ids are ignored
                        if let Some(id) = c.to_digit(10) {
                            app.select(u64::from(id));
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
