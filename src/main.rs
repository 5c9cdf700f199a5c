mod app;
mod case;
mod config;
mod error;
mod game;
mod logging;
mod ui;
mod validator;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use app::App;
use case::{load_builtin, load_dir, Language};
use config::Config;

#[derive(Parser)]
#[command(name = "debug-detective", version, about = "Fix small HTML, CSS and JavaScript cases in your terminal")]
struct Cli {
    #[arg(short, long, value_enum, help = "Start directly with this language")]
    language: Option<Language>,

    #[arg(long, help = "Directory of case files to play instead of the built-in cases")]
    cases: Option<PathBuf>,

    #[arg(long, help = "Case number to start from (1-based)")]
    case: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    if let Err(err) = logging::init(&config) {
        eprintln!("Logging disabled: {:#}", err);
    }

    let catalog = match cli.cases.as_ref().or(config.cases_dir.as_ref()) {
        Some(dir) => load_dir(dir)?,
        None => load_builtin().context("built-in cases are invalid")?,
    };
    let start_case = cli.case.unwrap_or(1).saturating_sub(1);

    let mut app = App::new(catalog, start_case);
    if let Some(language) = cli.language.or(config.language) {
        app.start_game(language);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    info!("game closed");
    println!("\nCase closed. Thanks for playing Debug Detective.\n");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
