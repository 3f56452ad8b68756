//! fitstat - Derived ship stats from an attribute snapshot

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fitstat_core::config::load_damage_profiles;
use fitstat_core::{default_profiles, AttributeSnapshot, CalculatorConstants};
use fitstat_tui::app::{merge_profiles, App};
use fitstat_tui::report::{self, Report};
use fitstat_tui::ui;

#[derive(Parser, Debug)]
#[command(author, version, about = "Derived ship stats from a resolved attribute snapshot")]
struct Cli {
    /// JSON snapshot of resolved attribute values.
    snapshot: PathBuf,

    /// Print a report instead of opening the viewer.
    #[arg(long)]
    report: bool,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Damage profile to select by name.
    #[arg(long)]
    profile: Option<String>,

    /// TOML file with extra damage profiles.
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// TOML file overriding calculator constants.
    #[arg(long)]
    constants: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let snapshot = AttributeSnapshot::load(&cli.snapshot)
        .with_context(|| format!("failed to load snapshot from {}", cli.snapshot.display()))?;
    let constants = load_constants(cli.constants.as_deref())?;
    let profiles = load_profiles(cli.profiles.as_deref())?;
    info!(
        fit = snapshot.label(),
        attributes = snapshot.attributes.len(),
        profiles = profiles.len(),
        "loaded snapshot"
    );

    let mut app = App::new(snapshot, constants, profiles);
    if let Some(name) = cli.profile.as_deref() {
        if !app.select_profile(name) {
            let known: Vec<&str> = app.profiles.iter().map(|(n, _)| n.as_str()).collect();
            bail!("unknown damage profile '{}' (known: {})", name, known.join(", "));
        }
    }

    if cli.report {
        print_report(&app, cli.format)
    } else {
        run_viewer(app).context("terminal error")
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_constants(path: Option<&Path>) -> Result<CalculatorConstants> {
    match path {
        Some(path) => CalculatorConstants::load(path)
            .with_context(|| format!("failed to load constants from {}", path.display())),
        None => Ok(CalculatorConstants::default()),
    }
}

fn load_profiles(path: Option<&Path>) -> Result<Vec<(String, fitstat_core::DamageProfile)>> {
    let builtin = default_profiles();
    match path {
        Some(path) => {
            let extra = load_damage_profiles(path)
                .with_context(|| format!("failed to load damage profiles from {}", path.display()))?;
            Ok(merge_profiles(builtin, extra))
        }
        None => Ok(builtin),
    }
}

fn print_report(app: &App, format: Format) -> Result<()> {
    let (name, profile) = app.profile();
    let report = Report::build(&app.snapshot, app.constants, name, profile);
    match format {
        Format::Text => print!("{}", report::render_text(&report)),
        Format::Json => {
            let json = report::render_json(&report).context("failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_viewer(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.prev_profile(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.next_profile(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }
}
