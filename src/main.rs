//! # Binary: AutoLeadGen Pro
//!
//! ## Responsibility
//! Entry point for the AutoLeadGen Pro terminal dashboard. Loads config,
//! installs file logging, initializes the terminal, runs the event loop, and
//! ensures clean exit.
//!
//! ## Usage
//! ```bash
//! cargo run                                        # defaults
//! cargo run -- --config dashboard.toml
//! cargo run -- --delay-ms 500 --log-file /tmp/alg.log
//! cargo run -- --print-schema > dashboard.schema.json
//! ```
//!
//! ## Environment Variables
//!
//! - `LOG_FORMAT=json`: structured JSON log lines
//! - `RUST_LOG=debug`: log level filter (default: info)
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C
//! - Input polling runs off the runtime thread, so the generation delay
//!   elapses while the UI waits for keys

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use autoleadgen::config::{self, loader, DashboardConfig};
use autoleadgen::tui::app::App;
use autoleadgen::tui::events::{apply_event, poll_event, InputEvent};
use autoleadgen::tui::ui;
use autoleadgen::{
    init_tracing, DashboardError, DemoLeadSource, GenerationTicket, LeadDraft, LeadSource,
    ViewStateStore,
};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "autoleadgen", version, about = "AutoLeadGen Pro demo dashboard")]
struct Cli {
    /// Optional TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the simulated generation delay in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// File that receives log output while the terminal is in use.
    #[arg(long, default_value = "autoleadgen.log")]
    log_file: PathBuf,

    /// Print the config JSON Schema to stdout and exit.
    #[arg(long)]
    print_schema: bool,
}

/// Sets up the terminal for TUI rendering.
///
/// # Errors
/// Returns `io::Error` if terminal initialization fails.
fn setup_terminal() -> Result<Tui, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Tui) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<DashboardConfig, DashboardError> {
    let mut config = match &cli.config {
        Some(path) => loader::load_from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(ms) = cli.delay_ms {
        config.generation.delay_ms = ms;
    }
    loader::check(&config)?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", config::export_schema()?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    init_tracing(config.observability.log_format, &cli.log_file)?;
    info!(
        delay_ms = config.generation.delay_ms,
        tick_rate_ms = config.tui.tick_rate_ms,
        "starting AutoLeadGen Pro"
    );

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            event::DisableMouseCapture
        );
        default_hook(info);
    }));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut terminal = setup_terminal()?;
    let result = rt.block_on(run(&mut terminal, &config));
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("autoleadgen error: {e}");
        std::process::exit(1);
    }

    info!("shutdown complete");
    Ok(())
}

/// Forwards terminal input to the event loop until the receiver is dropped.
fn spawn_input_thread(tick_rate: Duration) -> mpsc::UnboundedReceiver<InputEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !tx.is_closed() {
            let ev = poll_event(tick_rate);
            if ev != InputEvent::None && tx.send(ev).is_err() {
                break;
            }
        }
    });
    rx
}

/// Runs the dashboard event loop.
async fn run(terminal: &mut Tui, config: &DashboardConfig) -> Result<(), DashboardError> {
    let tick_rate = config.tui.tick_rate();
    let source: Arc<dyn LeadSource> = Arc::new(DemoLeadSource::with_delay(config.generation.delay()));
    let mut app = App::new(ViewStateStore::with_display(config.display.clone()));

    let mut input_rx = spawn_input_thread(tick_rate);
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(GenerationTicket, Vec<LeadDraft>)>();
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        tokio::select! {
            maybe_ev = input_rx.recv() => {
                let Some(ev) = maybe_ev else {
                    return Err(DashboardError::Other("input thread stopped".to_string()));
                };
                if let Some(ticket) = apply_event(&mut app, ev) {
                    let source = Arc::clone(&source);
                    let done_tx = done_tx.clone();
                    tokio::spawn(async move {
                        let drafts = source.fetch_leads().await;
                        let _ = done_tx.send((ticket, drafts));
                    });
                }
            }
            Some((ticket, drafts)) = done_rx.recv() => {
                debug!(round = ticket.round(), "lead fetch returned");
                app.finish_generation(ticket, drafts);
            }
            _ = ticker.tick() => {}
        }

        app.drain_events();

        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }
    }
}
