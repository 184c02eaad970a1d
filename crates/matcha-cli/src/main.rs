//! `matcha` — terminal demo of matrix-based preference matching.
//!
//! # Usage
//!
//! ```
//! matcha
//! matcha --data ~/.local/share/matcha --seed 7
//! matcha --fresh
//! ```

mod app;
mod ui;

use std::{io, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use matcha_core::{catalog::Catalog, user::demo_roster};
use matcha_store::SnapshotStore;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "matcha", about = "Matrix-based dating-match demo")]
struct Args {
  /// Directory for session snapshots (default: .matcha).
  #[arg(long, env = "MATCHA_DATA", default_value = ".matcha")]
  data: std::path::PathBuf,

  /// Seed the mock-swipe RNG for a reproducible session.
  #[arg(long)]
  seed: Option<u64>,

  /// Discard any saved session before starting.
  #[arg(long)]
  fresh: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  // Initialise tracing. The TUI owns stdout, so anything above WARN goes to
  // stderr and shows up after the terminal is restored.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let store = SnapshotStore::open(&args.data)
    .with_context(|| {
      format!("opening snapshot store at {}", args.data.display())
    })?;
  if args.fresh {
    store.remove(app::USERS_KEY);
    store.remove(app::SWIPES_KEY);
  }

  let rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let mut app = App::new(Catalog::demo(), demo_roster(), store, rng);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app);

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if event::poll(Duration::from_millis(50)).context("polling events")? {
      match event::read().context("reading event")? {
        Event::Key(key) => {
          if !app.handle_key(key) {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Terminal will redraw on next iteration.
        }
        _ => {}
      }
    }
  }

  Ok(())
}
