//! TUI rendering — orchestrates all panes.
//!
//! Left column: the demo flow (form, welcome, swiping). Right column: the
//! matrix visualizations the whole exercise exists to show.

pub mod form;
pub mod matrix;
pub mod swiping;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  // The match modal floats above everything else.
  if app.pending_match.is_some() {
    swiping::draw_match_modal(f, area, app);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let line = Line::from(vec![
    Span::styled(
      " matcha ",
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(
      " matrix-based matching demo 💕",
      Style::default().fg(Color::Gray),
    ),
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Split into flow pane (40%) and matrix pane (60%).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(area);

  match app.screen {
    Screen::Register => form::draw_register(f, cols[0], app),
    Screen::Welcome => swiping::draw_welcome(f, cols[0], app),
    Screen::Preferences => form::draw_preferences(f, cols[0], app),
    Screen::Swiping => swiping::draw_card(f, cols[0], app),
    Screen::Finished => swiping::draw_finished(f, cols[0], app),
  }

  matrix::draw(f, cols[1], app);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.pending_match.is_some() {
    ("MATCH", "Enter/Esc dismiss")
  } else {
    match app.screen {
      Screen::Register => (
        "REGISTER",
        "Tab field  type name  ←→ avatar  ↑↓/Space interests  \
         Enter submit  Esc quit",
      ),
      Screen::Welcome => ("WELCOME", "Enter continue  q quit"),
      Screen::Preferences => (
        "PREFS",
        "↑↓ move  Space toggle  Enter start swiping  q quit",
      ),
      Screen::Swiping => ("SWIPE", "→/y like  ←/n pass  q quit"),
      Screen::Finished => ("DONE", "r restart  q quit"),
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Magenta)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
