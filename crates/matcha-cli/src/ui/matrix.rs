//! Matrix visualization pane — right panel.
//!
//! Renders whichever matrices fit the current step of the demo: the
//! similarity matrix S = U·Uᵀ early on, the feature/preference matrices A
//! and P while preferences are being picked, and the match matrix M = A·Pᵀ
//! plus the like matrix L once swiping starts.

use matcha_core::{
  score::{self, Matrices},
  swipe,
  user::User,
};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the matrix pane for the current screen into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let pool = app.pool();
  let mut lines: Vec<Line> = Vec::new();

  match app.screen {
    Screen::Register => {
      push_title(&mut lines, "Similarity matrix S = U·Uᵀ (demo pool)");
      push_similarity(&mut lines, &pool, app);
      push_note(&mut lines, "Register to join the pool.");
    }
    Screen::Welcome => {
      push_title(&mut lines, "Similarity matrix S = U·Uᵀ");
      push_similarity(&mut lines, &pool, app);
      push_note(&mut lines, "You are the last row and column.");
    }
    Screen::Preferences => {
      let matrices = score::feature_preference_matrices(&pool, &app.catalog);
      push_title(&mut lines, "Feature matrix A (rows: users)");
      push_binary(&mut lines, &pool, &matrices.a, app);
      lines.push(Line::from(""));
      push_title(&mut lines, "Preference matrix P (rows: users)");
      push_binary(&mut lines, &pool, &matrices.p, app);
    }
    Screen::Swiping | Screen::Finished => {
      let matrices = score::feature_preference_matrices(&pool, &app.catalog);
      push_title(&mut lines, "Match matrix M = A·Pᵀ");
      push_match(&mut lines, &pool, &matrices, app);
      lines.push(Line::from(""));
      push_title(&mut lines, "Like matrix L (rows: who swiped)");
      push_likes(&mut lines, &pool, app);
    }
  }

  let block = Block::default()
    .title(" Matrices ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Builders ─────────────────────────────────────────────────────────────────

fn push_title(lines: &mut Vec<Line>, title: &str) {
  lines.push(Line::from(Span::styled(
    format!(" {title}"),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  )));
}

fn push_note(lines: &mut Vec<Line>, note: &str) {
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    format!(" {note}"),
    Style::default().fg(Color::DarkGray),
  )));
}

/// Column header: one avatar emoji per pool member.
fn header_line(pool: &[User], app: &App) -> Line<'static> {
  let mut spans = vec![Span::raw("     ")];
  for user in pool {
    let emoji = app.catalog.avatar_emoji(&user.avatar);
    spans.push(Span::raw(format!("{emoji:>3} ")));
  }
  Line::from(spans)
}

fn row_label(user: &User, app: &App) -> Span<'static> {
  Span::styled(
    format!(" {:>3} ", app.catalog.avatar_emoji(&user.avatar)),
    Style::default().fg(Color::Gray),
  )
}

fn push_similarity(lines: &mut Vec<Line>, pool: &[User], app: &App) {
  let s = score::similarity_matrix(pool, &app.catalog);
  lines.push(header_line(pool, app));

  for (i, user) in pool.iter().enumerate() {
    let mut spans = vec![row_label(user, app)];
    for (j, value) in s[i].iter().enumerate() {
      // Diagonal = own interest count; dim it so the pairwise scores pop.
      let style = if i == j {
        Style::default().fg(Color::DarkGray)
      } else if *value > 0 {
        Style::default().fg(Color::Green)
      } else {
        Style::default()
      };
      spans.push(Span::styled(format!("{value:>3} "), style));
    }
    lines.push(Line::from(spans));
  }
}

fn push_binary(
  lines: &mut Vec<Line>,
  pool: &[User],
  rows: &[Vec<u8>],
  app: &App,
) {
  let mut header = vec![Span::raw("     ")];
  for subject in &app.catalog.subjects {
    header.push(Span::raw(format!("{:>3} ", subject.emoji)));
  }
  lines.push(Line::from(header));

  for (user, row) in pool.iter().zip(rows) {
    let mut spans = vec![row_label(user, app)];
    for value in row {
      let style = if *value == 1 {
        Style::default().fg(Color::Green)
      } else {
        Style::default().fg(Color::DarkGray)
      };
      spans.push(Span::styled(format!("{value:>3} "), style));
    }
    lines.push(Line::from(spans));
  }
}

fn push_match(
  lines: &mut Vec<Line>,
  pool: &[User],
  matrices: &Matrices,
  app: &App,
) {
  lines.push(header_line(pool, app));

  for (i, user) in pool.iter().enumerate() {
    let mut spans = vec![row_label(user, app)];
    for (j, value) in matrices.m[i].iter().enumerate() {
      // The diagonal is computed like any other cell; it is only visually
      // suppressed here.
      let style = if i == j {
        Style::default().fg(Color::DarkGray)
      } else if *value > 0 {
        Style::default().fg(Color::Cyan)
      } else {
        Style::default()
      };
      spans.push(Span::styled(format!("{value:>3} "), style));
    }
    lines.push(Line::from(spans));
  }
}

fn push_likes(lines: &mut Vec<Line>, pool: &[User], app: &App) {
  lines.push(header_line(pool, app));

  for visitor in pool {
    let mut spans = vec![row_label(visitor, app)];
    for target in pool {
      let cell = if visitor.id == target.id {
        Span::styled("  · ", Style::default().fg(Color::DarkGray))
      } else {
        match swipe::find_swipe(&app.swipes, &visitor.id, &target.id) {
          Some(s) if s.liked => {
            Span::styled("  1 ", Style::default().fg(Color::Green))
          }
          Some(_) => Span::styled("  0 ", Style::default().fg(Color::Red)),
          None => Span::styled("  · ", Style::default().fg(Color::DarkGray)),
        }
      };
      spans.push(cell);
    }
    lines.push(Line::from(spans));
  }
}
