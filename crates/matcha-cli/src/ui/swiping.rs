//! Welcome, swipe-card, finished, and match-modal panes — left panel.

use matcha_core::score::{self, RankedMatch};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

// ─── Welcome ──────────────────────────────────────────────────────────────────

/// Greeting plus the live similarity ranking against the demo pool.
pub fn draw_welcome(f: &mut Frame, area: Rect, app: &App) {
  let Some(current) = &app.current_user else {
    return;
  };

  let block = Block::default()
    .title(format!(
      " Welcome, {} {} ",
      app.catalog.avatar_emoji(&current.avatar),
      current.name
    ))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let pool = app.pool();
  let ranked = score::rank_by_similarity(current, &pool, &app.catalog);

  let mut lines = vec![
    Line::from(Span::styled(
      " Your best matches by shared interests:",
      Style::default().fg(Color::Gray),
    )),
    Line::from(""),
  ];

  for (i, r) in ranked.iter().enumerate() {
    lines.push(Line::from(vec![
      Span::raw(format!(
        " {}. {} {:<8}",
        i + 1,
        app.catalog.avatar_emoji(&r.user.avatar),
        r.user.name
      )),
      Span::styled(
        format!("score {}", r.similarity.score),
        Style::default().fg(Color::Green),
      ),
      Span::styled(
        format!(
          "  ({})",
          app
            .catalog
            .subject_names(
              r.similarity.common_subjects.iter().map(String::as_str),
            )
            .join(", ")
        ),
        Style::default().fg(Color::DarkGray),
      ),
    ]));
  }

  if let Some(best) = ranked.first() {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      format!(" How the top score is computed ({}):", best.user.name),
      Style::default().fg(Color::Gray),
    )));
    lines.extend(worksheet_lines(best, app));
  }

  f.render_widget(Paragraph::new(lines), inner);
}

/// The per-subject multiplication worksheet for one candidate.
fn worksheet_lines<'a>(r: &'a RankedMatch, app: &'a App) -> Vec<Line<'a>> {
  let mut lines = vec![Line::from(Span::styled(
    "   subject              you · them = ",
    Style::default().fg(Color::DarkGray),
  ))];

  for step in &r.similarity.steps {
    let name = app
      .catalog
      .subject(&step.subject_id)
      .map(|s| s.name.as_str())
      .unwrap_or(step.subject_id.as_str());
    let style = if step.product == 1 {
      Style::default().fg(Color::Green)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(Span::styled(
      format!(
        "   {:<22} {} · {}  =  {}",
        truncated(name, 22),
        step.a_value,
        step.b_value,
        step.product
      ),
      style,
    )));
  }
  lines
}

fn truncated(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
  }
}

// ─── Swipe card ───────────────────────────────────────────────────────────────

/// The current candidate, their interests, and the similarity breakdown.
pub fn draw_card(f: &mut Frame, area: Rect, app: &App) {
  let done = app.cursor.min(app.candidates.len());
  let block = Block::default()
    .title(format!(
      " Candidate {}/{} ",
      done + 1,
      app.candidates.len()
    ))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(candidate) = app.current_candidate() else {
    return;
  };

  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      format!(
        "   {}  {}",
        app.catalog.avatar_emoji(&candidate.user.avatar),
        candidate.user.name
      ),
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
    Line::from(vec![
      Span::raw("   Shared interests: "),
      Span::styled(
        format!("{}", candidate.similarity.score),
        Style::default().fg(Color::Green),
      ),
    ]),
    Line::from(Span::styled(
      format!(
        "   {}",
        app
          .catalog
          .subject_names(
            candidate.similarity.common_subjects.iter().map(String::as_str)
          )
          .join(", ")
      ),
      Style::default().fg(Color::DarkGray),
    )),
    Line::from(""),
    Line::from(Span::styled(
      "   Their interests:",
      Style::default().fg(Color::Gray),
    )),
  ];

  for name in app
    .catalog
    .subject_names(candidate.user.interests.iter().map(String::as_str))
  {
    lines.push(Line::from(format!("    • {name}")));
  }

  lines.push(Line::from(""));
  lines.push(Line::from(vec![
    Span::styled("   ← / n pass      ", Style::default().fg(Color::Red)),
    Span::styled("→ / y like", Style::default().fg(Color::Green)),
  ]));

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Finished ─────────────────────────────────────────────────────────────────

/// End-of-session summary.
pub fn draw_finished(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" All candidates seen ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = vec![
    Line::from(""),
    Line::from(format!("   Likes:   {}", app.likes)),
    Line::from(format!("   Passes:  {}", app.passes)),
    Line::from(vec![
      Span::raw("   Matches: "),
      Span::styled(
        format!("{}", app.matches_seen),
        Style::default()
          .fg(Color::Magenta)
          .add_modifier(Modifier::BOLD),
      ),
    ]),
    Line::from(""),
    Line::from(Span::styled(
      "   Press r to start over with a new profile.",
      Style::default().fg(Color::DarkGray),
    )),
  ];

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Match modal ──────────────────────────────────────────────────────────────

/// Centered overlay announcing a mutual match.
pub fn draw_match_modal(f: &mut Frame, area: Rect, app: &App) {
  let Some(m) = &app.pending_match else {
    return;
  };

  let partner_name = app
    .pool()
    .iter()
    .find(|u| u.id == m.user_b)
    .map(|u| u.name.clone())
    .unwrap_or_else(|| m.user_b.clone());

  let width = area.width.min(40);
  let height = 7;
  let modal = Rect {
    x:      area.x + (area.width.saturating_sub(width)) / 2,
    y:      area.y + (area.height.saturating_sub(height)) / 2,
    width,
    height,
  };

  let block = Block::default()
    .title(" It's a match! ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Magenta));
  let inner = block.inner(modal);

  f.render_widget(Clear, modal);
  f.render_widget(block, modal);
  f.render_widget(
    Paragraph::new(vec![
      Line::from(""),
      Line::from(Span::styled(
        format!("   💕 You and {partner_name} liked each other!"),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )),
      Line::from(""),
      Line::from(Span::styled(
        "   Press Enter to keep swiping.",
        Style::default().fg(Color::DarkGray),
      )),
    ]),
    inner,
  );
}
