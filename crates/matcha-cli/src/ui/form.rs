//! Registration form and preference picker — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, RegisterField};

fn focus_style(focused: bool) -> Style {
  if focused {
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::Gray)
  }
}

// ─── Register ─────────────────────────────────────────────────────────────────

/// Render the registration form into `area`.
pub fn draw_register(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Create your profile ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();

  // Name field.
  let name_focused = app.field == RegisterField::Name;
  let cursor = if name_focused { "_" } else { "" };
  lines.push(Line::from(vec![
    Span::styled(" Name      ", focus_style(name_focused)),
    Span::raw(format!("{}{cursor}", app.name_input)),
  ]));
  lines.push(Line::from(""));

  // Avatar picker: a horizontal strip, current selection highlighted.
  let avatar_focused = app.field == RegisterField::Avatar;
  let mut avatar_spans =
    vec![Span::styled(" Avatar    ", focus_style(avatar_focused))];
  for (i, avatar) in app.catalog.avatars.iter().enumerate() {
    let style = if i == app.avatar_cursor {
      Style::default().bg(Color::Magenta)
    } else {
      Style::default()
    };
    avatar_spans.push(Span::styled(format!(" {} ", avatar.emoji), style));
  }
  lines.push(Line::from(avatar_spans));
  if let Some(avatar) = app.catalog.avatars.get(app.avatar_cursor) {
    lines.push(Line::from(Span::styled(
      format!("           {}", avatar.label),
      Style::default().fg(Color::DarkGray),
    )));
  }
  lines.push(Line::from(""));

  // Interest multi-select.
  let interests_focused = app.field == RegisterField::Interests;
  lines.push(Line::from(Span::styled(
    " Interests",
    focus_style(interests_focused),
  )));
  lines.extend(subject_checklist(
    app,
    &app.selected_interests,
    app.interest_cursor,
    interests_focused,
  ));

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Preferences ──────────────────────────────────────────────────────────────

/// Render the partner-preference picker into `area`.
pub fn draw_preferences(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" What are you looking for? ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    Line::from(Span::styled(
      " Pick the subjects you'd like a partner to have.",
      Style::default().fg(Color::Gray),
    )),
    Line::from(Span::styled(
      " Leaving everything unchecked is fine.",
      Style::default().fg(Color::DarkGray),
    )),
    Line::from(""),
  ];
  lines.extend(subject_checklist(
    app,
    &app.selected_preferences,
    app.preference_cursor,
    true,
  ));

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Shared checklist ─────────────────────────────────────────────────────────

fn subject_checklist<'a>(
  app: &'a App,
  flags: &[bool],
  cursor: usize,
  focused: bool,
) -> Vec<Line<'a>> {
  app
    .catalog
    .subjects
    .iter()
    .enumerate()
    .map(|(i, subject)| {
      let mark = if flags.get(i).copied().unwrap_or(false) {
        "[x]"
      } else {
        "[ ]"
      };
      let style = if focused && i == cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };
      Line::from(Span::styled(
        format!("  {mark} {} {}", subject.emoji, subject.name),
        style,
      ))
    })
    .collect()
}
