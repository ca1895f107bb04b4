//! Modal dialogs — add/edit meal, delete confirmation, note, goal.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, Dialog, EditDraft, MealField};

/// Render the open dialog centred over `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  match &app.dialog {
    Dialog::None => {}
    Dialog::AddMeal(form) => draw_meal_form(
      f,
      area,
      " Add meal ",
      &form.name,
      &form.calories,
      form.field,
      true,
    ),
    Dialog::EditMeal(draft) => draw_edit(f, area, draft),
    Dialog::ConfirmDeleteMeal(meal) => {
      let rect = centered_rect(area, 44, 5);
      f.render_widget(Clear, rect);
      let block = dialog_block(" Delete meal ");
      let inner = block.inner(rect);
      f.render_widget(block, rect);
      let lines = vec![
        Line::from(format!("Delete \"{}\" ({} kcal)?", meal.name, meal.calories)),
        Line::from(""),
        hint_line("[y] delete  [n] keep"),
      ];
      f.render_widget(Paragraph::new(lines), inner);
    }
    Dialog::AddNote(text) => {
      let rect = centered_rect(area, 50, 5);
      f.render_widget(Clear, rect);
      let block = dialog_block(" Add note ");
      let inner = block.inner(rect);
      f.render_widget(block, rect);
      let lines = vec![
        field_line("note", text, true),
        Line::from(""),
        hint_line("Enter save  Esc cancel"),
      ];
      f.render_widget(Paragraph::new(lines), inner);
    }
    Dialog::EditGoal(text) => {
      let rect = centered_rect(area, 40, 5);
      f.render_widget(Clear, rect);
      let block = dialog_block(" Daily goal ");
      let inner = block.inner(rect);
      f.render_widget(block, rect);
      let lines = vec![
        field_line("kcal", text, true),
        Line::from(""),
        hint_line("Enter save  Esc cancel"),
      ];
      f.render_widget(Paragraph::new(lines), inner);
    }
  }
}

fn draw_edit(f: &mut Frame, area: Rect, draft: &EditDraft) {
  draw_meal_form(
    f,
    area,
    " Edit meal ",
    &draft.name,
    &draft.calories,
    draft.field,
    false,
  )
}

#[allow(clippy::too_many_arguments)]
fn draw_meal_form(
  f: &mut Frame,
  area: Rect,
  title: &str,
  name: &str,
  calories: &str,
  field: MealField,
  show_panel_hints: bool,
) {
  let rect = centered_rect(area, 48, 7);
  f.render_widget(Clear, rect);
  let block = dialog_block(title);
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let mut lines = vec![
    field_line("name", name, field == MealField::Name),
    field_line("kcal", calories, field == MealField::Calories),
    Line::from(""),
    hint_line("Tab field  Enter save  Esc cancel"),
  ];
  if show_panel_hints {
    lines.push(hint_line("Ctrl-K calculator  Ctrl-F food info"));
  }
  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Shared bits ──────────────────────────────────────────────────────────────

pub(super) fn dialog_block(title: &str) -> Block<'_> {
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan))
    .style(Style::default().bg(Color::Black))
}

/// One labelled input line. The active field gets a trailing cursor.
pub(super) fn field_line<'a>(
  label: &'a str,
  value: &'a str,
  active: bool,
) -> Line<'a> {
  let label_style = if active {
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let mut spans = vec![
    Span::styled(format!("{label:>6}: "), label_style),
    Span::raw(value),
  ];
  if active {
    spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
  }
  Line::from(spans)
}

pub(super) fn hint_line(text: &str) -> Line<'_> {
  Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// A fixed-size rect centred in `area`, clamped to fit.
pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Min(0),
      Constraint::Length(width),
      Constraint::Min(0),
    ])
    .split(area);
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(0),
      Constraint::Length(height),
      Constraint::Min(0),
    ])
    .split(cols[1]);
  rows[1]
}
