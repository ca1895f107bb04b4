//! Side panels for the add-meal dialog — calculator and food-info list.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use super::dialog::{centered_rect, dialog_block, field_line, hint_line};
use crate::app::{ActivePanel, App, FoodField};

/// Render the open side panel centred over `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  match app.panel {
    ActivePanel::None => {}
    ActivePanel::Calculator => draw_calculator(f, area, app),
    ActivePanel::FoodInfo => draw_food_info(f, area, app),
  }
}

// ─── Calculator ───────────────────────────────────────────────────────────────

fn draw_calculator(f: &mut Frame, area: Rect, app: &App) {
  let rect = centered_rect(area, 30, 9);
  f.render_widget(Clear, rect);
  let block = dialog_block(" Calculator ");
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let display = app.calculator.display();
  let pending = app
    .calculator
    .pending_operator()
    .map(|op| op.symbol().to_string())
    .unwrap_or_default();

  let lines = vec![
    Line::from(vec![
      Span::styled(
        format!("{display:>24}"),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        format!(" {pending}"),
        Style::default().fg(Color::Yellow),
      ),
    ]),
    Line::from(""),
    hint_line("  7 8 9  /"),
    hint_line("  4 5 6  *"),
    hint_line("  1 2 3  -"),
    hint_line("  0 . =  +"),
    Line::from(""),
    hint_line("c clear  Esc close"),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Food info ────────────────────────────────────────────────────────────────

fn draw_food_info(f: &mut Frame, area: Rect, app: &App) {
  let rect = centered_rect(area, 54, 14);
  f.render_widget(Clear, rect);
  let block = dialog_block(" Food info ");
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  // Add form replaces the list while open.
  if let Some(form) = &app.food_form {
    let lines = vec![
      field_line("name", &form.name, form.field == FoodField::Name),
      field_line("notes", &form.notes, form.field == FoodField::Notes),
      Line::from(""),
      hint_line("Tab field  Enter save  Esc cancel"),
    ];
    f.render_widget(Paragraph::new(lines), inner);
    return;
  }

  if app.food_info.is_empty() {
    f.render_widget(
      Paragraph::new("No food info yet. [a] add an entry.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = app
    .food_info
    .iter()
    .map(|info| {
      ListItem::new(Line::from(vec![
        Span::styled(
          info.name.clone(),
          Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
          format!("  {}", info.notes),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.food_cursor.min(app.food_info.len() - 1)));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner,
    &mut state,
  );
}
