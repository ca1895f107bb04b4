//! TUI rendering — orchestrates all panes.

pub mod chart;
pub mod day;
pub mod dialog;
pub mod panel;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{ActivePanel, App, Dialog, Screen};

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

  draw_header(f, rows[0], app);

  match app.screen {
    Screen::Day => day::draw(f, rows[1], app),
    Screen::Chart => chart::draw(f, rows[1], app),
  }

  draw_status(f, rows[2], app);

  // Modal layers: dialog first, then a side panel on top of it.
  if !matches!(app.dialog, Dialog::None) {
    dialog::draw(f, rows[1], app);
  }
  if app.panel != ActivePanel::None {
    panel::draw(f, rows[1], app);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let left = Span::styled(
    " kcal  [1] day  [2] chart  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right_text = if app.loading {
    "loading… ".to_string()
  } else {
    format!("{} ", Local::now().format("%Y-%m-%d"))
  };
  let right =
    Span::styled(right_text, Style::default().fg(Color::DarkGray));

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.panel {
    ActivePanel::Calculator => {
      ("CALC", "0-9 . + - * / = digits  c clear  Esc close")
    }
    ActivePanel::FoodInfo if app.food_form.is_some() => {
      ("FOOD", "Type to edit  Tab switch field  Enter save  Esc cancel")
    }
    ActivePanel::FoodInfo => {
      ("FOOD", "↑↓/jk navigate  a add  d delete  Esc close")
    }
    ActivePanel::None => match &app.dialog {
      Dialog::AddMeal(_) => (
        "ADD",
        "Tab field  Enter save  Ctrl-K calc  Ctrl-F foods  Esc cancel",
      ),
      Dialog::EditMeal(_) => {
        ("EDIT", "Tab field  Enter save  Esc cancel")
      }
      Dialog::ConfirmDeleteMeal(_) => {
        ("DELETE", "y/Enter confirm  n/Esc cancel")
      }
      Dialog::AddNote(_) => ("NOTE", "Type the note  Enter save  Esc cancel"),
      Dialog::EditGoal(_) => ("GOAL", "Enter save  Esc cancel"),
      Dialog::None => match app.screen {
        Screen::Day => (
          "DAY",
          "←→/hl day  t today  ↑↓/jk select  a meal  n note  e edit  d delete  g goal  r refresh",
        ),
        Screen::Chart => (
          "CHART",
          "←→/hl shift  w/f/m 7/14/30d  ↑↓/jk scroll  r refresh  Tab day view",
        ),
      },
    },
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
      .bg(Color::Cyan)
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
