//! Day view — summary gauge, meal list, notes.

use chrono::Local;
use kcal_core::summary::RemainingPolicy;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, DayItem};

/// Render the day view into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(5), // summary
      Constraint::Min(0),    // meal + note list
    ])
    .split(area);

  draw_summary(f, rows[0], app);
  draw_entries(f, rows[1], app);
}

// ─── Summary ──────────────────────────────────────────────────────────────────

fn draw_summary(f: &mut Frame, area: Rect, app: &App) {
  let summary = app.summary();
  let today = Local::now().date_naive();

  let title = if app.selected_date == today {
    format!(" Today — {} ", app.selected_date.format("%A, %-d %B %Y"))
  } else {
    format!(" {} ", app.selected_date.format("%A, %-d %B %Y"))
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Length(1)])
    .split(inner);

  let gauge = Gauge::default()
    .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
    .percent(summary.progress_percent())
    .label(format!("{} / {} kcal", summary.consumed, summary.goal));
  f.render_widget(gauge, lines[0]);

  let remaining = summary.remaining(app.remaining_policy);
  let remaining_style = if remaining < 0 {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
  };
  // Clamped remaining never goes negative, so the over-goal hint only
  // appears under the signed policy.
  let over = matches!(app.remaining_policy, RemainingPolicy::ClampToZero)
    && summary.consumed > summary.goal;

  let mut spans = vec![
    Span::styled("remaining ", Style::default().fg(Color::DarkGray)),
    Span::styled(format!("{remaining}"), remaining_style),
    Span::styled("   goal ", Style::default().fg(Color::DarkGray)),
    Span::raw(format!("{}", summary.goal)),
    Span::styled("   consumed ", Style::default().fg(Color::DarkGray)),
    Span::raw(format!("{}", summary.consumed)),
  ];
  if over {
    spans.push(Span::styled(
      "   over goal",
      Style::default().fg(Color::Red),
    ));
  }
  f.render_widget(Paragraph::new(Line::from(spans)), lines[1]);
}

// ─── Meal and note list ───────────────────────────────────────────────────────

fn draw_entries(f: &mut Frame, area: Rect, app: &App) {
  let day_items = app.day_items();
  let meal_count = day_items
    .iter()
    .filter(|i| matches!(i, DayItem::Meal(_)))
    .count();

  let block = Block::default()
    .title(format!(
      " Meals ({meal_count}) / Notes ({}) ",
      day_items.len() - meal_count
    ))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if day_items.is_empty() {
    let hint = if app.loading {
      "Loading…"
    } else {
      "Nothing logged. [a] add a meal, [n] add a note."
    };
    f.render_widget(
      Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = day_items
    .iter()
    .map(|item| ListItem::new(entry_line(item)))
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.cursor.min(day_items.len() - 1)));

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

fn entry_line(item: &DayItem) -> Line<'static> {
  match item {
    DayItem::Meal(meal) => {
      let time = meal
        .time
        .map(|t| t.with_timezone(&Local).format("%I:%M %p").to_string())
        .unwrap_or_else(|| "--:--".to_string());
      Line::from(vec![
        Span::styled(
          format!("{time:>9}  "),
          Style::default().fg(Color::DarkGray),
        ),
        Span::raw(meal.name.clone()),
        Span::styled(
          format!("  {} kcal", meal.calories),
          Style::default().fg(Color::Cyan),
        ),
      ])
    }
    DayItem::Note(note) => Line::from(vec![
      Span::styled("     note  ", Style::default().fg(Color::DarkGray)),
      Span::styled(
        note.text.clone(),
        Style::default().fg(Color::Yellow),
      ),
    ]),
  }
}
