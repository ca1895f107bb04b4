//! Chart view — calorie line chart over a date range, plus the range's
//! meals grouped by day.

use chrono::Local;
use kcal_core::chart::ChartPoint;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  symbols,
  text::{Line, Span},
  widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::app::App;

/// Rough basal burn, drawn as a reference line once intake crosses it.
const BMR_CALORIES: i64 = 1500;

/// Render the chart view into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
    .split(area);

  draw_chart(f, cols[0], app);
  draw_meal_list(f, cols[1], app);
}

// ─── Line chart ───────────────────────────────────────────────────────────────

fn draw_chart(f: &mut Frame, area: Rect, app: &App) {
  let series = app.chart_series();

  let title = format!(
    " {} — {} ",
    app.range.from.format("%-d %b %Y"),
    app.range.to.format("%-d %b %Y")
  );
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if series.iter().all(|p| p.calories.is_none()) {
    f.render_widget(
      Paragraph::new("No meals in this range.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  // Days with no data split the line into separate segments, so gaps
  // render as gaps rather than as zero-calorie days.
  let segments = contiguous_segments(&series);

  let max_calories = series
    .iter()
    .filter_map(|p| p.calories)
    .max()
    .unwrap_or(0);
  let goal = app.goal.map(|g| i64::from(g.total_calories)).unwrap_or(0);
  let show_bmr = max_calories > BMR_CALORIES;

  let y_max = {
    let mut top = max_calories.max(goal);
    if show_bmr {
      top = top.max(BMR_CALORIES);
    }
    // Headroom so the highest point doesn't sit on the frame.
    (top as f64 * 1.1).max(100.0)
  };

  let x_min = series
    .first()
    .map(|p| p.day_start_millis(&Local) as f64)
    .unwrap_or(0.0);
  let x_max = series
    .last()
    .map(|p| p.day_start_millis(&Local) as f64)
    .unwrap_or(1.0)
    .max(x_min + 1.0);

  let goal_line = [(x_min, goal as f64), (x_max, goal as f64)];
  let bmr_line = [(x_min, BMR_CALORIES as f64), (x_max, BMR_CALORIES as f64)];

  let mut datasets: Vec<Dataset> = segments
    .iter()
    .map(|seg| {
      Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(seg)
    })
    .collect();

  if goal > 0 {
    datasets.push(
      Dataset::default()
        .name("goal")
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Red))
        .data(&goal_line),
    );
  }
  if show_bmr {
    datasets.push(
      Dataset::default()
        .name("bmr")
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&bmr_line),
    );
  }

  let x_labels = x_axis_labels(&series);
  let y_labels = vec![
    Span::raw("0"),
    Span::raw(format!("{}", (y_max / 2.0) as i64)),
    Span::raw(format!("{}", y_max as i64)),
  ];

  let chart = Chart::new(datasets)
    .x_axis(
      Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([x_min, x_max])
        .labels(x_labels),
    )
    .y_axis(
      Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([0.0, y_max])
        .labels(y_labels),
    );
  f.render_widget(chart, inner);
}

/// Split the padded series into runs of consecutive days that have data.
fn contiguous_segments(series: &[ChartPoint]) -> Vec<Vec<(f64, f64)>> {
  let mut segments = Vec::new();
  let mut current: Vec<(f64, f64)> = Vec::new();

  for point in series {
    match point.calories {
      Some(calories) => current
        .push((point.day_start_millis(&Local) as f64, calories as f64)),
      None => {
        if !current.is_empty() {
          segments.push(std::mem::take(&mut current));
        }
      }
    }
  }
  if !current.is_empty() {
    segments.push(current);
  }
  segments
}

fn x_axis_labels(series: &[ChartPoint]) -> Vec<Span<'static>> {
  let first = series.first();
  let mid = series.get(series.len() / 2);
  let last = series.last();
  [first, mid, last]
    .into_iter()
    .flatten()
    .map(|p| Span::raw(p.day.format("%-d %b").to_string()))
    .collect()
}

// ─── Range meal list ──────────────────────────────────────────────────────────

fn draw_meal_list(f: &mut Frame, area: Rect, app: &App) {
  let meals = app
    .range_data()
    .map(|d| d.meals.as_slice())
    .unwrap_or(&[]);

  let block = Block::default()
    .title(format!(" Meals ({}) ", meals.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if meals.is_empty() {
    f.render_widget(
      Paragraph::new("No meals in this range.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  // Flat list with a divider line whenever the local day changes.
  let mut lines: Vec<Line> = Vec::new();
  let mut last_day = None;
  for meal in meals {
    let day = meal.time.map(|t| t.with_timezone(&Local).date_naive());
    if day != last_day {
      if let Some(day) = day {
        lines.push(Line::from(Span::styled(
          day.format("%a %-d %b %Y").to_string(),
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        )));
      }
      last_day = day;
    }
    lines.push(Line::from(vec![
      Span::raw(format!("  {}", meal.name)),
      Span::styled(
        format!("  {} kcal", meal.calories),
        Style::default().fg(Color::DarkGray),
      ),
    ]));
  }

  let para =
    Paragraph::new(lines).scroll((app.chart_scroll as u16, 0));
  f.render_widget(para, inner);
}
