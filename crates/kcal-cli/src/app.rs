//! Application state machine and event dispatcher.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kcal_core::{
  chart::{self, ChartPoint, DateRange},
  food::FoodInfo,
  goal::CaloriesConfig,
  input,
  meal::{Meal, NewMeal},
  note::Note,
  summary::{DaySummary, RemainingPolicy},
};

use crate::{
  cache::QueryCache,
  calc::{Calculator, Op},
  client::ApiClient,
};

/// Days of context added on each side of the selected chart range.
pub const CHART_BUFFER_DAYS: u32 = 1;

/// Length in days of the default chart range (today plus the six before).
pub const DEFAULT_RANGE_DAYS: u32 = 7;

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Single-day view: summary, meal list, notes.
  Day,
  /// Date-range view: line chart plus the range's meals.
  Chart,
}

// ─── Cached fetch results ─────────────────────────────────────────────────────

/// Meals and notes fetched together for one cache key, passed to the
/// aggregation and summary code as plain data.
#[derive(Debug, Clone, Default)]
pub struct DayData {
  pub meals: Vec<Meal>,
  pub notes: Vec<Note>,
}

// ─── Forms and dialogs ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealField {
  Name,
  Calories,
}

impl MealField {
  fn next(self) -> Self {
    match self {
      MealField::Name => MealField::Calories,
      MealField::Calories => MealField::Name,
    }
  }
}

impl Default for MealField {
  fn default() -> Self { MealField::Name }
}

/// Text buffers for the add-meal dialog.
#[derive(Debug, Clone, Default)]
pub struct MealForm {
  pub name:     String,
  pub calories: String,
  pub field:    MealField,
}

impl MealForm {
  fn active_mut(&mut self) -> &mut String {
    match self.field {
      MealField::Name => &mut self.name,
      MealField::Calories => &mut self.calories,
    }
  }
}

/// Edit buffers bound to an in-flight meal edit. Created on begin-edit,
/// discarded on cancel or submit; `original` keeps the unmodified record
/// so the pending text never leaks anywhere else.
#[derive(Debug, Clone)]
pub struct EditDraft {
  pub original: Meal,
  pub name:     String,
  pub calories: String,
  pub field:    MealField,
}

impl EditDraft {
  pub fn begin(original: Meal) -> Self {
    Self {
      name:     original.name.clone(),
      calories: original.calories.to_string(),
      field:    MealField::Name,
      original,
    }
  }

  fn active_mut(&mut self) -> &mut String {
    match self.field {
      MealField::Name => &mut self.name,
      MealField::Calories => &mut self.calories,
    }
  }
}

/// The currently open modal dialog, if any. Dialogs are mutually
/// exclusive by construction.
#[derive(Debug, Clone)]
pub enum Dialog {
  None,
  AddMeal(MealForm),
  EditMeal(EditDraft),
  ConfirmDeleteMeal(Meal),
  AddNote(String),
  EditGoal(String),
}

/// Side panel inside the add-meal dialog. A single enum rather than two
/// booleans: opening one panel necessarily closes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
  None,
  Calculator,
  FoodInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodField {
  Name,
  Notes,
}

/// Text buffers for the food-info add form.
#[derive(Debug, Clone)]
pub struct FoodForm {
  pub name:  String,
  pub notes: String,
  pub field: FoodField,
}

impl FoodForm {
  fn new() -> Self {
    Self { name: String::new(), notes: String::new(), field: FoodField::Name }
  }

  fn active_mut(&mut self) -> &mut String {
    match self.field {
      FoodField::Name => &mut self.name,
      FoodField::Notes => &mut self.notes,
    }
  }
}

/// One row of the day view's combined list: meals first, then notes.
#[derive(Debug, Clone)]
pub enum DayItem {
  Meal(Meal),
  Note(Note),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// The day shown in the day view.
  pub selected_date: NaiveDate,

  /// The span shown in the chart view.
  pub range: DateRange,

  /// Cached day fetches, keyed by date.
  pub days: QueryCache<NaiveDate, DayData>,

  /// Cached range fetches, keyed by the exact range.
  pub ranges: QueryCache<DateRange, DayData>,

  /// The goal row, refreshed together with each day fetch.
  pub goal: Option<CaloriesConfig>,

  /// How "remaining" is presented once consumption exceeds the goal.
  pub remaining_policy: RemainingPolicy,

  pub dialog: Dialog,

  /// Which side panel the add-meal dialog is showing.
  pub panel: ActivePanel,

  pub calculator: Calculator,

  /// Fetched food-info entries, loaded when the panel first opens.
  pub food_info: Vec<FoodInfo>,
  pub food_cursor: usize,
  pub food_form: Option<FoodForm>,

  /// Cursor position within the day view's combined meal+note list.
  pub cursor: usize,

  /// Scroll offset within the chart view's meal list.
  pub chart_scroll: usize,

  /// A fetch is in flight.
  pub loading: bool,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  pub fn new(client: ApiClient, remaining_policy: RemainingPolicy) -> Self {
    let today = Local::now().date_naive();
    Self {
      screen: Screen::Day,
      selected_date: today,
      range: DateRange::trailing(today, DEFAULT_RANGE_DAYS),
      days: QueryCache::new(),
      ranges: QueryCache::new(),
      goal: None,
      remaining_policy,
      dialog: Dialog::None,
      panel: ActivePanel::None,
      calculator: Calculator::new(),
      food_info: Vec::new(),
      food_cursor: 0,
      food_form: None,
      cursor: 0,
      chart_scroll: 0,
      loading: false,
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Derived state ─────────────────────────────────────────────────────────

  pub fn day_data(&self) -> Option<&DayData> {
    self.days.get(&self.selected_date)
  }

  pub fn range_data(&self) -> Option<&DayData> { self.ranges.get(&self.range) }

  /// Goal versus consumed for the selected day. A missing goal row reads
  /// as a goal of 0.
  pub fn summary(&self) -> DaySummary {
    let goal = self.goal.map(|g| g.total_calories).unwrap_or(0);
    let meals = self.day_data().map(|d| d.meals.as_slice()).unwrap_or(&[]);
    DaySummary::new(goal, meals)
  }

  /// The padded, gap-filled series for the chart view.
  pub fn chart_series(&self) -> Vec<ChartPoint> {
    let meals = self.range_data().map(|d| d.meals.as_slice()).unwrap_or(&[]);
    chart::daily_series(meals, Some(self.range), CHART_BUFFER_DAYS, &Local)
  }

  /// The day view's combined list: meals first, then notes.
  pub fn day_items(&self) -> Vec<DayItem> {
    let Some(data) = self.day_data() else { return Vec::new() };
    data
      .meals
      .iter()
      .cloned()
      .map(DayItem::Meal)
      .chain(data.notes.iter().cloned().map(DayItem::Note))
      .collect()
  }

  fn item_at_cursor(&self) -> Option<DayItem> {
    self.day_items().into_iter().nth(self.cursor)
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch meals, notes, and the goal row for the selected day.
  pub async fn load_day(&mut self) -> Result<()> {
    self.loading = true;
    self.status_msg.clear();

    let date = self.selected_date;
    let ticket = self.days.begin(date);
    let (from, to) = chart::day_bounds(date, &Local);

    let result = async {
      let meals = self.client.meals_between(from, to).await?;
      let notes = self.client.notes_between(from, to).await?;
      let goal = self.client.daily_goal().await?;
      Ok::<_, anyhow::Error>((meals, notes, goal))
    }
    .await;
    self.loading = false;

    match result {
      Ok((meals, notes, goal)) => {
        self.goal = goal;
        self.days.complete(&date, ticket, DayData { meals, notes });
        self.cursor = 0;
        Ok(())
      }
      Err(e) => {
        self.status_msg = format!("Failed to load data: {e}");
        Err(e)
      }
    }
  }

  /// Fetch meals and notes for the selected chart range.
  pub async fn load_range(&mut self) -> Result<()> {
    self.loading = true;
    self.status_msg.clear();

    let range = self.range;
    let ticket = self.ranges.begin(range);
    let (from, to) = chart::range_bounds(range, &Local);

    let result = async {
      let meals = self.client.meals_between(from, to).await?;
      let notes = self.client.notes_between(from, to).await?;
      Ok::<_, anyhow::Error>((meals, notes))
    }
    .await;
    self.loading = false;

    match result {
      Ok((meals, notes)) => {
        self.ranges.complete(&range, ticket, DayData { meals, notes });
        self.chart_scroll = 0;
        Ok(())
      }
      Err(e) => {
        self.status_msg = format!("Failed to load data: {e}");
        Err(e)
      }
    }
  }

  /// Refetch the selected day unless a fresh cached read exists.
  pub async fn ensure_day(&mut self) {
    if self.days.fresh(&self.selected_date).is_none() {
      self.load_day().await.ok();
    }
  }

  /// Refetch the selected range unless a fresh cached read exists.
  pub async fn ensure_range(&mut self) {
    if self.ranges.fresh(&self.range).is_none() {
      self.load_range().await.ok();
    }
  }

  /// Invalidate-and-refetch after an acknowledged meal or note write.
  /// Both the day key and the range key may cover the written record.
  async fn after_entry_write(&mut self) {
    self.days.invalidate(&self.selected_date);
    self.ranges.invalidate(&self.range);
    match self.screen {
      Screen::Day => self.load_day().await.ok(),
      Screen::Chart => self.load_range().await.ok(),
    };
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return Ok(false);
    }

    // An open side panel captures the keyboard ahead of the dialog.
    if self.panel != ActivePanel::None {
      self.handle_panel_key(key).await?;
      return Ok(true);
    }

    if !matches!(self.dialog, Dialog::None) {
      self.handle_dialog_key(key).await?;
      return Ok(true);
    }

    match self.screen {
      Screen::Day => self.handle_day_key(key).await,
      Screen::Chart => self.handle_chart_key(key).await,
    }
  }

  async fn handle_day_key(&mut self, key: KeyEvent) -> Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Switch to the chart view.
      KeyCode::Tab | KeyCode::Char('2') => {
        self.screen = Screen::Chart;
        self.ensure_range().await;
      }

      // Date navigation: the fetch is keyed by the date, so moving back
      // to an already-seen day renders instantly from cache.
      KeyCode::Left | KeyCode::Char('h') => {
        self.selected_date =
          self.selected_date.pred_opt().unwrap_or(self.selected_date);
        self.cursor = 0;
        self.ensure_day().await;
      }
      KeyCode::Right | KeyCode::Char('l') => {
        self.selected_date =
          self.selected_date.succ_opt().unwrap_or(self.selected_date);
        self.cursor = 0;
        self.ensure_day().await;
      }
      KeyCode::Char('t') => {
        self.selected_date = Local::now().date_naive();
        self.cursor = 0;
        self.ensure_day().await;
      }

      // List navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.day_items().len();
        if len > 0 && self.cursor + 1 < len {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cursor = self.cursor.saturating_sub(1);
      }

      // Dialogs
      KeyCode::Char('a') => {
        self.dialog = Dialog::AddMeal(MealForm::default());
      }
      KeyCode::Char('n') => {
        self.dialog = Dialog::AddNote(String::new());
      }
      KeyCode::Char('e') => {
        if let Some(DayItem::Meal(meal)) = self.item_at_cursor() {
          self.dialog = Dialog::EditMeal(EditDraft::begin(meal));
        }
      }
      KeyCode::Char('d') => match self.item_at_cursor() {
        Some(DayItem::Meal(meal)) => {
          self.dialog = Dialog::ConfirmDeleteMeal(meal);
        }
        Some(DayItem::Note(note)) => {
          match self.client.delete_note(note.id).await {
            Ok(()) => self.after_entry_write().await,
            Err(e) => self.status_msg = format!("Error: {e}"),
          }
        }
        None => {}
      },
      KeyCode::Char('g') => match self.goal {
        Some(goal) => {
          self.dialog = Dialog::EditGoal(goal.total_calories.to_string());
        }
        // The update path needs an existing row id; block instead of
        // letting the submit fail later.
        None => {
          self.status_msg =
            "No goal configured — create one with kcal-server --init-goal"
              .to_string();
        }
      },

      // Manual refetch
      KeyCode::Char('r') => {
        self.days.invalidate(&self.selected_date);
        self.load_day().await.ok();
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_chart_key(&mut self, key: KeyEvent) -> Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Back to the day view.
      KeyCode::Tab | KeyCode::Char('1') => {
        self.screen = Screen::Day;
        self.ensure_day().await;
      }

      // Slide the whole window by its own length.
      KeyCode::Left | KeyCode::Char('h') => {
        self.shift_range(-1);
        self.ensure_range().await;
      }
      KeyCode::Right | KeyCode::Char('l') => {
        self.shift_range(1);
        self.ensure_range().await;
      }

      // Preset window lengths, ending today.
      KeyCode::Char('w') => {
        self.set_trailing_range(7);
        self.ensure_range().await;
      }
      KeyCode::Char('f') => {
        self.set_trailing_range(14);
        self.ensure_range().await;
      }
      KeyCode::Char('m') => {
        self.set_trailing_range(30);
        self.ensure_range().await;
      }

      // Scroll the range meal list.
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self
          .range_data()
          .map(|d| d.meals.len())
          .unwrap_or(0);
        if len > 0 && self.chart_scroll + 1 < len {
          self.chart_scroll += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.chart_scroll = self.chart_scroll.saturating_sub(1);
      }

      // Manual refetch
      KeyCode::Char('r') => {
        self.ranges.invalidate(&self.range);
        self.load_range().await.ok();
      }

      _ => {}
    }
    Ok(true)
  }

  fn shift_range(&mut self, direction: i64) {
    let len = (self.range.to - self.range.from).num_days() + 1;
    let shift = chrono::Days::new(len.unsigned_abs());
    let (from, to) = if direction < 0 {
      (
        self.range.from.checked_sub_days(shift),
        self.range.to.checked_sub_days(shift),
      )
    } else {
      (
        self.range.from.checked_add_days(shift),
        self.range.to.checked_add_days(shift),
      )
    };
    if let (Some(from), Some(to)) = (from, to) {
      self.range = DateRange::new(from, to);
      self.chart_scroll = 0;
    }
  }

  fn set_trailing_range(&mut self, days: u32) {
    self.range = DateRange::trailing(Local::now().date_naive(), days);
    self.chart_scroll = 0;
  }

  // ── Dialog keys ───────────────────────────────────────────────────────────

  async fn handle_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
    let dialog = std::mem::replace(&mut self.dialog, Dialog::None);
    match dialog {
      Dialog::None => {}

      Dialog::AddMeal(mut form) => match key.code {
        KeyCode::Esc => {
          self.panel = ActivePanel::None;
        }
        KeyCode::Enter => self.submit_add_meal(form).await,
        KeyCode::Tab => {
          form.field = form.field.next();
          self.dialog = Dialog::AddMeal(form);
        }
        KeyCode::Backspace => {
          form.active_mut().pop();
          self.dialog = Dialog::AddMeal(form);
        }
        KeyCode::Char('k')
          if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
          self.panel = ActivePanel::Calculator;
          self.dialog = Dialog::AddMeal(form);
        }
        KeyCode::Char('f')
          if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
          self.open_food_panel().await;
          self.dialog = Dialog::AddMeal(form);
        }
        KeyCode::Char(c) => {
          form.active_mut().push(c);
          self.dialog = Dialog::AddMeal(form);
        }
        _ => self.dialog = Dialog::AddMeal(form),
      },

      Dialog::EditMeal(mut draft) => match key.code {
        KeyCode::Esc => {}
        KeyCode::Enter => self.submit_edit_meal(draft).await,
        KeyCode::Tab => {
          draft.field = draft.field.next();
          self.dialog = Dialog::EditMeal(draft);
        }
        KeyCode::Backspace => {
          draft.active_mut().pop();
          self.dialog = Dialog::EditMeal(draft);
        }
        KeyCode::Char(c) => {
          draft.active_mut().push(c);
          self.dialog = Dialog::EditMeal(draft);
        }
        _ => self.dialog = Dialog::EditMeal(draft),
      },

      Dialog::ConfirmDeleteMeal(meal) => match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
          match self.client.delete_meal(meal.id).await {
            Ok(()) => self.after_entry_write().await,
            Err(e) => self.status_msg = format!("Error: {e}"),
          }
        }
        KeyCode::Esc | KeyCode::Char('n') => {}
        _ => self.dialog = Dialog::ConfirmDeleteMeal(meal),
      },

      Dialog::AddNote(mut text) => match key.code {
        KeyCode::Esc => {}
        KeyCode::Enter => self.submit_note(text).await,
        KeyCode::Backspace => {
          text.pop();
          self.dialog = Dialog::AddNote(text);
        }
        KeyCode::Char(c) => {
          text.push(c);
          self.dialog = Dialog::AddNote(text);
        }
        _ => self.dialog = Dialog::AddNote(text),
      },

      Dialog::EditGoal(mut text) => match key.code {
        KeyCode::Esc => {}
        KeyCode::Enter => self.submit_goal(text).await,
        KeyCode::Backspace => {
          text.pop();
          self.dialog = Dialog::EditGoal(text);
        }
        KeyCode::Char(c) => {
          text.push(c);
          self.dialog = Dialog::EditGoal(text);
        }
        _ => self.dialog = Dialog::EditGoal(text),
      },
    }
    Ok(())
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  async fn submit_add_meal(&mut self, form: MealForm) {
    // Invalid input: silent no-op, the dialog stays open.
    let Some((name, calories)) =
      input::parse_meal_form(&form.name, &form.calories)
    else {
      self.dialog = Dialog::AddMeal(form);
      return;
    };

    match self.client.insert_meal(&NewMeal::new(name, calories)).await {
      Ok(_) => {
        self.panel = ActivePanel::None;
        self.after_entry_write().await;
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        self.dialog = Dialog::AddMeal(form);
      }
    }
  }

  async fn submit_edit_meal(&mut self, draft: EditDraft) {
    let Some((name, calories)) =
      input::parse_meal_form(&draft.name, &draft.calories)
    else {
      self.dialog = Dialog::EditMeal(draft);
      return;
    };

    match self
      .client
      .update_meal(draft.original.id, &name, calories)
      .await
    {
      Ok(_) => self.after_entry_write().await,
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        self.dialog = Dialog::EditMeal(draft);
      }
    }
  }

  async fn submit_note(&mut self, text: String) {
    let Some(parsed) = input::parse_note_form(&text) else {
      self.dialog = Dialog::AddNote(text);
      return;
    };

    match self.client.insert_note(&parsed).await {
      Ok(_) => self.after_entry_write().await,
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        self.dialog = Dialog::AddNote(text);
      }
    }
  }

  async fn submit_goal(&mut self, text: String) {
    let Some(total) = input::parse_goal_form(&text) else {
      self.dialog = Dialog::EditGoal(text);
      return;
    };
    // Guarded at dialog-open time, but the goal could have vanished since.
    let Some(goal) = self.goal else {
      self.status_msg = "No goal row to update".to_string();
      return;
    };

    match self.client.update_goal(goal.id, total).await {
      Ok(updated) => {
        self.goal = Some(updated);
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        self.dialog = Dialog::EditGoal(text);
      }
    }
  }

  // ── Panel keys ────────────────────────────────────────────────────────────

  async fn open_food_panel(&mut self) {
    self.panel = ActivePanel::FoodInfo;
    self.food_cursor = 0;
    self.food_form = None;
    self.reload_food_info().await;
  }

  async fn reload_food_info(&mut self) {
    match self.client.list_food_info().await {
      Ok(list) => {
        self.food_info = list;
        self.food_cursor = self
          .food_cursor
          .min(self.food_info.len().saturating_sub(1));
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  async fn handle_panel_key(&mut self, key: KeyEvent) -> Result<()> {
    match self.panel {
      ActivePanel::None => {}
      ActivePanel::Calculator => self.handle_calculator_key(key),
      ActivePanel::FoodInfo => self.handle_food_key(key).await,
    }
    Ok(())
  }

  fn handle_calculator_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => self.panel = ActivePanel::None,
      KeyCode::Char(c @ '0'..='9') => self.calculator.input_digit(c),
      KeyCode::Char('.') => self.calculator.input_decimal(),
      KeyCode::Char('+') => self.calculator.apply_operator(Op::Add),
      KeyCode::Char('-') => self.calculator.apply_operator(Op::Sub),
      KeyCode::Char('*') => self.calculator.apply_operator(Op::Mul),
      KeyCode::Char('/') => self.calculator.apply_operator(Op::Div),
      KeyCode::Char('=') | KeyCode::Enter => self.calculator.equals(),
      KeyCode::Char('c') => self.calculator.clear(),
      _ => {}
    }
  }

  async fn handle_food_key(&mut self, key: KeyEvent) {
    // An open add form captures the keyboard.
    if let Some(mut form) = self.food_form.take() {
      match key.code {
        KeyCode::Esc => {}
        KeyCode::Tab => {
          form.field = match form.field {
            FoodField::Name => FoodField::Notes,
            FoodField::Notes => FoodField::Name,
          };
          self.food_form = Some(form);
        }
        KeyCode::Enter => {
          let Some((name, notes)) =
            input::parse_food_form(&form.name, &form.notes)
          else {
            self.food_form = Some(form);
            return;
          };
          match self.client.insert_food_info(&name, &notes).await {
            Ok(_) => self.reload_food_info().await,
            Err(e) => {
              self.status_msg = format!("Error: {e}");
              self.food_form = Some(form);
            }
          }
        }
        KeyCode::Backspace => {
          form.active_mut().pop();
          self.food_form = Some(form);
        }
        KeyCode::Char(c) => {
          form.active_mut().push(c);
          self.food_form = Some(form);
        }
        _ => self.food_form = Some(form),
      }
      return;
    }

    match key.code {
      KeyCode::Esc => self.panel = ActivePanel::None,
      KeyCode::Down | KeyCode::Char('j') => {
        if !self.food_info.is_empty()
          && self.food_cursor + 1 < self.food_info.len()
        {
          self.food_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.food_cursor = self.food_cursor.saturating_sub(1);
      }
      KeyCode::Char('a') => self.food_form = Some(FoodForm::new()),
      KeyCode::Char('d') => {
        if let Some(info) = self.food_info.get(self.food_cursor).cloned() {
          match self.client.delete_food_info(info.id).await {
            Ok(()) => self.reload_food_info().await,
            Err(e) => self.status_msg = format!("Error: {e}"),
          }
        }
      }
      _ => {}
    }
  }
}
