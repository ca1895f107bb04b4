//! Day-bucketed calorie series for charting.
//!
//! The aggregator turns a flat list of meals into one total per calendar
//! day, padded to the selected range. Day identity is **local** calendar
//! date identity: two timestamps belong to the same bucket iff they fall on
//! the same date in the supplied timezone, never the same UTC date. All
//! functions here are pure; callers pass fetched meals in as plain data.

use std::collections::BTreeMap;

use chrono::{
  DateTime, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
  TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

use crate::meal::Meal;

// ─── Range ───────────────────────────────────────────────────────────────────

/// An inclusive span of calendar days.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct DateRange {
  pub from: NaiveDate,
  pub to:   NaiveDate,
}

impl DateRange {
  pub fn new(from: NaiveDate, to: NaiveDate) -> Self { Self { from, to } }

  /// The trailing `days`-day window ending at `today` inclusive.
  /// `trailing(today, 7)` is today plus the six days before it.
  pub fn trailing(today: NaiveDate, days: u32) -> Self {
    let from = today
      .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
      .unwrap_or(today);
    Self { from, to: today }
  }
}

// ─── Chart point ─────────────────────────────────────────────────────────────

/// One output point per calendar day. `calories` is `None` for a day with
/// no meal bucket — an explicit "no data" marker, distinct from a logged
/// total of zero, so a line chart renders a gap rather than a dip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
  pub day:      NaiveDate,
  pub calories: Option<i64>,
}

impl ChartPoint {
  /// Local-midnight epoch milliseconds for this point's day, for plotting
  /// on a numeric time axis.
  pub fn day_start_millis<Tz: TimeZone>(&self, tz: &Tz) -> i64 {
    day_start(self.day, tz).timestamp_millis()
  }
}

// ─── Local-day helpers ───────────────────────────────────────────────────────

/// The local calendar date of `time` in `tz` — the bucketing key.
pub fn local_day<Tz: TimeZone>(time: DateTime<Utc>, tz: &Tz) -> NaiveDate {
  time.with_timezone(tz).date_naive()
}

/// Local midnight of `day` in `tz`, as a UTC instant.
pub fn day_start<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Utc> {
  resolve_local(day.and_time(NaiveTime::MIN), tz)
}

/// Inclusive `[start-of-day, end-of-day]` UTC bounds for one local day.
pub fn day_bounds<Tz: TimeZone>(
  day: NaiveDate,
  tz: &Tz,
) -> (DateTime<Utc>, DateTime<Utc>) {
  range_bounds(DateRange::new(day, day), tz)
}

/// Inclusive UTC bounds covering every instant of the local days in `range`.
/// The upper bound is one millisecond before the following local midnight.
pub fn range_bounds<Tz: TimeZone>(
  range: DateRange,
  tz: &Tz,
) -> (DateTime<Utc>, DateTime<Utc>) {
  let start = day_start(range.from, tz);
  let end = match range.to.succ_opt() {
    Some(next) => day_start(next, tz) - TimeDelta::milliseconds(1),
    None => day_start(range.to, tz),
  };
  (start, end)
}

/// Map a local wall-clock time to UTC. An ambiguous reading (DST fold)
/// takes the earlier instant; a non-existent reading (DST gap) falls back
/// to interpreting the wall-clock value as UTC.
fn resolve_local<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
  match tz.from_local_datetime(&naive) {
    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
      dt.with_timezone(&Utc)
    }
    LocalResult::None => Utc.from_utc_datetime(&naive),
  }
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Aggregate meals into a day-bucketed, range-padded calorie series.
///
/// - Meals with no `time` are excluded. Duplicates in a bucket simply add.
/// - With a range: both ends are padded by `buffer_days` and one point is
///   emitted per padded day, ascending. A day's value is the bucket sum
///   when the day is a key in the bucket map, else `None` — a zero-meal
///   day inside the selected range stays `None`, not `Some(0)`.
/// - Without a range: only observed days are emitted, ascending.
/// - An empty meal list yields an empty series regardless of range.
pub fn daily_series<Tz: TimeZone>(
  meals: &[Meal],
  range: Option<DateRange>,
  buffer_days: u32,
  tz: &Tz,
) -> Vec<ChartPoint> {
  if meals.is_empty() {
    return Vec::new();
  }

  // 1) Sum calories per local day.
  let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
  for meal in meals {
    let Some(time) = meal.time else { continue };
    *totals.entry(local_day(time, tz)).or_insert(0) +=
      i64::from(meal.calories);
  }

  // 2) With a range: pad both sides and emit every day in between.
  if let Some(range) = range {
    let buffer = Days::new(u64::from(buffer_days));
    let padded_from = range.from.checked_sub_days(buffer).unwrap_or(range.from);
    let padded_to = range.to.checked_add_days(buffer).unwrap_or(range.to);

    let mut out = Vec::new();
    let mut day = padded_from;
    while day <= padded_to {
      out.push(ChartPoint { day, calories: totals.get(&day).copied() });
      day = match day.succ_opt() {
        Some(next) => next,
        None => break,
      };
    }
    return out;
  }

  // 3) No range: observed days only. BTreeMap iteration is ascending.
  totals
    .into_iter()
    .map(|(day, calories)| ChartPoint { day, calories: Some(calories) })
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::FixedOffset;
  use uuid::Uuid;

  use super::*;

  /// UTC+2 — fixed so the tests are independent of the host timezone.
  fn tz() -> FixedOffset { FixedOffset::east_opt(2 * 3600).unwrap() }

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn meal_at(calories: u32, time: Option<DateTime<Utc>>) -> Meal {
    Meal {
      id: Uuid::new_v4(),
      name: "test meal".into(),
      calories,
      time,
      created_at: Utc::now(),
    }
  }

  /// Noon local time on the given day, as a UTC instant.
  fn noon(day: NaiveDate) -> DateTime<Utc> {
    tz()
      .from_local_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
      .unwrap()
      .with_timezone(&Utc)
  }

  #[test]
  fn buckets_and_sums_per_day_without_range() {
    let d0 = date(2025, 3, 1);
    let d1 = date(2025, 3, 2);
    let meals = vec![
      meal_at(100, Some(noon(d0))),
      meal_at(50, Some(noon(d0))),
      meal_at(20, Some(noon(d1))),
    ];

    let series = daily_series(&meals, None, 0, &tz());
    assert_eq!(series, vec![
      ChartPoint { day: d0, calories: Some(150) },
      ChartPoint { day: d1, calories: Some(20) },
    ]);
  }

  #[test]
  fn padding_fills_gaps_with_no_data_marker() {
    let d0 = date(2025, 3, 10);
    let meals = vec![meal_at(100, Some(noon(d0)))];
    let range = DateRange::new(d0, d0);

    let series = daily_series(&meals, Some(range), 1, &tz());
    assert_eq!(series, vec![
      ChartPoint { day: date(2025, 3, 9), calories: None },
      ChartPoint { day: d0, calories: Some(100) },
      ChartPoint { day: date(2025, 3, 11), calories: None },
    ]);
  }

  #[test]
  fn zero_meal_day_inside_range_is_a_gap_not_zero() {
    let d0 = date(2025, 3, 10);
    let d2 = date(2025, 3, 12);
    let meals =
      vec![meal_at(400, Some(noon(d0))), meal_at(600, Some(noon(d2)))];
    let range = DateRange::new(d0, d2);

    let series = daily_series(&meals, Some(range), 0, &tz());
    assert_eq!(series.len(), 3);
    // The empty middle day is an explicit gap, never Some(0).
    assert_eq!(series[1], ChartPoint {
      day: date(2025, 3, 11),
      calories: None,
    });
  }

  #[test]
  fn empty_input_yields_empty_output_even_with_range() {
    let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));
    assert!(daily_series(&[], Some(range), 7, &tz()).is_empty());
    assert!(daily_series(&[], None, 0, &tz()).is_empty());
  }

  #[test]
  fn no_range_returns_only_observed_days_ascending() {
    let d0 = date(2025, 3, 1);
    let d5 = date(2025, 3, 6);
    // Inserted out of order; output must be ascending with no padding.
    let meals =
      vec![meal_at(300, Some(noon(d5))), meal_at(200, Some(noon(d0)))];

    let series = daily_series(&meals, None, 3, &tz());
    assert_eq!(series, vec![
      ChartPoint { day: d0, calories: Some(200) },
      ChartPoint { day: d5, calories: Some(300) },
    ]);
  }

  #[test]
  fn meals_without_time_are_excluded() {
    let d0 = date(2025, 3, 1);
    let meals = vec![meal_at(100, Some(noon(d0))), meal_at(999, None)];

    let series = daily_series(&meals, None, 0, &tz());
    assert_eq!(series, vec![ChartPoint { day: d0, calories: Some(100) }]);
  }

  #[test]
  fn local_day_splits_buckets_across_local_midnight() {
    let tz = tz();
    // 23:59 and 00:01 local — two minutes apart, different calendar days.
    let before = tz
      .with_ymd_and_hms(2025, 3, 1, 23, 59, 0)
      .unwrap()
      .with_timezone(&Utc);
    let after = tz
      .with_ymd_and_hms(2025, 3, 2, 0, 1, 0)
      .unwrap()
      .with_timezone(&Utc);
    let meals = vec![meal_at(100, Some(before)), meal_at(50, Some(after))];

    let series = daily_series(&meals, None, 0, &tz);
    assert_eq!(series, vec![
      ChartPoint { day: date(2025, 3, 1), calories: Some(100) },
      ChartPoint { day: date(2025, 3, 2), calories: Some(50) },
    ]);
  }

  #[test]
  fn local_not_utc_midnight_decides_the_bucket() {
    let tz = tz();
    // 23:30 UTC on 1 Mar is already 01:30 on 2 Mar in UTC+2.
    let time = Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap();
    let meals = vec![meal_at(80, Some(time))];

    let series = daily_series(&meals, None, 0, &tz);
    assert_eq!(series, vec![ChartPoint {
      day: date(2025, 3, 2),
      calories: Some(80),
    }]);
  }

  #[test]
  fn range_bounds_are_inclusive_of_the_whole_last_day() {
    let tz = tz();
    let range = DateRange::new(date(2025, 3, 1), date(2025, 3, 2));
    let (start, end) = range_bounds(range, &tz);

    assert_eq!(start, day_start(date(2025, 3, 1), &tz));
    // One millisecond before the midnight that opens 3 Mar.
    assert_eq!(
      end + TimeDelta::milliseconds(1),
      day_start(date(2025, 3, 3), &tz)
    );
  }

  #[test]
  fn trailing_range_spans_today_and_the_days_before() {
    let today = date(2025, 3, 10);
    let range = DateRange::trailing(today, 7);
    assert_eq!(range.from, date(2025, 3, 4));
    assert_eq!(range.to, today);
  }

  #[test]
  fn day_start_millis_is_local_midnight() {
    let tz = tz();
    let point = ChartPoint { day: date(2025, 3, 1), calories: None };
    let expected = day_start(date(2025, 3, 1), &tz).timestamp_millis();
    assert_eq!(point.day_start_millis(&tz), expected);
  }
}
