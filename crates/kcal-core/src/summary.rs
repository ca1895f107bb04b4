//! Daily summary — goal versus consumed.

use serde::{Deserialize, Serialize};

use crate::meal::Meal;

/// How "remaining" is presented once consumption exceeds the goal. Both
/// behaviours exist in the wild; the default clamps, the signed variant
/// lets views show an overshoot in red.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RemainingPolicy {
  /// `max(0, goal − consumed)`.
  #[default]
  ClampToZero,
  /// `goal − consumed`, negative when over.
  AllowNegative,
}

/// Goal and consumption totals for one day's meal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
  pub goal:     u32,
  pub consumed: u32,
}

impl DaySummary {
  /// Sum the day's meals against `goal`. A missing goal row reads as 0.
  pub fn new(goal: u32, meals: &[Meal]) -> Self {
    let consumed = meals.iter().map(|m| u64::from(m.calories)).sum::<u64>();
    Self {
      goal,
      consumed: u32::try_from(consumed).unwrap_or(u32::MAX),
    }
  }

  pub fn remaining(&self, policy: RemainingPolicy) -> i64 {
    let diff = i64::from(self.goal) - i64::from(self.consumed);
    match policy {
      RemainingPolicy::ClampToZero => diff.max(0),
      RemainingPolicy::AllowNegative => diff,
    }
  }

  /// Consumed as a percentage of the goal, capped at 100. A zero goal
  /// reads as 0% so the progress gauge stays empty rather than dividing
  /// by zero.
  pub fn progress_percent(&self) -> u16 {
    if self.goal == 0 {
      return 0;
    }
    let pct = u64::from(self.consumed) * 100 / u64::from(self.goal);
    pct.min(100) as u16
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use uuid::Uuid;

  use super::*;

  fn meal(calories: u32) -> Meal {
    Meal {
      id: Uuid::new_v4(),
      name: "m".into(),
      calories,
      time: Some(Utc::now()),
      created_at: Utc::now(),
    }
  }

  #[test]
  fn remaining_clamps_at_zero_by_default() {
    let summary = DaySummary::new(1800, &[meal(1200), meal(900)]);
    assert_eq!(summary.consumed, 2100);
    assert_eq!(summary.remaining(RemainingPolicy::default()), 0);
  }

  #[test]
  fn remaining_goes_negative_under_signed_policy() {
    let summary = DaySummary::new(1800, &[meal(1200), meal(900)]);
    assert_eq!(summary.remaining(RemainingPolicy::AllowNegative), -300);
  }

  #[test]
  fn remaining_under_goal_is_the_same_for_both_policies() {
    let summary = DaySummary::new(2000, &[meal(500)]);
    assert_eq!(summary.remaining(RemainingPolicy::ClampToZero), 1500);
    assert_eq!(summary.remaining(RemainingPolicy::AllowNegative), 1500);
  }

  #[test]
  fn progress_is_capped_and_safe_on_zero_goal() {
    assert_eq!(DaySummary::new(1000, &[meal(500)]).progress_percent(), 50);
    assert_eq!(DaySummary::new(1000, &[meal(2500)]).progress_percent(), 100);
    assert_eq!(DaySummary::new(0, &[meal(500)]).progress_percent(), 0);
  }
}
