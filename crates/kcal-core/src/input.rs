//! Client-side form validation.
//!
//! Invalid input is rejected before any network call is made, and the
//! rejection is silent: parsers return `None` and the submission becomes a
//! no-op, mirroring the form behaviour the views implement.

/// Validate an add/edit-meal form. The name is trimmed and must be
/// non-empty; calories must parse as a positive integer.
pub fn parse_meal_form(name: &str, calories: &str) -> Option<(String, u32)> {
  let name = name.trim();
  if name.is_empty() {
    return None;
  }
  let calories: u32 = calories.trim().parse().ok()?;
  if calories == 0 {
    return None;
  }
  Some((name.to_owned(), calories))
}

/// Validate a note form: non-empty after trimming.
pub fn parse_note_form(text: &str) -> Option<String> {
  let text = text.trim();
  (!text.is_empty()).then(|| text.to_owned())
}

/// Validate a daily-goal form: a strictly positive integer.
pub fn parse_goal_form(total: &str) -> Option<u32> {
  let total: u32 = total.trim().parse().ok()?;
  (total > 0).then_some(total)
}

/// Validate a food-info form: both fields non-empty after trimming.
pub fn parse_food_form(name: &str, notes: &str) -> Option<(String, String)> {
  let name = name.trim();
  let notes = notes.trim();
  if name.is_empty() || notes.is_empty() {
    return None;
  }
  Some((name.to_owned(), notes.to_owned()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn meal_form_accepts_trimmed_positive_input() {
    assert_eq!(
      parse_meal_form("  Oatmeal ", " 320 "),
      Some(("Oatmeal".to_owned(), 320))
    );
  }

  #[test]
  fn meal_form_rejects_empty_name() {
    assert_eq!(parse_meal_form("   ", "320"), None);
  }

  #[test]
  fn meal_form_rejects_zero_negative_and_non_numeric_calories() {
    assert_eq!(parse_meal_form("Oatmeal", "0"), None);
    assert_eq!(parse_meal_form("Oatmeal", "-5"), None);
    assert_eq!(parse_meal_form("Oatmeal", "lots"), None);
    assert_eq!(parse_meal_form("Oatmeal", ""), None);
  }

  #[test]
  fn goal_form_requires_a_positive_total() {
    assert_eq!(parse_goal_form("1800"), Some(1800));
    assert_eq!(parse_goal_form("0"), None);
    assert_eq!(parse_goal_form("abc"), None);
  }

  #[test]
  fn note_form_trims_and_rejects_empty() {
    assert_eq!(parse_note_form(" slept badly "), Some("slept badly".into()));
    assert_eq!(parse_note_form("  "), None);
  }
}
