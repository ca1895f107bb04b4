//! Four-function calculator state machine for the add-meal panel.
//!
//! Display/accumulator model: digits edit the display, choosing an
//! operator stashes the display value, and a second operator (or equals)
//! evaluates eagerly — `12 + 3 *` already shows 15.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  Add,
  Sub,
  Mul,
  Div,
}

impl Op {
  fn apply(self, a: f64, b: f64) -> f64 {
    match self {
      Op::Add => a + b,
      Op::Sub => a - b,
      Op::Mul => a * b,
      Op::Div => a / b,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      Op::Add => '+',
      Op::Sub => '−',
      Op::Mul => '×',
      Op::Div => '÷',
    }
  }
}

#[derive(Debug, Clone)]
pub struct Calculator {
  display:            String,
  first_operand:      Option<f64>,
  operator:           Option<Op>,
  /// Set after an operator: the next digit starts a new number instead of
  /// appending to the shown one.
  waiting_for_second: bool,
}

impl Default for Calculator {
  fn default() -> Self { Self::new() }
}

impl Calculator {
  pub fn new() -> Self {
    Self {
      display:            "0".to_string(),
      first_operand:      None,
      operator:           None,
      waiting_for_second: false,
    }
  }

  pub fn display(&self) -> &str { &self.display }

  pub fn pending_operator(&self) -> Option<Op> { self.operator }

  fn display_value(&self) -> f64 { self.display.parse().unwrap_or(0.0) }

  pub fn input_digit(&mut self, digit: char) {
    debug_assert!(digit.is_ascii_digit());
    if self.waiting_for_second {
      self.waiting_for_second = false;
      self.display = digit.to_string();
      return;
    }
    if self.display == "0" {
      self.display = digit.to_string();
    } else {
      self.display.push(digit);
    }
  }

  pub fn input_decimal(&mut self) {
    if self.waiting_for_second {
      self.waiting_for_second = false;
      self.display = "0.".to_string();
      return;
    }
    if !self.display.contains('.') {
      self.display.push('.');
    }
  }

  pub fn apply_operator(&mut self, next: Op) {
    let input = self.display_value();

    match (self.first_operand, self.operator) {
      (None, _) => self.first_operand = Some(input),
      (Some(first), Some(op)) => {
        let result = op.apply(first, input);
        self.first_operand = Some(result);
        self.display = format_number(result);
      }
      (Some(_), None) => {}
    }

    self.waiting_for_second = true;
    self.operator = Some(next);
  }

  pub fn equals(&mut self) {
    let (Some(op), Some(first)) = (self.operator, self.first_operand) else {
      return;
    };
    let result = op.apply(first, self.display_value());
    self.display = format_number(result);
    self.first_operand = None;
    self.operator = None;
    self.waiting_for_second = false;
  }

  pub fn clear(&mut self) {
    *self = Self::new();
  }
}

fn format_number(value: f64) -> String {
  // "6" rather than "6.0", but keep real fractions.
  if value.fract() == 0.0 && value.abs() < 1e15 {
    format!("{}", value as i64)
  } else {
    format!("{value}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press_digits(calc: &mut Calculator, digits: &str) {
    for d in digits.chars() {
      calc.input_digit(d);
    }
  }

  #[test]
  fn digits_replace_the_leading_zero() {
    let mut calc = Calculator::new();
    press_digits(&mut calc, "305");
    assert_eq!(calc.display(), "305");
  }

  #[test]
  fn decimal_point_is_only_accepted_once() {
    let mut calc = Calculator::new();
    press_digits(&mut calc, "1");
    calc.input_decimal();
    calc.input_decimal();
    press_digits(&mut calc, "5");
    assert_eq!(calc.display(), "1.5");
  }

  #[test]
  fn simple_addition() {
    let mut calc = Calculator::new();
    press_digits(&mut calc, "320");
    calc.apply_operator(Op::Add);
    press_digits(&mut calc, "180");
    calc.equals();
    assert_eq!(calc.display(), "500");
  }

  #[test]
  fn chained_operators_evaluate_eagerly() {
    let mut calc = Calculator::new();
    press_digits(&mut calc, "12");
    calc.apply_operator(Op::Add);
    press_digits(&mut calc, "3");
    // Pressing the next operator already evaluates 12 + 3.
    calc.apply_operator(Op::Mul);
    assert_eq!(calc.display(), "15");
    press_digits(&mut calc, "2");
    calc.equals();
    assert_eq!(calc.display(), "30");
  }

  #[test]
  fn equals_without_a_pending_operator_is_a_no_op() {
    let mut calc = Calculator::new();
    press_digits(&mut calc, "42");
    calc.equals();
    assert_eq!(calc.display(), "42");
  }

  #[test]
  fn clear_resets_everything() {
    let mut calc = Calculator::new();
    press_digits(&mut calc, "9");
    calc.apply_operator(Op::Sub);
    calc.clear();
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.pending_operator(), None);
    // A fresh equation works after clearing.
    press_digits(&mut calc, "5");
    calc.equals();
    assert_eq!(calc.display(), "5");
  }

  #[test]
  fn operator_after_equals_starts_a_new_equation() {
    let mut calc = Calculator::new();
    press_digits(&mut calc, "2");
    calc.apply_operator(Op::Mul);
    press_digits(&mut calc, "3");
    calc.equals();
    assert_eq!(calc.display(), "6");

    calc.apply_operator(Op::Add);
    press_digits(&mut calc, "4");
    calc.equals();
    assert_eq!(calc.display(), "10");
  }
}
