//! Data-driven predicates over [`WorldSignals`].
//!
//! Conditions gate dialogue questions and object actions. Absent keys take
//! their neutral value (false, 0, 0.0) before comparison, so "never set" and
//! "set to zero" behave the same.

use serde::{Deserialize, Serialize};

use crate::resources::worldsignals::WorldSignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    ScalarCmp {
        key: String,
        op: CmpOp,
        value: f32,
    },
    ScalarRange {
        key: String,
        min: f32,
        max: f32,
        inclusive: bool,
    },
    IntegerCmp {
        key: String,
        op: CmpOp,
        value: i32,
    },
    IntegerRange {
        key: String,
        min: i32,
        max: i32,
        inclusive: bool,
    },
    HasFlag {
        key: String,
    },
    LacksFlag {
        key: String,
    },
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn has_flag(key: impl Into<String>) -> Self {
        Condition::HasFlag { key: key.into() }
    }

    pub fn lacks_flag(key: impl Into<String>) -> Self {
        Condition::LacksFlag { key: key.into() }
    }

    pub fn integer(key: impl Into<String>, op: CmpOp, value: i32) -> Self {
        Condition::IntegerCmp {
            key: key.into(),
            op,
            value,
        }
    }

    /// Evaluate against the current game state.
    pub fn evaluate(&self, signals: &WorldSignals) -> bool {
        evaluate_condition(signals, self)
    }
}

fn compare<T: PartialOrd>(lhs: T, op: CmpOp, rhs: T) -> bool {
    match op {
        CmpOp::Lt => lhs < rhs,
        CmpOp::Le => lhs <= rhs,
        CmpOp::Gt => lhs > rhs,
        CmpOp::Ge => lhs >= rhs,
        CmpOp::Eq => lhs == rhs,
        CmpOp::Ne => lhs != rhs,
    }
}

fn in_range<T: PartialOrd>(value: T, min: T, max: T, inclusive: bool) -> bool {
    if inclusive {
        value >= min && value <= max
    } else {
        value > min && value < max
    }
}

/// Recursively evaluates a condition including the `All`, `Any` and `Not`
/// combinators.
pub fn evaluate_condition(signals: &WorldSignals, condition: &Condition) -> bool {
    match condition {
        Condition::ScalarCmp { key, op, value } => {
            let signal_value = signals.get_scalar(key);
            match op {
                CmpOp::Eq => (signal_value - *value).abs() < f32::EPSILON,
                CmpOp::Ne => (signal_value - *value).abs() >= f32::EPSILON,
                _ => compare(signal_value, *op, *value),
            }
        }
        Condition::ScalarRange {
            key,
            min,
            max,
            inclusive,
        } => in_range(signals.get_scalar(key), *min, *max, *inclusive),
        Condition::IntegerCmp { key, op, value } => {
            compare(signals.get_integer(key), *op, *value)
        }
        Condition::IntegerRange {
            key,
            min,
            max,
            inclusive,
        } => in_range(signals.get_integer(key), *min, *max, *inclusive),
        Condition::HasFlag { key } => signals.has_flag(key),
        Condition::LacksFlag { key } => !signals.has_flag(key),
        Condition::All(conditions) => conditions
            .iter()
            .all(|cond| evaluate_condition(signals, cond)),
        Condition::Any(conditions) => conditions
            .iter()
            .any(|cond| evaluate_condition(signals, cond)),
        Condition::Not(cond) => !evaluate_condition(signals, cond),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals_with_scalar(key: &str, value: f32) -> WorldSignals {
        let mut s = WorldSignals::default();
        s.set_scalar(key, value);
        s
    }

    fn signals_with_integer(key: &str, value: i32) -> WorldSignals {
        let mut s = WorldSignals::default();
        s.set_integer(key, value);
        s
    }

    fn signals_with_flag(key: &str) -> WorldSignals {
        let mut s = WorldSignals::default();
        s.set_flag(key, true);
        s
    }

    #[test]
    fn test_scalar_cmp_lt() {
        let cond = Condition::ScalarCmp {
            key: "poison".to_string(),
            op: CmpOp::Lt,
            value: 10.0,
        };
        assert!(cond.evaluate(&signals_with_scalar("poison", 5.0)));
        assert!(!cond.evaluate(&signals_with_scalar("poison", 15.0)));
    }

    #[test]
    fn test_scalar_cmp_eq_uses_epsilon() {
        let cond = Condition::ScalarCmp {
            key: "poison".to_string(),
            op: CmpOp::Eq,
            value: 0.3,
        };
        assert!(cond.evaluate(&signals_with_scalar("poison", 0.1 + 0.2)));
    }

    #[test]
    fn test_scalar_missing_key_is_zero() {
        let cond = Condition::ScalarCmp {
            key: "missing".to_string(),
            op: CmpOp::Eq,
            value: 0.0,
        };
        assert!(cond.evaluate(&WorldSignals::default()));
    }

    #[test]
    fn test_scalar_range_boundaries() {
        let inclusive = Condition::ScalarRange {
            key: "hp".to_string(),
            min: 0.0,
            max: 100.0,
            inclusive: true,
        };
        let exclusive = Condition::ScalarRange {
            key: "hp".to_string(),
            min: 0.0,
            max: 100.0,
            inclusive: false,
        };
        let signals = signals_with_scalar("hp", 100.0);
        assert!(inclusive.evaluate(&signals));
        assert!(!exclusive.evaluate(&signals));
    }

    #[test]
    fn test_integer_cmp() {
        let signals = signals_with_integer("coins", 3);
        assert!(Condition::integer("coins", CmpOp::Ge, 3).evaluate(&signals));
        assert!(Condition::integer("coins", CmpOp::Ne, 4).evaluate(&signals));
        assert!(!Condition::integer("coins", CmpOp::Gt, 3).evaluate(&signals));
    }

    #[test]
    fn test_integer_missing_key_is_zero() {
        let signals = WorldSignals::default();
        assert!(Condition::integer("coins", CmpOp::Eq, 0).evaluate(&signals));
        assert!(!Condition::integer("coins", CmpOp::Gt, 0).evaluate(&signals));
    }

    #[test]
    fn test_integer_range() {
        let cond = Condition::IntegerRange {
            key: "visits".to_string(),
            min: 1,
            max: 3,
            inclusive: false,
        };
        assert!(cond.evaluate(&signals_with_integer("visits", 2)));
        assert!(!cond.evaluate(&signals_with_integer("visits", 3)));
    }

    #[test]
    fn test_flags() {
        let signals = signals_with_flag("talked_to_guard");
        assert!(Condition::has_flag("talked_to_guard").evaluate(&signals));
        assert!(!Condition::lacks_flag("talked_to_guard").evaluate(&signals));
        assert!(Condition::lacks_flag("has_key").evaluate(&signals));
    }

    #[test]
    fn test_combinators() {
        let mut signals = signals_with_flag("a");
        signals.set_integer("n", 2);
        let all = Condition::All(vec![
            Condition::has_flag("a"),
            Condition::integer("n", CmpOp::Eq, 2),
        ]);
        let any = Condition::Any(vec![Condition::has_flag("b"), Condition::has_flag("a")]);
        let not = Condition::Not(Box::new(Condition::has_flag("b")));
        assert!(all.evaluate(&signals));
        assert!(any.evaluate(&signals));
        assert!(not.evaluate(&signals));
        assert!(Condition::All(vec![]).evaluate(&signals));
        assert!(!Condition::Any(vec![]).evaluate(&signals));
    }
}
