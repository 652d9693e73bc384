//! Boundary-value synthesis and coverage matching.
//!
//! # Synthesis
//!
//! For a numeric value, the synthesized boundary sits one unit across the comparison edge:
//!
//! ```text
//! ==, !=, >, <=   ->  value + 1
//! <, >=           ->  value - 1
//! other           ->  value
//! ```
//!
//! Decimals are truncated toward zero before the adjustment. Text values are negated
//! into an out-of-domain marker `not_<value>` regardless of the condition.
//!
//! # Matching
//!
//! A recorded `(boundary, original)` pair covers an incoming `(condition, value)` when
//! `original <condition> value` holds. Numbers compare numerically (integers exactly,
//! as `f64` once a decimal is involved), text compares
//! lexicographically, and a number never covers text (or vice versa).
//! For text under `==`, a pair whose boundary is exactly `not_<value>` also covers it.

use crate::types::{Condition, Value};

/// Prefix of the out-of-domain marker synthesized for text values.
pub const NEGATION_PREFIX: &str = "not_";

/// Build the out-of-domain marker for a text value.
pub fn negate(text: &str) -> String {
    format!("{}{}", NEGATION_PREFIX, text)
}

/// Compute the boundary value adjacent to `value` under `condition`.
pub fn synthesize_boundary(condition: &Condition, value: &Value) -> Value {
    let i = match value.as_integer() {
        Some(i) => i,
        None => return Value::Text(negate(&value.to_string())),
    };
    match condition {
        Condition::Eq | Condition::Ne | Condition::Gt | Condition::Le => {
            Value::Integer(i.saturating_add(1))
        }
        Condition::Lt | Condition::Ge => Value::Integer(i.saturating_sub(1)),
        Condition::Other(_) => value.clone(),
    }
}

fn compare<T>(condition: &Condition, lhs: &T, rhs: &T) -> bool
where
    T: PartialOrd + ?Sized,
{
    match condition {
        Condition::Eq => lhs == rhs,
        Condition::Ne => lhs != rhs,
        Condition::Lt => lhs < rhs,
        Condition::Gt => lhs > rhs,
        Condition::Le => lhs <= rhs,
        Condition::Ge => lhs >= rhs,
        Condition::Other(_) => false,
    }
}

/// Check whether a recorded `(boundary, original)` pair already covers `incoming` under `condition`.
pub fn satisfies(condition: &Condition, boundary: &Value, original: &Value, incoming: &Value) -> bool {
    match (original, incoming) {
        (Value::Text(stored), Value::Text(x)) => {
            if compare(condition, stored.as_str(), x.as_str()) {
                return true;
            }
            *condition == Condition::Eq && boundary.as_text() == Some(negate(x).as_str())
        }
        (Value::Integer(a), Value::Integer(b)) => compare(condition, a, b),
        _ => match (original.as_f64(), incoming.as_f64()) {
            (Some(a), Some(b)) => compare(condition, &a, &b),
            _ => false,
        },
    }
}
