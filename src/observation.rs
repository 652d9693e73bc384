//! Observations: `(variable, condition, value)` triples fed into the indexes.
//!
//! Observations can be built directly, extracted from JavaScript source
//! (see [`extract`][crate::extract]), or parsed from a line-oriented text format:
//!
//! ```text
//! # variable condition value
//! a == 3
//! b == x
//! greeting != "hello world"
//! ```
//!
//! The value is the remainder of the line. Surrounding quotes (`'...'` or `"..."`) are
//! stripped, and the content is classified like an unquoted value.

use std::fmt;
use std::str::FromStr;

use crate::types::{Condition, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub variable: String,
    pub condition: Condition,
    pub value: Value,
}

impl Observation {
    pub fn new(variable: impl Into<String>, condition: Condition, value: Value) -> Self {
        Self {
            variable: variable.into(),
            condition,
            value,
        }
    }

    /// An equality observation, as produced for every extracted literal.
    pub fn literal(variable: impl Into<String>, value: Value) -> Self {
        Self::new(variable, Condition::Eq, value)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.variable, self.condition, self.value)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ObservationError {
    #[error("line {line}: missing variable")]
    MissingVariable { line: usize },
    #[error("line {line}: missing condition for '{variable}'")]
    MissingCondition { line: usize, variable: String },
    #[error("line {line}: missing value for '{variable}'")]
    MissingValue { line: usize, variable: String },
}

fn unquote(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return Some(&raw[1..raw.len() - 1]);
        }
    }
    None
}

fn parse_line(s: &str, line: usize) -> Result<Observation, ObservationError> {
    let s = s.trim();
    let (variable, rest) = match s.split_once(char::is_whitespace) {
        Some((variable, rest)) => (variable, rest.trim_start()),
        None => (s, ""),
    };
    if variable.is_empty() {
        return Err(ObservationError::MissingVariable { line });
    }
    let (condition, value) = match rest.split_once(char::is_whitespace) {
        Some((condition, value)) => (condition, value.trim()),
        None => (rest, ""),
    };
    if condition.is_empty() {
        return Err(ObservationError::MissingCondition {
            line,
            variable: variable.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ObservationError::MissingValue {
            line,
            variable: variable.to_string(),
        });
    }
    let value = Value::parse(unquote(value).unwrap_or(value));
    Ok(Observation::new(variable, Condition::parse(condition), value))
}

impl FromStr for Observation {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s, 1)
    }
}

/// Parse one observation per non-empty line. Lines starting with `#` are comments.
pub fn parse_observations(input: &str) -> Result<Vec<Observation>, ObservationError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, s)| {
            let s = s.trim();
            !s.is_empty() && !s.starts_with('#')
        })
        .map(|(i, s)| parse_line(s, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let obs: Observation = "a == 3".parse().unwrap();
        assert_eq!(obs, Observation::new("a", Condition::Eq, Value::Integer(3)));
        assert_eq!(obs.to_string(), "a == 3");
    }

    #[test]
    fn test_parse_text_with_spaces() {
        let obs: Observation = "greeting != hello world".parse().unwrap();
        assert_eq!(obs.condition, Condition::Ne);
        assert_eq!(obs.value, Value::text("hello world"));
    }

    #[test]
    fn test_parse_quoted() {
        let obs: Observation = "n >= '42'".parse().unwrap();
        assert_eq!(obs.value, Value::Integer(42));
        let obs: Observation = "s == 'two words'".parse().unwrap();
        assert_eq!(obs.value, Value::text("two words"));
        let obs: Observation = r#"n == """#.parse().unwrap();
        assert_eq!(obs.value, Value::text(""));
    }

    #[test]
    fn test_parse_unknown_condition() {
        let obs: Observation = "x =~ 1".parse().unwrap();
        assert_eq!(obs.condition, Condition::Other("=~".to_string()));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "a".parse::<Observation>(),
            Err(ObservationError::MissingCondition {
                line: 1,
                variable: "a".to_string()
            })
        );
        assert_eq!(
            "a ==".parse::<Observation>(),
            Err(ObservationError::MissingValue {
                line: 1,
                variable: "a".to_string()
            })
        );
        assert_eq!("   ".parse::<Observation>(), Err(ObservationError::MissingVariable { line: 1 }));
    }

    #[test]
    fn test_parse_observations() {
        let input = "# header\na == 3\n\nb == x\na == 3\n";
        let obs = parse_observations(input).unwrap();
        assert_eq!(obs.len(), 3);
        assert_eq!(obs[1], Observation::literal("b", Value::text("x")));
    }

    #[test]
    fn test_parse_observations_reports_line() {
        let err = parse_observations("a == 1\n\nb <\n").unwrap_err();
        assert_eq!(
            err,
            ObservationError::MissingValue {
                line: 3,
                variable: "b".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 3: missing value for 'b'");
    }
}
