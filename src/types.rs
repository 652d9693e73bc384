//! Comparison conditions and observed values.
//!
//! Values are classified once, when an observation is ingested, so that boundary
//! synthesis and de-duplication dispatch on the tag instead of re-testing parseability.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A comparison condition attached to an observation.
///
/// Unrecognized symbols are preserved in [`Condition::Other`]: they are accepted
/// everywhere and simply pass through boundary synthesis unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Condition {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// Any other symbol, kept verbatim.
    Other(String),
}

impl Condition {
    /// All recognized conditions, in table order.
    pub const ALL: [Condition; 6] = [
        Condition::Eq,
        Condition::Ne,
        Condition::Lt,
        Condition::Gt,
        Condition::Le,
        Condition::Ge,
    ];

    /// Parse a condition symbol. Never fails.
    pub fn parse(symbol: &str) -> Self {
        match symbol.trim() {
            "==" => Condition::Eq,
            "!=" => Condition::Ne,
            "<" => Condition::Lt,
            ">" => Condition::Gt,
            "<=" => Condition::Le,
            ">=" => Condition::Ge,
            other => Condition::Other(other.to_string()),
        }
    }

    /// Returns the textual symbol of the condition.
    pub fn symbol(&self) -> &str {
        match self {
            Condition::Eq => "==",
            Condition::Ne => "!=",
            Condition::Lt => "<",
            Condition::Gt => ">",
            Condition::Le => "<=",
            Condition::Ge => ">=",
            Condition::Other(symbol) => symbol,
        }
    }

    /// Checks if this is one of the six recognized comparisons.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Condition::Other(_))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Condition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Condition::parse(s))
    }
}

impl From<&str> for Condition {
    fn from(symbol: &str) -> Self {
        Condition::parse(symbol)
    }
}

/// An observed (or synthesized) value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl Value {
    /// Classify a raw textual value.
    ///
    /// Integers win over decimals; non-finite floats and everything else stay text.
    /// Text keeps the raw input untouched.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Integer(i);
        }
        match trimmed.parse::<f64>() {
            Ok(x) if x.is_finite() => Value::Decimal(x),
            _ => Value::Text(raw.to_string()),
        }
    }

    /// Create a text value without classification.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::Text(_))
    }

    /// Returns the numeric value as `f64`, or `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(i) => Some(i as f64),
            Value::Decimal(x) => Some(x),
            Value::Text(_) => None,
        }
    }

    /// Returns the integer part, truncating decimals toward zero.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(i) => Some(i),
            Value::Decimal(x) => Some(x.trunc() as i64),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Decimal(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Decimal(x)
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::parse(raw)
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Value::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_roundtrip() {
        for c in Condition::ALL {
            assert_eq!(Condition::parse(c.symbol()), c);
            assert!(c.is_recognized());
        }
    }

    #[test]
    fn test_condition_other() {
        let c = Condition::parse("=~");
        assert_eq!(c, Condition::Other("=~".to_string()));
        assert!(!c.is_recognized());
        assert_eq!(c.to_string(), "=~");
    }

    #[test]
    fn test_value_classification() {
        assert_eq!(Value::parse("5"), Value::Integer(5));
        assert_eq!(Value::parse("-12"), Value::Integer(-12));
        assert_eq!(Value::parse("3.5"), Value::Decimal(3.5));
        assert_eq!(Value::parse("abc"), Value::text("abc"));
        assert_eq!(Value::parse(""), Value::text(""));
        assert_eq!(Value::parse("NaN"), Value::text("NaN"));
        assert_eq!(Value::parse("inf"), Value::text("inf"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Decimal(3.0).to_string(), "3");
        assert_eq!(Value::Decimal(2.25).to_string(), "2.25");
        assert_eq!(Value::text("not_x").to_string(), "not_x");
    }

    #[test]
    fn test_value_truncation() {
        assert_eq!(Value::Decimal(3.9).as_integer(), Some(3));
        assert_eq!(Value::Decimal(-3.9).as_integer(), Some(-3));
        assert_eq!(Value::text("x").as_integer(), None);
    }
}
