use std::fmt;

use crate::types::{Condition, Value};

/// Payload of a single chain node.
///
/// The node-level value is semantically tagged by its position in a chain;
/// the tag here makes that position explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// Entry head: a variable name.
    Name(String),
    /// Recorded condition (variable index).
    Condition(Condition),
    /// Observed original value.
    Value(Value),
    /// Synthesized boundary value, together with the condition it tests.
    Boundary { condition: Condition, value: Value },
    /// Observed value already covered by an existing boundary case.
    Covered(Value),
}

impl Atom {
    pub fn name(&self) -> Option<&str> {
        match self {
            Atom::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the carried value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Atom::Value(v) | Atom::Covered(v) => Some(v),
            Atom::Boundary { value, .. } => Some(value),
            Atom::Name(_) | Atom::Condition(_) => None,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Name(name) => f.write_str(name),
            Atom::Condition(c) => write!(f, "{}", c),
            Atom::Value(v) | Atom::Covered(v) => write!(f, "{}", v),
            Atom::Boundary { value, .. } => write!(f, "{}", value),
        }
    }
}
