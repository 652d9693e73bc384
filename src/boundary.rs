//! Boundary test index: synthesized boundary cases per variable.
//!
//! Each entry is keyed by a variable name and owns a `down` chain of
//! `(boundary, original)` pairs, one per distinct condition processed:
//!
//! ```text
//! a -> 4 -> 3 -> 3 -> null
//!      ^    ^    ^
//!      |    |    covered: `a == 3` was already tested by the first pair
//!      |    original value that produced the boundary
//!      boundary synthesized for `a == 3`
//! ```
//!
//! When an incoming observation is already covered by some recorded pair (see
//! [`satisfies`][crate::synth::satisfies]), no boundary is synthesized: a single
//! [`Atom::Covered`] marker is appended at the end of the chain instead. The marker is tagged,
//! so every [`Atom::Boundary`] node is still immediately followed by its original value.

use std::fmt;

use log::debug;

use crate::entries::Entries;
use crate::node::Atom;
use crate::observation::Observation;
use crate::render::RenderConfig;
use crate::synth::{satisfies, synthesize_boundary};
use crate::types::{Condition, Value};

/// A well-formed boundary case read back from the index.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCase {
    pub condition: Condition,
    pub boundary: Value,
    pub original: Value,
}

/// What happened to an observation fed into the index.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    /// First observation of the variable: new entry with its first boundary case.
    Created(Value),
    /// Not covered by any existing case: a fresh boundary case was appended.
    Appended(Value),
    /// Already covered: only the observed value was appended.
    Covered,
}

#[derive(Debug, Clone, Default)]
pub struct BoundaryIndex {
    entries: Entries,
}

impl BoundaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry node for `variable` by scanning entries in order.
    pub fn find(&self, variable: &str) -> Option<usize> {
        self.entries.find(variable)
    }

    /// Record a boundary case for one observation.
    pub fn record_boundary_case(&mut self, variable: &str, condition: Condition, value: Value) -> Recorded {
        let Some(entry) = self.entries.find(variable) else {
            let boundary = synthesize_boundary(&condition, &value);
            debug!(
                "record_boundary_case: new entry '{}' ({} {} -> {})",
                variable, condition, value, boundary
            );
            let pair = self.mk_case(condition, boundary.clone(), value);
            self.entries.push(variable, pair);
            return Recorded::Created(boundary);
        };

        if self.is_covered(entry, &condition, &value) {
            debug!(
                "record_boundary_case: '{} {} {}' already covered",
                variable, condition, value
            );
            let marker = self.entries.add(Atom::Covered(value));
            self.entries.append(entry, marker);
            return Recorded::Covered;
        }

        let boundary = synthesize_boundary(&condition, &value);
        debug!(
            "record_boundary_case: appending to '{}' ({} {} -> {})",
            variable, condition, value, boundary
        );
        let pair = self.mk_case(condition, boundary.clone(), value);
        self.entries.append(entry, pair);
        Recorded::Appended(boundary)
    }

    /// Record an [`Observation`].
    pub fn record(&mut self, observation: &Observation) -> Recorded {
        self.record_boundary_case(
            &observation.variable,
            observation.condition.clone(),
            observation.value.clone(),
        )
    }

    /// Allocate a detached `boundary -> original` pair and return the boundary node.
    fn mk_case(&mut self, condition: Condition, boundary: Value, original: Value) -> usize {
        let b = self.entries.add(Atom::Boundary {
            condition,
            value: boundary,
        });
        let o = self.entries.add(Atom::Value(original));
        self.entries.set_down(b, o);
        b
    }

    /// Check whether any recorded pair of `entry` covers `value` under `condition`.
    fn is_covered(&self, entry: usize, condition: &Condition, value: &Value) -> bool {
        self.pairs(entry)
            .any(|(_, boundary, original)| satisfies(condition, boundary, original, value))
    }

    /// Iterate over `(condition, boundary, original)` pairs of `entry`, skipping covered markers.
    fn pairs(&self, entry: usize) -> impl Iterator<Item = (&Condition, &Value, &Value)> + '_ {
        let chain = self.entries.chain();
        self.entries.below(entry).filter_map(move |i| match &chain[i] {
            Atom::Boundary { condition, value } => match &chain[chain.down(i)] {
                Atom::Value(v) => Some((condition, value, v)),
                _ => None,
            },
            _ => None,
        })
    }

    /// Variable names in first-seen order.
    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.names()
    }

    /// Boundary cases recorded for `variable`, in recording order.
    pub fn cases(&self, variable: &str) -> Vec<BoundaryCase> {
        match self.entries.find(variable) {
            Some(entry) => self
                .pairs(entry)
                .map(|(condition, boundary, original)| BoundaryCase {
                    condition: condition.clone(),
                    boundary: boundary.clone(),
                    original: original.clone(),
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Observed values that were judged already covered for `variable`.
    pub fn covered(&self, variable: &str) -> Vec<Value> {
        let Some(entry) = self.entries.find(variable) else {
            return Vec::new();
        };
        let chain = self.entries.chain();
        self.entries
            .below(entry)
            .filter_map(|i| match &chain[i] {
                Atom::Covered(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of nodes in the `down` chain of `variable` (zero if absent).
    pub fn chain_len(&self, variable: &str) -> usize {
        self.entries.chain_len(variable)
    }

    /// Render the trace with the default format.
    pub fn render(&self) -> String {
        self.render_with_config(&RenderConfig::default())
    }

    pub fn render_with_config(&self, config: &RenderConfig) -> String {
        self.entries.render(config)
    }
}

impl fmt::Display for BoundaryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.entries, f)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn int(i: i64) -> Value {
        Value::Integer(i)
    }

    #[test]
    fn test_first_observation() {
        let mut index = BoundaryIndex::new();
        let r = index.record_boundary_case("a", Condition::Eq, int(5));
        assert_eq!(r, Recorded::Created(int(6)));
        assert_eq!(index.render(), "a -> 6 -> 5 -> null\n|\nnull");
        assert_eq!(
            index.cases("a"),
            vec![BoundaryCase {
                condition: Condition::Eq,
                boundary: int(6),
                original: int(5),
            }]
        );
    }

    #[test]
    fn test_duplicate_is_covered() {
        let mut index = BoundaryIndex::new();
        index.record_boundary_case("x", Condition::Eq, int(5));
        let r = index.record_boundary_case("x", Condition::Eq, int(5));
        assert_eq!(r, Recorded::Covered);
        assert_eq!(index.cases("x").len(), 1);
        assert_eq!(index.covered("x"), vec![int(5)]);
        assert_eq!(index.chain_len("x"), 3);
        assert_eq!(index.render(), "x -> 6 -> 5 -> 5 -> null\n|\nnull");
    }

    #[test]
    fn test_uncovered_appends_pair() {
        let mut index = BoundaryIndex::new();
        index.record_boundary_case("x", Condition::Eq, int(5));
        // 5 < 3 does not hold, so a fresh case is synthesized.
        let r = index.record_boundary_case("x", Condition::Lt, int(3));
        assert_eq!(r, Recorded::Appended(int(2)));
        // 5 > 3 holds for the first pair.
        let r = index.record_boundary_case("x", Condition::Gt, int(3));
        assert_eq!(r, Recorded::Covered);
        assert_eq!(index.render(), "x -> 6 -> 5 -> 2 -> 3 -> 3 -> null\n|\nnull");
    }

    #[test]
    fn test_pair_after_covered_marker() {
        let mut index = BoundaryIndex::new();
        index.record_boundary_case("x", Condition::Eq, int(1));
        index.record_boundary_case("x", Condition::Eq, int(1));
        index.record_boundary_case("x", Condition::Eq, int(9));
        let cases = index.cases("x");
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].boundary, int(10));
        assert_eq!(cases[1].original, int(9));
        assert_eq!(index.render(), "x -> 2 -> 1 -> 1 -> 10 -> 9 -> null\n|\nnull");
    }

    #[test]
    fn test_text_values() {
        let mut index = BoundaryIndex::new();
        assert_eq!(
            index.record_boundary_case("s", Condition::Eq, Value::text("x")),
            Recorded::Created(Value::text("not_x"))
        );
        assert_eq!(
            index.record_boundary_case("s", Condition::Eq, Value::text("x")),
            Recorded::Covered
        );
        assert_eq!(
            index.record_boundary_case("s", Condition::Eq, Value::text("y")),
            Recorded::Appended(Value::text("not_y"))
        );
    }

    #[test]
    fn test_mixed_values_are_not_covered() {
        let mut index = BoundaryIndex::new();
        index.record_boundary_case("m", Condition::Eq, int(1));
        let r = index.record_boundary_case("m", Condition::Ne, Value::text("1x"));
        assert_eq!(r, Recorded::Appended(Value::text("not_1x")));
    }

    #[test]
    fn test_first_seen_order() {
        let mut index = BoundaryIndex::new();
        for name in ["b", "a", "b", "c", "a"] {
            index.record_boundary_case(name, Condition::Eq, int(0));
        }
        let names: Vec<&str> = index.variables().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_new_entry_leaves_existing_untouched() {
        let mut index = BoundaryIndex::new();
        index.record_boundary_case("a", Condition::Eq, int(5));
        index.record_boundary_case("a", Condition::Lt, int(2));
        index.record_boundary_case("a", Condition::Eq, int(5));
        let cases_before = index.cases("a");
        let covered_before = index.covered("a");
        let len_before = index.chain_len("a");
        let a = index.find("a");

        index.record_boundary_case("b", Condition::Eq, int(5));
        assert_eq!(index.find("a"), a);
        assert_eq!(index.cases("a"), cases_before);
        assert_eq!(index.covered("a"), covered_before);
        assert_eq!(index.chain_len("a"), len_before);
        assert_eq!(index.chain_len("b"), 2);
    }

    #[test]
    fn test_text_not_equal() {
        let mut index = BoundaryIndex::new();
        index.record_boundary_case("s", Condition::Eq, Value::text("x"));
        // "x" != "y" holds for the recorded original.
        assert_eq!(
            index.record_boundary_case("s", Condition::Ne, Value::text("y")),
            Recorded::Covered
        );
        // "x" != "x" fails, and the `not_` boundary only counts under `==`.
        assert_eq!(
            index.record_boundary_case("s", Condition::Ne, Value::text("x")),
            Recorded::Appended(Value::text("not_x"))
        );
        assert_eq!(index.render(), "s -> not_x -> x -> y -> not_x -> x -> null\n|\nnull");
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let mut index = BoundaryIndex::new();
        index.record_boundary_case("x", Condition::Eq, int(9007199254740992));
        assert_eq!(
            index.record_boundary_case("x", Condition::Eq, int(9007199254740993)),
            Recorded::Appended(int(9007199254740994))
        );
        assert_eq!(index.cases("x").len(), 2);
        assert!(index.covered("x").is_empty());
    }
}
