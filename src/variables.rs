//! Variable index: the raw observation log.
//!
//! Each entry is keyed by a variable name and owns a `down` chain alternating
//! condition and value nodes, one pair per observation:
//!
//! ```text
//! a -> == -> 3 -> == -> 3 -> null
//! ```
//!
//! Entries are linked through `next` in first-seen order. Nothing is ever removed or
//! updated in place: repeated observations accumulate.

use std::fmt;

use log::debug;

use crate::entries::Entries;
use crate::node::Atom;
use crate::observation::Observation;
use crate::render::RenderConfig;
use crate::types::{Condition, Value};

#[derive(Debug, Clone, Default)]
pub struct VariableIndex {
    entries: Entries,
}

impl VariableIndex {
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

    /// Record one observation, creating the entry on first sight.
    ///
    /// Returns the index of the variable's entry node.
    pub fn record_observation(&mut self, variable: &str, condition: Condition, value: Value) -> usize {
        let pair = self.mk_pair(condition, value);

        if let Some(entry) = self.entries.find(variable) {
            debug!("record_observation: appending to '{}'", variable);
            self.entries.append(entry, pair);
            return entry;
        }

        debug!("record_observation: new entry '{}'", variable);
        self.entries.push(variable, pair)
    }

    /// Record an [`Observation`].
    pub fn record(&mut self, observation: &Observation) -> usize {
        self.record_observation(
            &observation.variable,
            observation.condition.clone(),
            observation.value.clone(),
        )
    }

    /// Allocate a detached `condition -> value` pair and return the condition node.
    fn mk_pair(&mut self, condition: Condition, value: Value) -> usize {
        let c = self.entries.add(Atom::Condition(condition));
        let v = self.entries.add(Atom::Value(value));
        self.entries.set_down(c, v);
        c
    }

    /// Variable names in first-seen order.
    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.names()
    }

    /// Number of nodes in the `down` chain of `variable` (zero if absent).
    pub fn chain_len(&self, variable: &str) -> usize {
        self.entries.chain_len(variable)
    }

    /// All recorded `(condition, value)` pairs for `variable`, in recording order.
    pub fn observations(&self, variable: &str) -> Vec<(Condition, Value)> {
        let Some(entry) = self.entries.find(variable) else {
            return Vec::new();
        };
        let chain = self.entries.chain();
        let nodes: Vec<&Atom> = self.entries.below(entry).map(|i| &chain[i]).collect();
        nodes
            .chunks(2)
            .filter_map(|pair| match pair {
                [Atom::Condition(c), Atom::Value(v)] => Some((c.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    /// Render the trace with the default format.
    pub fn render(&self) -> String {
        self.render_with_config(&RenderConfig::default())
    }

    pub fn render_with_config(&self, config: &RenderConfig) -> String {
        self.entries.render(config)
    }
}

impl fmt::Display for VariableIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.entries, f)
    }
}
