//! Entry lists: named chain heads linked in first-seen order.
//!
//! Both indexes are an [`Entries`] list: a `next`-linked sequence of [`Atom::Name`] heads,
//! each owning a `down` chain whose meaning is up to the index.

use std::fmt;

use crate::chain::{Chain, NULL};
use crate::node::Atom;
use crate::render::{self, RenderConfig};

#[derive(Debug, Clone, Default)]
pub struct Entries {
    chain: Chain<Atom>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the underlying node arena.
    pub fn chain(&self) -> &Chain<Atom> {
        &self.chain
    }

    /// Add a detached node.
    pub fn add(&mut self, atom: Atom) -> usize {
        self.chain.add(atom)
    }

    /// Link `down` below `index`.
    pub fn set_down(&mut self, index: usize, down: usize) {
        self.chain.set_down(index, down);
    }

    /// Find the entry node for `name` by scanning entries in order.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.chain
            .walk_next(self.head)
            .find(|&i| self.chain[i].name() == Some(name))
    }

    /// Create a new entry for `name` owning the `down` chain and link it as the new tail.
    pub fn push(&mut self, name: &str, down: usize) -> usize {
        let entry = self.chain.add(Atom::Name(name.to_string()));
        self.chain.set_down(entry, down);
        if self.head == NULL {
            self.head = entry;
        } else {
            self.chain.set_next(self.tail, entry);
        }
        self.tail = entry;
        self.len += 1;
        entry
    }

    /// Append `node` at the end of the `down` chain of `entry`.
    pub fn append(&mut self, entry: usize, node: usize) {
        let last = self.chain.walk_down(entry).last().unwrap_or(entry);
        self.chain.set_down(last, node);
    }

    /// Iterate over the nodes below `entry` (excluding the entry itself).
    pub fn below(&self, entry: usize) -> impl Iterator<Item = usize> + '_ {
        self.chain.walk_down(self.chain.down(entry))
    }

    /// Entry names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.chain
            .walk_next(self.head)
            .filter_map(move |i| self.chain[i].name())
    }

    /// Number of nodes below the entry for `name` (zero if absent).
    pub fn chain_len(&self, name: &str) -> usize {
        match self.find(name) {
            Some(entry) => self.below(entry).count(),
            None => 0,
        }
    }

    pub fn render(&self, config: &RenderConfig) -> String {
        render::trace(&self.chain, self.head, config)
    }
}

impl fmt::Display for Entries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_trace(&self.chain, self.head, &RenderConfig::default(), f)
    }
}
