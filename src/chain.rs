//! Index-linked node chains.
//!
//! A [`Chain`] is an arena of nodes, each holding one value and two links:
//! `next` (sibling on the same level) and `down` (descent to the next level of detail).
//! Links are plain indices into the arena, and the index `0` is reserved as the `null` sentinel.
//!
//! ```text
//! a ──down──> == ──down──> 3 ──down──> null
//! │
//! next
//! │
//! b ──down──> == ──down──> x ──down──> null
//! │
//! next
//! │
//! null
//! ```
//!
//! The arena itself carries no policy: it only knows how to allocate nodes and assign links.
//! Both indexes ([`VariableIndex`][crate::variables::VariableIndex] and
//! [`BoundaryIndex`][crate::boundary::BoundaryIndex]) share this shape and attach their own meaning to it.

use std::ops::{Index, IndexMut};

/// The `null` link.
pub const NULL: usize = 0;

#[derive(Debug, Clone)]
struct Link<T> {
    value: Option<T>,
    next: usize,
    down: usize,
}

impl<T> Link<T> {
    /// Create a new detached node with the given value.
    fn new(value: T) -> Self {
        Self {
            value: Some(value),
            next: NULL,
            down: NULL,
        }
    }

    /// Create the sentinel node.
    fn sentinel() -> Self {
        Self {
            value: None,
            next: NULL,
            down: NULL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chain<T> {
    data: Vec<Link<T>>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    /// Create an empty chain arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty chain arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut data = Vec::with_capacity(capacity + 1);
        data.push(Link::sentinel()); // 0th cell is the `null` sentinel.
        Self { data }
    }

    /// Get the number of allocated nodes (excluding the sentinel).
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    /// Check if no nodes were allocated yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new detached node and return its index.
    pub fn add(&mut self, value: T) -> usize {
        self.data.push(Link::new(value));
        self.data.len() - 1
    }

    /// Get the reference to the value at the given index.
    pub fn value(&self, index: usize) -> &T {
        assert_ne!(index, NULL, "Index is null");
        match &self.data[index].value {
            Some(value) => value,
            None => unreachable!("only the sentinel has no value"),
        }
    }
    /// Get the mutable reference to the value at the given index.
    pub fn value_mut(&mut self, index: usize) -> &mut T {
        assert_ne!(index, NULL, "Index is null");
        match &mut self.data[index].value {
            Some(value) => value,
            None => unreachable!("only the sentinel has no value"),
        }
    }

    /// Get the index of the next (sibling) node.
    pub fn next(&self, index: usize) -> usize {
        assert_ne!(index, NULL, "Index is null");
        self.data[index].next
    }
    /// Set the index of the next (sibling) node.
    pub fn set_next(&mut self, index: usize, next: usize) {
        assert_ne!(index, NULL, "Index is null");
        self.data[index].next = next;
    }

    /// Get the index of the down (detail) node.
    pub fn down(&self, index: usize) -> usize {
        assert_ne!(index, NULL, "Index is null");
        self.data[index].down
    }
    /// Set the index of the down (detail) node.
    pub fn set_down(&mut self, index: usize, down: usize) {
        assert_ne!(index, NULL, "Index is null");
        self.data[index].down = down;
    }

    /// Iterate over node indices following `next` links, starting at `start` (inclusive).
    pub fn walk_next(&self, start: usize) -> Walk<'_, T> {
        Walk {
            chain: self,
            current: start,
            step: Step::Next,
        }
    }

    /// Iterate over node indices following `down` links, starting at `start` (inclusive).
    pub fn walk_down(&self, start: usize) -> Walk<'_, T> {
        Walk {
            chain: self,
            current: start,
            step: Step::Down,
        }
    }
}

impl<T> Index<usize> for Chain<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.value(index)
    }
}

impl<T> IndexMut<usize> for Chain<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.value_mut(index)
    }
}

#[derive(Debug, Copy, Clone)]
enum Step {
    Next,
    Down,
}

/// Iterator over node indices along one kind of link.
pub struct Walk<'a, T> {
    chain: &'a Chain<T>,
    current: usize,
    step: Step,
}

impl<T> Iterator for Walk<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NULL {
            return None;
        }
        let index = self.current;
        self.current = match self.step {
            Step::Next => self.chain.next(index),
            Step::Down => self.chain.down(index),
        };
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let mut chain = Chain::new();
        let index = chain.add(42);
        assert_eq!(index, 1);
        assert_eq!(chain[index], 42);
        assert_eq!(chain.next(index), NULL);
        assert_eq!(chain.down(index), NULL);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    #[should_panic(expected = "Index is null")]
    fn test_null_value() {
        let chain = Chain::<i32>::new();
        chain.value(NULL);
    }

    #[test]
    fn test_links() {
        let mut chain = Chain::new();
        let a = chain.add("a");
        let b = chain.add("b");
        let c = chain.add("c");
        chain.set_next(a, b);
        chain.set_down(a, c);
        assert_eq!(chain.next(a), b);
        assert_eq!(chain.down(a), c);
        assert_eq!(chain.next(b), NULL);
    }

    #[test]
    fn test_walk() {
        let mut chain = Chain::new();
        let a = chain.add(1);
        let b = chain.add(2);
        let c = chain.add(3);
        let d = chain.add(4);
        chain.set_next(a, b);
        chain.set_down(a, c);
        chain.set_down(c, d);

        let across: Vec<i32> = chain.walk_next(a).map(|i| chain[i]).collect();
        assert_eq!(across, vec![1, 2]);
        let below: Vec<i32> = chain.walk_down(a).map(|i| chain[i]).collect();
        assert_eq!(below, vec![1, 3, 4]);
        assert_eq!(chain.walk_down(NULL).count(), 0);
    }

    #[test]
    fn test_value_mut() {
        let mut chain = Chain::new();
        let index = chain.add(String::from("x"));
        chain[index].push('y');
        assert_eq!(chain[index], "xy");
    }
}
