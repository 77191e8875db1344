//! Generic LIFO stack used for every track in the yard.

use serde::{Deserialize, Serialize};

/// A last-in, first-out container backed by a `Vec`.
///
/// Models a dead-end siding: the wagon pushed in last is the first one
/// that can be pulled back out. `pop` and `peek` signal emptiness with
/// `None` instead of panicking, so callers always handle the empty case
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The top item without removing it, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Stack<T> {
    /// Copy of the current contents in push order: bottom of the stack
    /// first, the most recently pushed item last.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_pop_returns_item() {
        let mut stack = Stack::new();
        stack.push(7);
        assert_eq!(stack.pop(), Some(7));
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn peek_leaves_top_in_place() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn len_tracks_pushes_and_pops() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.len(), 2);
        stack.pop();
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_empty());
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut stack: Stack<u32> = (0..5).collect();
        assert_eq!(stack.len(), 5);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn snapshot_is_push_order_with_top_last() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.snapshot(), vec![1, 2, 3]);
        // The snapshot is a copy; the stack itself is untouched.
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));
    }
}
