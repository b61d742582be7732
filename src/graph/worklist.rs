//! Work-list abstractions consumed by the traversal algorithms.
//!
//! Breadth-first expansion needs a FIFO sequence, depth-first expansion and the DFS
//! topological sort need a LIFO one. The algorithms only require the operations
//! named here, so any growable sequence works; [`Vec`] and [`VecDeque`] are provided.
//!
//! `pop`/`dequeue` return `None` on an empty list instead of failing, which lets the
//! algorithms drain a work list with a plain `while let` loop.

use std::collections::VecDeque;

/// A last-in, first-out work list.
pub trait Lifo<T> {
    /// Pushes an item on top of the list.
    fn push(&mut self, item: T);

    /// Removes and returns the most recently pushed item, or `None` if empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns `true` if the list holds no items.
    fn is_empty(&self) -> bool;
}

/// A first-in, first-out work list.
pub trait Fifo<T> {
    /// Appends an item to the back of the list.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the oldest item, or `None` if empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns `true` if the list holds no items.
    fn is_empty(&self) -> bool;
}

impl<T> Lifo<T> for Vec<T> {
    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Fifo<T> for VecDeque<T> {
    #[inline]
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}
