//! A first-in first-out queue, used to walk trees level by level

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Add an item at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items
            .push_back(item);
    }

    /// Take the item at the front of the queue, if there is one.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items
            .pop_front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items
            .extend(iter);
    }
}
