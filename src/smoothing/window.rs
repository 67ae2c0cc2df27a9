//! Bounded FIFO of recent per-frame observations

use std::collections::VecDeque;

/// Rolling window that keeps the last `capacity` values in arrival order
#[derive(Clone, Debug)]
pub struct HistoryWindow<T> {
    /// Oldest at the front, newest at the back
    values: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryWindow<T> {
    /// Create an empty window. A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a value, evicting the oldest once over capacity
    pub fn push(&mut self, value: T) {
        self.values.push_back(value);
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    /// Change the capacity, dropping the oldest values if it shrinks
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent value
    pub fn latest(&self) -> Option<&T> {
        self.values.back()
    }

    /// Values from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.values.iter()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: Clone> HistoryWindow<T> {
    /// Copy of the window contents, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().cloned().collect()
    }
}
