use std::collections::VecDeque;
use std::collections::vec_deque::Iter;

use crate::error::{FilesetsError, Result};

pub const DEFAULT_CAPACITY: usize = 1024;

/// A capacity-checked stack that can also be drained from the front, so the
/// same container serves as operator stack, operand stack and postfix queue.
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(FilesetsError::StackCapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push_back(item);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }
    /// Removes the entry at the bottom.
    pub fn shift(&mut self) -> Option<T> {
        self.items.pop_front()
    }
    pub fn depth(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Bottom to top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
