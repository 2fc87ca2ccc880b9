use std::collections::VecDeque;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 20;

/// Which end of a [`BoundedStack`] to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackEnd {
    /// The most recently pushed entry.
    #[default]
    Last,
    /// The oldest entry still retained.
    First,
}

/// A last-in-first-out stack that never holds more than `capacity` entries.
///
/// Pushing onto a full stack drops the oldest entry, so the stack always keeps
/// the most recent `capacity` values. This is what the cursor uses to remember
/// positions for undo, but it has no knowledge of cursors and can be used on
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Creates a stack pre-filled with `items`, oldest first.
    ///
    /// If there are more items than `capacity`, the oldest ones are dropped.
    pub fn from_items<I>(items: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut stack = Self::new(capacity);
        for item in items {
            stack.push(item);
        }
        stack
    }

    /// Returns the number of entries currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of entries retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the most recently pushed entry without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.peek_end(StackEnd::Last)
    }

    /// Returns the entry at the given end without removing it.
    pub fn peek_end(&self, end: StackEnd) -> Option<&T> {
        match end {
            StackEnd::Last => self.items.back(),
            StackEnd::First => self.items.front(),
        }
    }

    /// Pushes `value` on top of the stack.
    ///
    /// Returns the evicted entry when the push took the stack over capacity.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.items.push_back(value);
        if self.items.len() > self.capacity {
            tracing::trace!(capacity = self.capacity, "bounded stack evicting oldest entry");
            return self.items.pop_front();
        }
        None
    }

    /// Removes and returns the most recently pushed entry.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the entries from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> Extend<T> for BoundedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
