//! Resizing array-backed LIFO stack.
//!
//! # Resize policy
//! - Starts with room for [`ArrayStack::DEFAULT_CAPACITY`] items.
//! - A push onto a full stack doubles the capacity.
//! - A pop that leaves the stack non-empty and at most a quarter full halves
//!   the capacity.
//!
//! Keeping the shrink threshold at a quarter (not a half) means a stack that
//! alternates push and pop at a boundary never resizes on every call.

use core::mem;
use std::fmt;

use crate::error::{CollectionError, Result};

/// An array-backed stack with amortised $O(1)$ push and pop.
#[derive(Clone)]
pub struct ArrayStack<T> {
    slots: Box<[Option<T>]>,
    top: usize,
}

impl<T> ArrayStack<T> {
    /// Capacity of a stack created by [`new`](ArrayStack::new).
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty stack with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty stack with at least one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Self::empty_slots(capacity.max(1)),
            top: 0,
        }
    }

    fn empty_slots(capacity: usize) -> Box<[Option<T>]> {
        (0..capacity).map(|_| None).collect()
    }

    /// Returns the number of items on the stack.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.top
    }

    /// Returns `true` if the stack holds no items.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Moves the live items into a freshly allocated slot array.
    fn resize(&mut self, capacity: usize) {
        let mut slots = Self::empty_slots(capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.top].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    /// Pushes `item` on top, doubling the capacity first if the stack is full.
    pub fn push(&mut self, item: T) {
        if self.top == self.slots.len() {
            self.resize(self.slots.len() * 2);
        }
        self.slots[self.top] = Some(item);
        self.top += 1;
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the stack has no items.
    pub fn pop(&mut self) -> Result<T> {
        if self.top == 0 {
            return Err(CollectionError::Empty);
        }
        self.top -= 1;
        let item = self.slots[self.top]
            .take()
            .expect("slot below top holds no item");
        if self.top > 0 && self.top <= self.slots.len() / 4 {
            self.resize(self.slots.len() / 2);
        }
        Ok(item)
    }

    /// Returns the top item without removing it, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        self.top
            .checked_sub(1)
            .and_then(|i| self.slots[i].as_ref())
    }

    /// Reverses the order of the items in place.
    pub fn reverse(&mut self) {
        self.slots[..self.top].reverse();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.slots[..self.top]
            .iter()
            .map(|slot| slot.as_ref().expect("slot below top holds no item"))
    }

    /// Drops every item. Keeps the current capacity.
    pub fn clear(&mut self) {
        for slot in self.slots[..self.top].iter_mut() {
            *slot = None;
        }
        self.top = 0;
    }

    /// Moves every item into a new stack, leaving `self` empty with the
    /// default capacity.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
