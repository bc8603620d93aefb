#![cfg(feature = "random")]
//! FIFO queue with uniform random sampling.
//!
//! Items leave in arrival order through [`RandomizedQueue::dequeue`];
//! [`RandomizedQueue::sample`] inspects one item chosen uniformly at random
//! without removing it. Storage is a [`LinkedDeque`], so enqueue and dequeue
//! are $O(1)$ and sampling walks at most half the chain.

use std::fmt;

use rand::Rng;

use crate::error::{CollectionError, Result};
use crate::lists::linked_deque::{Iter, LinkedDeque};

/// A FIFO queue that can also return a uniformly random element.
pub struct RandomizedQueue<T> {
    items: LinkedDeque<T>,
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: LinkedDeque::new(),
        }
    }

    /// Returns the number of queued items.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `item` at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the oldest item.
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the queue has no items.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front()
    }

    /// Returns a uniformly random item without removing it, drawing from the
    /// thread-local generator.
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the queue has no items.
    pub fn sample(&self) -> Result<&T> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Like [`sample`](RandomizedQueue::sample) with a caller-supplied generator.
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the queue has no items.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T> {
        if self.items.is_empty() {
            return Err(CollectionError::Empty);
        }
        let k = rng.gen_range(0..self.items.len());
        self.items.get(k).ok_or(CollectionError::Empty)
    }

    /// Iterates from the oldest item to the newest.
    pub fn iter(&self) -> Iter<'_, T, u32> {
        self.items.iter()
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RandomizedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("items", &self.items)
            .finish()
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
