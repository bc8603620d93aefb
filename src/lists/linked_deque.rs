//! Double-ended queue built on an index-linked node arena.
//!
//! # Layout
//! Nodes live in three parallel vectors (struct-of-arrays): `values`, `prevs`
//! and `nexts`. Slot `k` is one node; its links are indices of type `I`
//! rather than pointers, with [`IndexType::NONE`] standing in for null.
//!
//! A slot holds `Some(value)` exactly while it is linked into the chain.
//! Popped slots are threaded onto a free list through `nexts` and reused by
//! later pushes, so a deque that oscillates around a working size stops
//! allocating once its arena has grown to that size.
//!
//! `next` is the traversal direction from head to tail; `prev` is only a
//! back-reference. Because values are owned by the arena and never by a
//! link, dropping the deque drops each live value exactly once and there is
//! no reference cycle to break.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter::{FusedIterator, Rev};
use core::marker::PhantomData;
use core::mem;
use std::collections::VecDeque;
use std::fmt;

use crate::error::{CollectionError, Result};
use crate::lists::cursor::{Cursor, CursorMut};
use crate::IndexType;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` (contiguous ring buffer) and
/// [`LinkedDeque<T, I>`] (linked arena) so that callers can drive either
/// backend without knowing which one is active.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Returns a shared reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&T>;
    /// Removes and returns the element at `index`, or `None` if out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
    /// Returns an exclusive reference to the front element, or `None` if empty.
    fn front_mut(&mut self) -> Option<&mut T>;
    /// Returns an exclusive reference to the back element, or `None` if empty.
    fn back_mut(&mut self) -> Option<&mut T>;
    /// Iterates front to back in one pass, whatever the backend.
    fn items(&self) -> Box<dyn DoubleEndedIterator<Item = &T> + '_>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn remove(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
    fn items(&self) -> Box<dyn DoubleEndedIterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

// ─── LinkedDeque ──────────────────────────────────────────────────────────────

/// A double-ended queue backed by a doubly linked chain of arena slots.
///
/// Pushing, popping and peeking at either end are $O(1)$. Bidirectional
/// traversal is available through [`iter`](LinkedDeque::iter) and through
/// [`Cursor`]/[`CursorMut`], which can also splice nodes in the middle.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `T` | Element type |
/// | `I` | Link width; bounds the arena to `I::NONE` slots (default `u32`) |
///
/// # Copy and move
/// `Clone` is a deep copy of every element in order. Moving a deque
/// transfers the whole arena; [`take`](LinkedDeque::take) moves the contents
/// out and leaves the source empty and usable.
pub struct LinkedDeque<T, I: IndexType = u32> {
    values: Vec<Option<T>>,
    prevs: Vec<I>,
    nexts: Vec<I>,
    free_head: I,
    head: I,
    tail: I,
    len: usize,
}

impl<T, I: IndexType> LinkedDeque<T, I> {
    /// Creates a new empty deque. Does not allocate.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            prevs: Vec::new(),
            nexts: Vec::new(),
            free_head: I::NONE,
            head: I::NONE,
            tail: I::NONE,
            len: 0,
        }
    }

    /// Creates an empty deque whose arena can hold `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            prevs: Vec::with_capacity(capacity),
            nexts: Vec::with_capacity(capacity),
            free_head: I::NONE,
            head: I::NONE,
            tail: I::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    // ─── node arena ──────────────────────────────────────────────────────────

    /// Places `value` in a vacant slot, growing the arena if the free list is
    /// empty. The returned slot is not linked yet.
    fn alloc(&mut self, value: T) -> I {
        if !self.free_head.is_none() {
            let idx = self.free_head;
            let i = idx.as_usize();
            self.free_head = self.nexts[i];
            self.values[i] = Some(value);
            idx
        } else {
            let idx = I::from_usize(self.values.len());
            self.values.push(Some(value));
            self.prevs.push(I::NONE);
            self.nexts.push(I::NONE);
            idx
        }
    }

    /// Moves the value out of an unlinked slot and puts the slot on the free list.
    fn release(&mut self, idx: I) -> T {
        let i = idx.as_usize();
        let value = self.values[i].take().expect("released slot holds no value");
        self.prevs[i] = I::NONE;
        self.nexts[i] = self.free_head;
        self.free_head = idx;
        value
    }

    /// Links slot `idx` between `prev` and `next`, either of which may be `NONE`.
    fn link_between(&mut self, idx: I, prev: I, next: I) {
        self.prevs[idx.as_usize()] = prev;
        self.nexts[idx.as_usize()] = next;
        if prev.is_none() {
            self.head = idx;
        } else {
            self.nexts[prev.as_usize()] = idx;
        }
        if next.is_none() {
            self.tail = idx;
        } else {
            self.prevs[next.as_usize()] = idx;
        }
    }

    /// Removes a node from the chain, joining its neighbours.
    fn unlink(&mut self, idx: I) {
        let (p, n) = (self.prevs[idx.as_usize()], self.nexts[idx.as_usize()]);
        if p.is_none() {
            self.head = n;
        } else {
            self.nexts[p.as_usize()] = n;
        }
        if n.is_none() {
            self.tail = p;
        } else {
            self.prevs[n.as_usize()] = p;
        }
    }

    pub(crate) fn insert_node(&mut self, value: T, prev: I, next: I) -> I {
        let idx = self.alloc(value);
        self.link_between(idx, prev, next);
        self.len += 1;
        idx
    }

    pub(crate) fn remove_node(&mut self, idx: I) -> T {
        self.unlink(idx);
        self.len -= 1;
        self.release(idx)
    }

    #[inline(always)]
    pub(crate) fn head_index(&self) -> I {
        self.head
    }

    #[inline(always)]
    pub(crate) fn tail_index(&self) -> I {
        self.tail
    }

    #[inline(always)]
    pub(crate) fn next_of(&self, idx: I) -> I {
        self.nexts[idx.as_usize()]
    }

    #[inline(always)]
    pub(crate) fn prev_of(&self, idx: I) -> I {
        self.prevs[idx.as_usize()]
    }

    /// Shared reference to the value of a linked node.
    #[inline(always)]
    pub(crate) fn value(&self, idx: I) -> &T {
        self.values[idx.as_usize()]
            .as_ref()
            .expect("linked slot holds no value")
    }

    /// Exclusive reference to the value of a linked node.
    #[inline(always)]
    pub(crate) fn value_mut(&mut self, idx: I) -> &mut T {
        self.values[idx.as_usize()]
            .as_mut()
            .expect("linked slot holds no value")
    }

    /// Returns the slot holding logical position `index`, walking from
    /// whichever end is closer.
    fn index_of(&self, index: usize) -> Option<I> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut curr = self.head;
            for _ in 0..index {
                curr = self.next_of(curr);
            }
            Some(curr)
        } else {
            let mut curr = self.tail;
            for _ in 0..(self.len - 1 - index) {
                curr = self.prev_of(curr);
            }
            Some(curr)
        }
    }

    // ─── ends ────────────────────────────────────────────────────────────────

    /// Prepends `item` to the front of the deque.
    ///
    /// # Pseudo Code:
    /// ```text
    /// idx = free_head if any, else a new arena slot
    /// values[idx] = item
    /// prevs[idx] = NONE, nexts[idx] = head
    /// if deque was empty: tail = idx
    /// else: prevs[head] = idx
    /// head = idx
    /// len += 1
    /// ```
    ///
    /// # Panics
    /// Panics if the arena would need more slots than `I` can address.
    #[inline]
    pub fn push_front(&mut self, item: T) {
        let head = self.head;
        self.insert_node(item, I::NONE, head);
    }

    /// Appends `item` to the back of the deque.
    ///
    /// # Panics
    /// Panics if the arena would need more slots than `I` can address.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        let tail = self.tail;
        self.insert_node(item, tail, I::NONE);
    }

    /// Removes and returns the front element.
    ///
    /// # Pseudo Code:
    /// ```text
    /// if len == 0: return Err(Empty)
    /// idx = head
    /// head = nexts[idx]
    /// if head == NONE: tail = NONE
    /// else: prevs[head] = NONE
    /// move value out of values[idx]
    /// push idx onto the free list
    /// len -= 1
    /// ```
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the deque has no elements.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(CollectionError::Empty);
        }
        Ok(self.remove_node(self.head))
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the deque has no elements.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.tail.is_none() {
            return Err(CollectionError::Empty);
        }
        Ok(self.remove_node(self.tail))
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(self.value(self.head))
        }
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(self.value(self.tail))
        }
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            None
        } else {
            let head = self.head;
            Some(self.value_mut(head))
        }
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_none() {
            None
        } else {
            let tail = self.tail;
            Some(self.value_mut(tail))
        }
    }

    /// Returns a copy of the front element.
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the deque has no elements.
    pub fn get_front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.front().cloned().ok_or(CollectionError::Empty)
    }

    /// Returns a copy of the back element.
    ///
    /// # Errors
    /// [`CollectionError::Empty`] if the deque has no elements.
    pub fn get_back(&self) -> Result<T>
    where
        T: Clone,
    {
        self.back().cloned().ok_or(CollectionError::Empty)
    }

    // ─── positional access ───────────────────────────────────────────────────

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Walks from the nearer end, so this is $O(min(index, len - index))$.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.index_of(index).map(|idx| self.value(idx))
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.index_of(index) {
            Some(idx) => Some(self.value_mut(idx)),
            None => None,
        }
    }

    /// Removes and returns the element at logical `index`, or `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.index_of(index).map(|idx| self.remove_node(idx))
    }

    /// Returns `true` if the deque contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Drops every element and resets the arena. Keeps the allocation.
    pub fn clear(&mut self) {
        self.values.clear();
        self.prevs.clear();
        self.nexts.clear();
        self.free_head = I::NONE;
        self.head = I::NONE;
        self.tail = I::NONE;
        self.len = 0;
    }

    /// Moves every element into a new deque, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    // ─── traversal ───────────────────────────────────────────────────────────

    /// Returns a front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns a front-to-back iterator over exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, I> {
        IterMut {
            values: self.values.as_mut_ptr(),
            prevs: &self.prevs,
            nexts: &self.nexts,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Head-to-tail traversal. Each call starts again from the head.
    pub fn forward(&self) -> Iter<'_, T, I> {
        self.iter()
    }

    /// Tail-to-head traversal. Each call starts again from the tail.
    pub fn backward(&self) -> Rev<Iter<'_, T, I>> {
        self.iter().rev()
    }

    /// Cursor resting on the front element, or on the end marker if empty.
    pub fn cursor_front(&self) -> Cursor<'_, T, I> {
        Cursor::new(self, self.head)
    }

    /// Cursor resting on the back element, or on the end marker if empty.
    pub fn cursor_back(&self) -> Cursor<'_, T, I> {
        Cursor::new(self, self.tail)
    }

    /// Cursor resting on the end marker (one past the back element).
    pub fn cursor_end(&self) -> Cursor<'_, T, I> {
        Cursor::new(self, I::NONE)
    }

    /// Mutable cursor resting on the front element, or on the end marker if empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, I> {
        let head = self.head;
        CursorMut::new(self, head)
    }

    /// Mutable cursor resting on the back element, or on the end marker if empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T, I> {
        let tail = self.tail;
        CursorMut::new(self, tail)
    }

    /// Mutable cursor resting on the end marker.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, I> {
        CursorMut::new(self, I::NONE)
    }
}

impl<T, I: IndexType> AnyDeque<T> for LinkedDeque<T, I> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back().ok()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front().ok()
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn remove(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
    fn items(&self) -> Box<dyn DoubleEndedIterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

// ─── iterators ────────────────────────────────────────────────────────────────

/// Borrowing iterator over a [`LinkedDeque`].
pub struct Iter<'a, T, I: IndexType> {
    list: &'a LinkedDeque<T, I>,
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: IndexType> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.list.next_of(idx);
        self.remaining -= 1;
        Some(self.list.value(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, I: IndexType> DoubleEndedIterator for Iter<'a, T, I> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.list.prev_of(idx);
        self.remaining -= 1;
        Some(self.list.value(idx))
    }
}

impl<T, I: IndexType> ExactSizeIterator for Iter<'_, T, I> {}
impl<T, I: IndexType> FusedIterator for Iter<'_, T, I> {}

impl<T, I: IndexType> Clone for Iter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Mutably borrowing iterator over a [`LinkedDeque`].
///
/// Holds a raw pointer to the value slots because it hands out `&mut T` for
/// distinct slots while the link arrays stay shared.
pub struct IterMut<'a, T, I: IndexType> {
    values: *mut Option<T>,
    prevs: &'a [I],
    nexts: &'a [I],
    front: I,
    back: I,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

// The raw slot pointer stands for the `&'a mut [Option<T>]` it was taken from.
unsafe impl<T: Send, I: IndexType + Sync> Send for IterMut<'_, T, I> {}
unsafe impl<T: Sync, I: IndexType + Sync> Sync for IterMut<'_, T, I> {}

impl<'a, T, I: IndexType> IterMut<'a, T, I> {
    /// # Safety
    /// `idx` must be a linked slot not yet yielded by this iterator.
    unsafe fn slot(&mut self, idx: I) -> &'a mut T {
        // Every linked slot is visited once from either end, and `remaining`
        // stops the two ends from crossing, so no slot is borrowed twice.
        match (*self.values.add(idx.as_usize())).as_mut() {
            Some(v) => v,
            None => unreachable!("linked slot holds no value"),
        }
    }
}

impl<'a, T, I: IndexType> Iterator for IterMut<'a, T, I> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.nexts[idx.as_usize()];
        self.remaining -= 1;
        Some(unsafe { self.slot(idx) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, I: IndexType> DoubleEndedIterator for IterMut<'a, T, I> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.prevs[idx.as_usize()];
        self.remaining -= 1;
        Some(unsafe { self.slot(idx) })
    }
}

impl<T, I: IndexType> ExactSizeIterator for IterMut<'_, T, I> {}
impl<T, I: IndexType> FusedIterator for IterMut<'_, T, I> {}

/// Owning iterator over a [`LinkedDeque`].
pub struct IntoIter<T, I: IndexType> {
    list: LinkedDeque<T, I>,
}

impl<T, I: IndexType> Iterator for IntoIter<T, I> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for IntoIter<T, I> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T, I: IndexType> ExactSizeIterator for IntoIter<T, I> {}
impl<T, I: IndexType> FusedIterator for IntoIter<T, I> {}

impl<T, I: IndexType> IntoIterator for LinkedDeque<T, I> {
    type Item = T;
    type IntoIter = IntoIter<T, I>;

    fn into_iter(self) -> IntoIter<T, I> {
        IntoIter { list: self }
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a LinkedDeque<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Iter<'a, T, I> {
        self.iter()
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a mut LinkedDeque<T, I> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, I>;

    fn into_iter(self) -> IterMut<'a, T, I> {
        self.iter_mut()
    }
}

// ─── std traits ───────────────────────────────────────────────────────────────

impl<T, I: IndexType> Default for LinkedDeque<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, I: IndexType> Clone for LinkedDeque<T, I> {
    /// Deep copy. The clone's arena is compact: node `k` sits in slot `k`.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for LinkedDeque<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, I: IndexType> PartialEq for LinkedDeque<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq, I: IndexType> Eq for LinkedDeque<T, I> {}

impl<T: PartialOrd, I: IndexType> PartialOrd for LinkedDeque<T, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, I: IndexType> Ord for LinkedDeque<T, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, I: IndexType> Hash for LinkedDeque<T, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T, I: IndexType> Extend<T> for LinkedDeque<T, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, I: IndexType> Extend<&'a T> for LinkedDeque<T, I> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, I: IndexType> FromIterator<T> for LinkedDeque<T, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, I: IndexType, const M: usize> From<[T; M]> for LinkedDeque<T, I> {
    fn from(arr: [T; M]) -> Self {
        arr.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::rc::Rc;

    /// Walks both directions and the free list, asserting every structural invariant.
    fn check_invariants<T, I: IndexType>(d: &LinkedDeque<T, I>) {
        assert_eq!(d.len == 0, d.head.is_none());
        assert_eq!(d.len == 0, d.tail.is_none());
        if d.len == 1 {
            assert_eq!(d.head, d.tail);
        }
        if !d.head.is_none() {
            assert!(d.prevs[d.head.as_usize()].is_none());
            assert!(d.nexts[d.tail.as_usize()].is_none());
        }

        let mut seen = vec![false; d.values.len()];
        let mut count = 0;
        let mut prev = I::NONE;
        let mut curr = d.head;
        while !curr.is_none() {
            let i = curr.as_usize();
            assert!(!seen[i], "slot {} linked twice", i);
            seen[i] = true;
            assert!(d.values[i].is_some());
            assert_eq!(d.prevs[i], prev);
            prev = curr;
            curr = d.nexts[i];
            count += 1;
        }
        assert_eq!(prev, d.tail);
        assert_eq!(count, d.len);

        let mut free = d.free_head;
        while !free.is_none() {
            let i = free.as_usize();
            assert!(!seen[i], "slot {} is both linked and free", i);
            seen[i] = true;
            assert!(d.values[i].is_none());
            free = d.nexts[i];
        }
        assert!(seen.iter().all(|&s| s), "slot neither linked nor free");
    }

    /// Element that counts how many times it has been dropped.
    struct DropCounter {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    // ─── basic ops ───────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_new_is_empty() {
        let d: LinkedDeque<i32> = LinkedDeque::new();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.capacity(), 0);
        check_invariants(&d);
    }

    #[test]
    fn test_linked_deque_scenario_one_two_three() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        d.push_back(1);
        d.push_back(2);
        d.push_back(3);
        assert_eq!(d.get_front(), Ok(1));
        assert_eq!(d.get_back(), Ok(3));
        assert_eq!(d.len(), 3);

        assert_eq!(d.pop_front(), Ok(1));
        assert_eq!(d.len(), 2);
        assert_eq!(d.get_front(), Ok(2));

        assert_eq!(d.pop_back(), Ok(3));
        assert_eq!(d.len(), 1);

        assert_eq!(d.pop_front(), Ok(2));
        assert_eq!(d.len(), 0);
        assert!(d.is_empty());

        assert_eq!(d.pop_front(), Err(CollectionError::Empty));
        check_invariants(&d);
    }

    #[test]
    fn test_linked_deque_empty_errors() {
        let mut d: LinkedDeque<String> = LinkedDeque::new();
        assert_eq!(d.pop_front(), Err(CollectionError::Empty));
        assert_eq!(d.pop_back(), Err(CollectionError::Empty));
        assert_eq!(d.get_front(), Err(CollectionError::Empty));
        assert_eq!(d.get_back(), Err(CollectionError::Empty));
        assert_eq!(d.front(), None);
        assert_eq!(d.back(), None);
        check_invariants(&d);

        // still usable afterwards
        d.push_front("a".to_string());
        assert_eq!(d.get_back(), Ok("a".to_string()));
    }

    #[test]
    fn test_linked_deque_fifo_and_lifo() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        for i in 0..5 {
            d.push_back(i);
        }
        let fifo: Vec<_> = std::iter::from_fn(|| d.pop_front().ok()).collect();
        assert_eq!(fifo, vec![0, 1, 2, 3, 4]);

        for i in 0..5 {
            d.push_front(i);
        }
        let fifo: Vec<_> = std::iter::from_fn(|| d.pop_back().ok()).collect();
        assert_eq!(fifo, vec![0, 1, 2, 3, 4]);

        for i in 0..5 {
            d.push_back(i);
        }
        let lifo: Vec<_> = std::iter::from_fn(|| d.pop_back().ok()).collect();
        assert_eq!(lifo, vec![4, 3, 2, 1, 0]);

        for i in 0..5 {
            d.push_front(i);
        }
        let lifo: Vec<_> = std::iter::from_fn(|| d.pop_front().ok()).collect();
        assert_eq!(lifo, vec![4, 3, 2, 1, 0]);
        assert!(d.is_empty());
    }

    #[test]
    fn test_linked_deque_peek_does_not_mutate() {
        let d: LinkedDeque<i32> = LinkedDeque::from([7, 8, 9]);
        for _ in 0..3 {
            assert_eq!(d.get_front(), Ok(7));
            assert_eq!(d.get_back(), Ok(9));
        }
        assert_eq!(d.len(), 3);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
    }

    #[test]
    fn test_linked_deque_single_element() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        d.push_front(1);
        check_invariants(&d);
        assert_eq!(d.head, d.tail);
        assert_eq!(d.front(), Some(&1));
        assert_eq!(d.back(), Some(&1));
        assert_eq!(d.pop_back(), Ok(1));
        assert!(d.is_empty());
        check_invariants(&d);
    }

    #[test]
    fn test_linked_deque_front_back_mut() {
        let mut d: LinkedDeque<i32> = LinkedDeque::from([1, 2]);
        *d.front_mut().unwrap() = 10;
        *d.back_mut().unwrap() += 10;
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![10, 12]);
    }

    // ─── arena ───────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_slot_reuse() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        for i in 0..8 {
            d.push_back(i);
        }
        for _ in 0..1000 {
            let v = d.pop_front().unwrap();
            d.push_back(v);
            let v = d.pop_back().unwrap();
            d.push_front(v);
        }
        assert_eq!(d.values.len(), 8);
        check_invariants(&d);
    }

    #[test]
    fn test_linked_deque_narrow_index_fills_arena() {
        let mut d: LinkedDeque<u8, u8> = LinkedDeque::new();
        for i in 0..255u8 {
            d.push_back(i);
        }
        assert_eq!(d.len(), 255);
        assert_eq!(d.back(), Some(&254));
        check_invariants(&d);
    }

    #[test]
    #[should_panic(expected = "exceeds the capacity")]
    fn test_linked_deque_narrow_index_overflow_panics() {
        let mut d: LinkedDeque<u8, u8> = LinkedDeque::new();
        for i in 0..=255u8 {
            d.push_back(i);
        }
    }

    #[test]
    fn test_linked_deque_random_interleaving_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut d: LinkedDeque<u32, u16> = LinkedDeque::new();
        let mut model: VecDeque<u32> = VecDeque::new();
        for step in 0..2_000u32 {
            match rng.gen_range(0..6) {
                0 => {
                    d.push_front(step);
                    model.push_front(step);
                }
                1 | 2 => {
                    d.push_back(step);
                    model.push_back(step);
                }
                3 => assert_eq!(d.pop_front().ok(), model.pop_front()),
                4 => assert_eq!(d.pop_back().ok(), model.pop_back()),
                _ => {
                    if !model.is_empty() {
                        let at = rng.gen_range(0..model.len());
                        assert_eq!(d.remove(at), model.remove(at));
                    }
                }
            }
            check_invariants(&d);
            assert_eq!(d.len(), model.len());
            assert_eq!(d.front(), model.front());
            assert_eq!(d.back(), model.back());
        }
        assert!(d.iter().eq(model.iter()));
    }

    // ─── resource safety ─────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_drops_each_value_once() {
        let drops = Rc::new(Cell::new(0));
        let mut rng = StdRng::seed_from_u64(42);
        let mut pushed = 0;
        let mut popped = 0;
        {
            let mut d: LinkedDeque<DropCounter> = LinkedDeque::new();
            for _ in 0..500 {
                let popped_one = match rng.gen_range(0..4) {
                    0 => {
                        d.push_front(DropCounter { drops: drops.clone() });
                        pushed += 1;
                        false
                    }
                    1 => {
                        d.push_back(DropCounter { drops: drops.clone() });
                        pushed += 1;
                        false
                    }
                    2 => d.pop_front().is_ok(),
                    _ => d.pop_back().is_ok(),
                };
                if popped_one {
                    popped += 1;
                }
                assert_eq!(drops.get(), popped);
            }
            assert_eq!(d.len(), pushed - popped);
        }
        assert_eq!(drops.get(), pushed);
    }

    #[test]
    fn test_linked_deque_clear_drops_values() {
        let drops = Rc::new(Cell::new(0));
        let mut d: LinkedDeque<DropCounter> = LinkedDeque::new();
        for _ in 0..5 {
            d.push_back(DropCounter { drops: drops.clone() });
        }
        d.pop_front().unwrap();
        assert_eq!(drops.get(), 1);
        d.clear();
        assert_eq!(drops.get(), 5);
        assert!(d.is_empty());
        check_invariants(&d);
        d.push_back(DropCounter { drops: drops.clone() });
        drop(d);
        assert_eq!(drops.get(), 6);
    }

    // ─── traversal ───────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_forward_backward() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        assert_eq!(d.forward().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(d.backward().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        // restartable
        assert_eq!(d.forward().count(), 3);
        assert_eq!(d.backward().count(), 3);
    }

    #[test]
    fn test_linked_deque_iter_double_ended_meets_in_middle() {
        let d: LinkedDeque<i32> = (1..=5).collect();
        let mut it = d.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_linked_deque_iter_mut_and_into_iter() {
        let mut d: LinkedDeque<i32> = (1..=4).collect();
        for v in d.iter_mut() {
            *v *= 10;
        }
        let mut it = d.iter_mut();
        *it.next_back().unwrap() += 1;
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 41]);

        let rev: Vec<_> = d.clone().into_iter().rev().collect();
        assert_eq!(rev, vec![41, 30, 20, 10]);
        let owned: Vec<_> = d.into_iter().collect();
        assert_eq!(owned, vec![10, 20, 30, 41]);
    }

    #[test]
    fn test_linked_deque_get_and_remove() {
        let mut d: LinkedDeque<i32> = (0..6).collect();
        assert_eq!(d.get(0), Some(&0));
        assert_eq!(d.get(4), Some(&4));
        assert_eq!(d.get(6), None);
        *d.get_mut(1).unwrap() = 100;
        assert_eq!(d.remove(1), Some(100));
        assert_eq!(d.remove(4), Some(5));
        assert_eq!(d.remove(10), None);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3, 4]);
        assert!(d.contains(&3));
        assert!(!d.contains(&5));
        check_invariants(&d);
    }

    // ─── copy / move ─────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_clone_is_deep_and_compact() {
        let mut d: LinkedDeque<String> = LinkedDeque::new();
        d.push_back("a".into());
        d.push_back("b".into());
        d.push_front("z".into());
        d.pop_back().unwrap();
        let mut cloned = d.clone();
        check_invariants(&cloned);
        assert_eq!(cloned.values.len(), cloned.len());
        cloned.push_back("c".into());
        assert_eq!(d.len(), 2);
        assert_eq!(cloned.len(), 3);
        assert_eq!(d.iter().collect::<Vec<_>>(), vec!["z", "a"]);
    }

    #[test]
    fn test_linked_deque_take_empties_source() {
        let mut d: LinkedDeque<i32> = LinkedDeque::from([1, 2, 3]);
        let moved = d.take();
        assert!(d.is_empty());
        check_invariants(&d);
        assert_eq!(moved.len(), 3);
        d.push_back(4);
        assert_eq!(d.pop_front(), Ok(4));
    }

    // ─── std traits ──────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_traits_comparison_and_hash() {
        let d1: LinkedDeque<i32> = vec![1, 2, 3].into_iter().collect();
        let mut d2: LinkedDeque<i32> = LinkedDeque::new();
        d2.push_front(3);
        d2.push_front(2);
        d2.push_front(1);
        let d3: LinkedDeque<i32> = vec![1, 2, 4].into_iter().collect();
        let d4: LinkedDeque<i32> = vec![1, 2].into_iter().collect();

        assert_eq!(d1, d2);
        assert!(d1 < d3);
        assert!(d1 > d4);

        let hash = |d: &LinkedDeque<i32>| {
            let mut h = DefaultHasher::new();
            d.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&d1), hash(&d2));
    }

    #[test]
    fn test_linked_deque_traits_debug_and_extend() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        d.extend(vec![1, 2]);
        d.extend(&[3]);
        assert_eq!(format!("{:?}", d), "[1, 2, 3]");
    }

    #[test]
    fn test_linked_deque_any_deque_trait() {
        let mut linked: LinkedDeque<i32> = LinkedDeque::new();
        let mut ring: VecDeque<i32> = VecDeque::new();
        for any in [
            &mut linked as &mut dyn AnyDeque<i32>,
            &mut ring as &mut dyn AnyDeque<i32>,
        ] {
            any.push_back(10);
            any.push_front(5);
            any.push_back(20);
            assert_eq!(any.len(), 3);
            assert!(!any.is_empty());
            assert_eq!(any.front(), Some(&5));
            assert_eq!(any.back(), Some(&20));
            assert_eq!(any.get(1), Some(&10));
            *any.back_mut().unwrap() = 21;
            assert_eq!(any.remove(1), Some(10));
            assert_eq!(any.pop_back(), Some(21));
            assert_eq!(any.pop_front(), Some(5));
            assert_eq!(any.pop_front(), None);
            any.push_back(1);
            any.clear();
            assert!(any.is_empty());
        }
    }

    #[test]
    fn test_linked_deque_any_deque_items() {
        let mut linked: LinkedDeque<i32> = LinkedDeque::new();
        let mut ring: VecDeque<i32> = VecDeque::new();
        for any in [
            &mut linked as &mut dyn AnyDeque<i32>,
            &mut ring as &mut dyn AnyDeque<i32>,
        ] {
            any.push_back(2);
            any.push_front(1);
            any.push_back(3);
            assert_eq!(any.items().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
            assert_eq!(any.items().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        }
        assert!(LinkedDeque::<i32>::new().items().next().is_none());
    }

    #[test]
    fn test_linked_deque_iterators_are_send_and_sync() {
        fn assert_send_sync<X: Send + Sync>(_: &X) {}
        let mut d: LinkedDeque<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_send_sync(&d.iter());
        assert_send_sync(&d.iter_mut());

        let handle = {
            let it = d.iter_mut();
            std::thread::scope(|s| {
                s.spawn(move || {
                    for v in it {
                        v.push('!');
                    }
                })
                .join()
            })
        };
        assert!(handle.is_ok());
        assert_eq!(d.iter().map(String::as_str).collect::<Vec<_>>(), vec!["a!", "b!"]);
        assert_send_sync(&d);
        assert_send_sync(&d.into_iter());
    }
}
