//! Bidirectional cursors over a [`LinkedDeque`].
//!
//! A cursor rests either on a node or on the *end marker*, a ghost position
//! that sits after the back node and before the front node. Stepping forward
//! past the back lands on the end marker; stepping forward again wraps to the
//! front. Stepping backward from the end marker lands on the back node, so
//! `cursor_end()` followed by `move_prev()` behaves like decrementing `end()`.

use core::fmt;
use core::ptr;

use crate::lists::linked_deque::LinkedDeque;
use crate::IndexType;

/// Read-only cursor. Cheap to copy; any number may coexist.
///
/// Two cursors compare equal iff they belong to the same deque and rest on
/// the same node, or both rest on its end marker.
pub struct Cursor<'a, T, I: IndexType = u32> {
    list: &'a LinkedDeque<T, I>,
    current: I,
}

impl<'a, T, I: IndexType> Cursor<'a, T, I> {
    pub(crate) fn new(list: &'a LinkedDeque<T, I>, current: I) -> Self {
        Self { list, current }
    }

    /// Returns `true` if the cursor rests on the end marker.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The element under the cursor, or `None` on the end marker.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        if self.current.is_none() {
            None
        } else {
            Some(self.list.value(self.current))
        }
    }

    /// Steps toward the back.
    pub fn move_next(&mut self) {
        self.current = if self.current.is_none() {
            self.list.head_index()
        } else {
            self.list.next_of(self.current)
        };
    }

    /// Steps toward the front.
    pub fn move_prev(&mut self) {
        self.current = if self.current.is_none() {
            self.list.tail_index()
        } else {
            self.list.prev_of(self.current)
        };
    }

    /// The element `move_next` would land on.
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut c = *self;
        c.move_next();
        c.current()
    }

    /// The element `move_prev` would land on.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut c = *self;
        c.move_prev();
        c.current()
    }
}

impl<T, I: IndexType> Clone for Cursor<'_, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I: IndexType> Copy for Cursor<'_, T, I> {}

impl<T, I: IndexType> PartialEq for Cursor<'_, T, I> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.current == other.current
    }
}

impl<T, I: IndexType> Eq for Cursor<'_, T, I> {}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for Cursor<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current())
            .field("len", &self.list.len())
            .finish()
    }
}

/// Cursor with write access to the element under it and to the chain.
///
/// Besides stepping and dereferencing, it can splice new nodes around its
/// position and unlink the node it rests on.
pub struct CursorMut<'a, T, I: IndexType = u32> {
    list: &'a mut LinkedDeque<T, I>,
    current: I,
}

impl<'a, T, I: IndexType> CursorMut<'a, T, I> {
    pub(crate) fn new(list: &'a mut LinkedDeque<T, I>, current: I) -> Self {
        Self { list, current }
    }

    /// Returns `true` if the cursor rests on the end marker.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The element under the cursor, or `None` on the end marker.
    #[inline]
    pub fn current(&mut self) -> Option<&mut T> {
        if self.current.is_none() {
            None
        } else {
            Some(self.list.value_mut(self.current))
        }
    }

    /// Steps toward the back.
    pub fn move_next(&mut self) {
        self.current = if self.current.is_none() {
            self.list.head_index()
        } else {
            self.list.next_of(self.current)
        };
    }

    /// Steps toward the front.
    pub fn move_prev(&mut self) {
        self.current = if self.current.is_none() {
            self.list.tail_index()
        } else {
            self.list.prev_of(self.current)
        };
    }

    /// The element `move_next` would land on.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = if self.current.is_none() {
            self.list.head_index()
        } else {
            self.list.next_of(self.current)
        };
        if next.is_none() {
            None
        } else {
            Some(self.list.value_mut(next))
        }
    }

    /// The element `move_prev` would land on.
    pub fn peek_prev(&mut self) -> Option<&mut T> {
        let prev = if self.current.is_none() {
            self.list.tail_index()
        } else {
            self.list.prev_of(self.current)
        };
        if prev.is_none() {
            None
        } else {
            Some(self.list.value_mut(prev))
        }
    }

    /// Inserts `item` just before the cursor. On the end marker this appends
    /// to the back. The cursor does not move.
    pub fn insert_before(&mut self, item: T) {
        let (prev, next) = if self.current.is_none() {
            (self.list.tail_index(), I::NONE)
        } else {
            (self.list.prev_of(self.current), self.current)
        };
        self.list.insert_node(item, prev, next);
    }

    /// Inserts `item` just after the cursor. On the end marker this prepends
    /// to the front. The cursor does not move.
    pub fn insert_after(&mut self, item: T) {
        let (prev, next) = if self.current.is_none() {
            (I::NONE, self.list.head_index())
        } else {
            (self.current, self.list.next_of(self.current))
        };
        self.list.insert_node(item, prev, next);
    }

    /// Unlinks the node under the cursor and returns its value, leaving the
    /// cursor on the following node (or the end marker). Returns `None` on
    /// the end marker.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.current.is_none() {
            return None;
        }
        let idx = self.current;
        self.current = self.list.next_of(idx);
        Some(self.list.remove_node(idx))
    }

    /// A read-only view of this cursor, borrowing it.
    pub fn as_cursor(&self) -> Cursor<'_, T, I> {
        Cursor::new(self.list, self.current)
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for CursorMut<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.as_cursor().current())
            .field("len", &self.list.len())
            .finish()
    }
}
