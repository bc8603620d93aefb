//! # Linked Collections
//!
//! Textbook containers built on index-linked arenas instead of owning pointers.
//!
//! This crate provides `LinkedDeque`, a double-ended queue over a doubly linked
//! chain of nodes, together with `RandomizedQueue` and `ArrayStack`.
//!
//! ## Key Features
//!
//! * **Arena Links:** Nodes live in parallel vectors and link to each other by
//!   integer index. A freed slot goes on a free list and is reused by the next
//!   push, so every element is dropped exactly once and no node outlives the deque.
//! * **Compact Indices:** The link width is a type parameter (`u8`, `u16`,
//!   `u32`, `usize`) via the `IndexType` trait.
//! * **Cursors:** `Cursor` / `CursorMut` step in both directions, compare by
//!   position, and can splice nodes in the middle of the chain.
//! * **Explicit Empty Errors:** Removing or copying out of an empty container
//!   returns `CollectionError::Empty` instead of panicking.
//! * **Interoperability:** `LinkedDeque` and `VecDeque` both implement the
//!   `AnyDeque` trait.
//!
//! ## Examples
//!
//! ### LinkedDeque
//!
//! ```rust
//! use linked_collections::{CollectionError, LinkedDeque};
//!
//! let mut d: LinkedDeque<i32> = LinkedDeque::new();
//! d.push_back(1);
//! d.push_back(2);
//! d.push_back(3);
//!
//! assert_eq!(d.get_front(), Ok(1));
//! assert_eq!(d.get_back(), Ok(3));
//! assert_eq!(d.pop_front(), Ok(1));
//! assert_eq!(d.pop_back(), Ok(3));
//! assert_eq!(d.pop_front(), Ok(2));
//! assert_eq!(d.pop_front(), Err(CollectionError::Empty));
//! ```
//!
//! ### Cursors
//!
//! ```rust
//! use linked_collections::LinkedDeque;
//!
//! let d: LinkedDeque<char> = "abc".chars().collect();
//!
//! let mut c = d.cursor_front();
//! let mut seen = String::new();
//! while c != d.cursor_end() {
//!     seen.push(*c.current().unwrap());
//!     c.move_next();
//! }
//! assert_eq!(seen, "abc");
//!
//! // Decrementing the end marker lands on the back element.
//! c.move_prev();
//! assert_eq!(c.current(), Some(&'c'));
//! ```
//!
//! ### ArrayStack
//!
//! ```rust
//! use linked_collections::ArrayStack;
//!
//! let mut s = ArrayStack::new();
//! s.push("to");
//! s.push("be");
//! assert_eq!(s.capacity(), ArrayStack::<&str>::DEFAULT_CAPACITY);
//! assert_eq!(s.pop(), Ok("be"));
//! // One item left in 16 slots: the pop halved the capacity.
//! assert_eq!(s.capacity(), 8);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod lists;
pub mod queues;
pub mod stacks;
pub mod utils;
pub mod words;

// --- Re-exports ---

pub use error::{CollectionError, Result};
pub use lists::cursor::{Cursor, CursorMut};
pub use lists::linked_deque::{AnyDeque, IntoIter, Iter, IterMut, LinkedDeque};
#[cfg(feature = "random")]
pub use queues::randomized_queue::RandomizedQueue;
pub use stacks::array_stack::ArrayStack;
pub use utils::index_type::IndexType;
