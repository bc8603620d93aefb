//! Word editing driven by control characters in a line of text.
//!
//! Words are separated by spaces and pushed onto a deque as they complete;
//! every `-` pops the most recent word. Only the public [`AnyDeque`] surface
//! is used, so any backend can hold the words.

use crate::lists::linked_deque::AnyDeque;

/// Character that pops the most recent word.
pub const POP: char = '-';

/// Character that ends the pending word.
pub const SEPARATOR: char = ' ';

/// Order in which [`render`] lists the surviving words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Order {
    /// Oldest word first.
    #[default]
    Pushed,
    /// Newest word first, the order successive pops would return them.
    Popped,
}

/// Feeds one line into `words`.
///
/// A `-` with words already stored first pushes the pending word (if any) and
/// then pops the back. A `-` with nothing stored is ignored, and the pending
/// word keeps growing across it.
pub fn process_line(line: &str, words: &mut dyn AnyDeque<String>) {
    let mut pending = String::new();
    for c in line.chars() {
        if c == POP {
            if !words.is_empty() {
                if !pending.is_empty() {
                    words.push_back(std::mem::take(&mut pending));
                }
                words.pop_back();
            }
        } else if c == SEPARATOR {
            if !pending.is_empty() {
                words.push_back(std::mem::take(&mut pending));
            }
        } else {
            pending.push(c);
        }
    }
    if !pending.is_empty() {
        words.push_back(pending);
    }
}

/// Joins the stored words with single spaces in the requested order.
pub fn render(words: &dyn AnyDeque<String>, order: Order) -> String {
    let items: Box<dyn DoubleEndedIterator<Item = &String> + '_> = match order {
        Order::Pushed => words.items(),
        Order::Popped => Box::new(words.items().rev()),
    };
    items.map(String::as_str).collect::<Vec<_>>().join(" ")
}
