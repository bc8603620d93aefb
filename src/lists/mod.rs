pub mod cursor;
pub mod linked_deque;
