//! Compact link types for arena-backed linked structures.

use core::hash::Hash;
use std::fmt::Debug;

/// Integer types used as **doubly-linked-list node indices**.
///
/// Instead of pointer-based links, the linked collections store indices into
/// parallel arrays. A narrower index shrinks every link (a `u16` link is a
/// quarter of a 64-bit pointer) at the cost of a smaller addressable arena.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel value indicating "no node" (analogous to a null pointer).
    /// Never a valid slot, so an arena holds at most `NONE` slots.
    const NONE: Self;

    /// The first valid index.
    const ZERO: Self;

    /// Converts this index to a `usize` for array access.
    fn as_usize(self) -> usize;

    /// Converts a slot index to this type, or `None` if it does not fit
    /// below the `NONE` sentinel.
    fn try_from_usize(i: usize) -> Option<Self>;

    /// Converts a slot index to this type.
    ///
    /// # Panics
    /// Panics if `i` does not fit below the `NONE` sentinel.
    #[inline(always)]
    fn from_usize(i: usize) -> Self {
        match Self::try_from_usize(i) {
            Some(idx) => idx,
            None => panic!(
                "index {} exceeds the capacity of {}",
                i,
                core::any::type_name::<Self>()
            ),
        }
    }

    /// Returns `true` if this is the `NONE` sentinel.
    #[inline(always)]
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

macro_rules! impl_index_type {
    ($($t:ty),*) => {
        $(
            impl IndexType for $t {
                const NONE: Self = <$t>::MAX;
                const ZERO: Self = 0;
                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
                #[inline(always)]
                fn try_from_usize(i: usize) -> Option<Self> {
                    <$t>::try_from(i).ok().filter(|&idx| idx != Self::NONE)
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
