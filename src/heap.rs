//! Array-backed binary heaps.
//!
//! Both heaps store their elements in a dense `Vec` and address the implicit
//! binary tree positionally: the parent of slot `i` is `(i - 1) / 2`, its
//! children are `2i + 1` and `2i + 2`.

pub mod flat;
pub mod locator;

pub use flat::FlatBinaryHeap;
pub use locator::{Element, Identity, LocatorBinaryHeap, NO_IDENTITY};

/// Position inside the heap array.
pub type HeapSlot = usize;

/// A totally ordered scalar the heaps can be keyed by.
///
/// `NO_DATA` is returned by peek and extract operations on an empty heap. It is
/// the smallest representable value, so callers have to consult the heap size
/// before treating it as real data.
pub trait Priority: Ord + Copy {
    const NO_DATA: Self;
}

macro_rules! priority {
    ($($t:ty),*) => {
        $(
            impl Priority for $t {
                const NO_DATA: Self = <$t>::MIN;
            }
        )*
    };
}

priority!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Which value a heap keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    Min,
    Max,
}

impl HeapOrder {
    /// `true` if `a` strictly belongs closer to the root than `b`.
    pub fn beats<V: Priority>(self, a: V, b: V) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

#[inline]
pub(crate) fn parent_of(slot: HeapSlot) -> HeapSlot {
    (slot - 1) / 2
}

#[inline]
pub(crate) fn left_child_of(slot: HeapSlot) -> HeapSlot {
    2 * slot + 1
}

/// First slot from which a bottom-up heapify has to sift down.
#[inline]
pub(crate) fn last_internal_slot(len: usize) -> Option<HeapSlot> {
    (len / 2).checked_sub(1)
}
