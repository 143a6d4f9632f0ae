//! Index arithmetic shared by the heap disciplines
//!
//! Heaps are stored level by level in a flat slice. For branching factor `d`:
//!
//! ```text
//!                 d = 2                              d = 3
//!                   0                                  0
//!           1               2                  1       2       3
//!       3       4       5       6            4 5 6   7 8 9  10 11 12
//! ```
//!
//! - Up: `(i - 1) / d`
//! - First child: `d * i + 1`
//!
//! None of the functions here can overflow for positions inside a slice, whose
//! length never exceeds `isize::MAX`. Callers test [`last_parent`] before asking
//! for a child instead of computing `d * i + 1` and comparing it with the length.

/// The parent of a non-root position
///
/// ```
/// use minmax_dary_heap::index::parent;
/// assert_eq!(parent(1, 2), 0);
/// assert_eq!(parent(6, 2), 2);
/// assert_eq!(parent(4, 4), 0);
/// assert_eq!(parent(5, 4), 1);
/// ```
#[inline(always)]
pub fn parent(i: usize, d: usize) -> usize {
    debug_assert!(i > 0, "the root has no parent");
    (i - 1) / d
}

/// The first child of `i`
///
/// Only meaningful when `i <= last_parent(len, d)`, which guarantees the result
/// is a valid position.
///
/// ```
/// use minmax_dary_heap::index::first_child;
/// assert_eq!(first_child(0, 2), 1);
/// assert_eq!(first_child(3, 2), 7);
/// assert_eq!(first_child(1, 4), 5);
/// ```
#[inline(always)]
pub fn first_child(i: usize, d: usize) -> usize {
    d * i + 1
}

/// The last position of a heap of `len` elements that has at least one child
///
/// Returns `None` when no element has children (`len < 2`).
///
/// ```
/// use minmax_dary_heap::index::last_parent;
/// assert_eq!(last_parent(0, 2), None);
/// assert_eq!(last_parent(1, 2), None);
/// assert_eq!(last_parent(2, 2), Some(0));
/// assert_eq!(last_parent(7, 2), Some(2));
/// assert_eq!(last_parent(8, 4), Some(1));
/// ```
#[inline(always)]
pub fn last_parent(len: usize, d: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some((len - 2) / d)
    }
}

/// The last (inclusive) child of the node whose first child is `first`
///
/// ```
/// use minmax_dary_heap::index::last_child;
/// assert_eq!(last_child(1, 4, 8), 4);
/// assert_eq!(last_child(5, 4, 8), 7);
/// assert_eq!(last_child(5, 4, 6), 5);
/// assert_eq!(last_child(1, usize::MAX, 3), 2);
/// ```
#[inline(always)]
pub fn last_child(first: usize, d: usize, len: usize) -> usize {
    first + (d - 1).min(len - 1 - first)
}

/// Whether position `i` of a min-max heap lies on a min level
///
/// The depth of `i` is the bit length of `i + 1` minus one; even depths are min
/// levels, odd depths are max levels. `usize::MAX` sits at depth 64 on 64-bit
/// targets, one past where `i + 1` would overflow.
///
/// ```
/// use minmax_dary_heap::index::is_min_level;
/// assert!(is_min_level(0));
/// assert!(!is_min_level(1));
/// assert!(!is_min_level(2));
/// assert!(is_min_level(3));
/// assert!(is_min_level(6));
/// assert!(!is_min_level(7));
/// ```
#[inline(always)]
pub fn is_min_level(i: usize) -> bool {
    i.checked_add(1).map_or(usize::BITS, usize::ilog2) % 2 == 0
}

/// The grandparent of position `i` in a binary layout, for `i >= 3`
///
/// ```
/// use minmax_dary_heap::index::grandparent;
/// assert_eq!(grandparent(3), 0);
/// assert_eq!(grandparent(6), 0);
/// assert_eq!(grandparent(7), 1);
/// assert_eq!(grandparent(14), 2);
/// ```
#[inline(always)]
pub fn grandparent(i: usize) -> usize {
    debug_assert!(i >= 3, "positions above depth 2 have no grandparent");
    (i - 3) / 4
}
