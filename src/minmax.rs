//! Min-max heap algorithms
//!
//! A min-max heap is a complete binary tree stored level by level in which the
//! levels alternate between *min levels* (even depth, starting at the root) and
//! *max levels* (odd depth). An element on a min level is no greater than any of
//! its descendants, and an element on a max level is no smaller. The minimum is
//! therefore always at the root, and the maximum is one of the root's children.
//!
//! All functions operate in place on the caller's slice. The slice bounds are
//! the heap bounds, so "removing" an element means popping it into the last
//! position and then shrinking the slice the next call sees.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `push`        | O(log n)   |
//! | `make`        | O(n)       |
//! | `pop_min`     | O(log n)   |
//! | `pop_max`     | O(log n)   |
//! | `max_index`   | O(1)       |
//! | `is_heap`     | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use minmax_dary_heap::minmax::{
//!     is_minmax_heap, make_minmax_heap, pop_minmax_heap_max, pop_minmax_heap_min,
//!     push_minmax_heap,
//! };
//!
//! let mut v = vec![5, 1, 9, 3];
//! make_minmax_heap(&mut v);
//! v.push(7);
//! push_minmax_heap(&mut v);
//! assert!(is_minmax_heap(&v));
//!
//! pop_minmax_heap_min(&mut v);
//! assert_eq!(v.pop(), Some(1));
//! pop_minmax_heap_max(&mut v);
//! assert_eq!(v.pop(), Some(9));
//! assert!(is_minmax_heap(&v));
//! ```
//!
//! # Equal maxima
//!
//! When the two children of the root are equivalent, either may be treated as
//! the maximum. The choice is deterministic for a given input, but callers must
//! not rely on which one is picked.

use crate::index::{grandparent, is_min_level, parent};
use crate::traits::HeapError;

/// Orders `a` before `b` on a min level (`MIN`) or a max level (`!MIN`)
#[inline(always)]
fn before<const MIN: bool, T, F>(less: &mut F, a: &T, b: &T) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if MIN {
        less(a, b)
    } else {
        less(b, a)
    }
}

/// Moves the element at `i` up its chain of grandparents, all on the same polarity
#[inline]
fn sift_up_grandparents<const MIN: bool, T, F>(heap: &mut [T], mut i: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while i >= 3 {
        let g = grandparent(i);
        if before::<MIN, _, _>(less, &heap[i], &heap[g]) {
            heap.swap(i, g);
            i = g;
        } else {
            break;
        }
    }
}

/// Restores the invariant after the element at `i` was placed with valid descendants
///
/// Compares against children and grandchildren. Moving to a grandchild may put the
/// element out of order with the grandchild's parent (a level of the opposite
/// polarity), which is repaired by a single swap before continuing.
fn trickle_down<const MIN: bool, T, F>(heap: &mut [T], mut i: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = heap.len();
    loop {
        // i < len / 2 keeps the children 2 * i + 1 and 2 * i + 2 within len
        if i >= len / 2 {
            return;
        }
        let left = 2 * i + 1;
        let mut m = left;
        if left + 1 < len && before::<MIN, _, _>(less, &heap[left + 1], &heap[m]) {
            m = left + 1;
        }

        // zero-sized elements allow lengths where 2 * left + 1 overflows
        let mut grandchild = false;
        if let Some(first_grandchild) = left
            .checked_mul(2)
            .and_then(|x| x.checked_add(1))
            .filter(|&g| g < len)
        {
            let count = (len - first_grandchild).min(4);
            for g in first_grandchild..first_grandchild + count {
                if before::<MIN, _, _>(less, &heap[g], &heap[m]) {
                    m = g;
                    grandchild = true;
                }
            }
        }

        if !before::<MIN, _, _>(less, &heap[m], &heap[i]) {
            return;
        }
        heap.swap(m, i);
        if !grandchild {
            // a child already bounds its own subtree, one swap settles it
            return;
        }
        let p = parent(m, 2);
        if before::<MIN, _, _>(less, &heap[p], &heap[m]) {
            heap.swap(m, p);
        }
        i = m;
    }
}

#[inline]
fn trickle_down_at<T, F>(heap: &mut [T], i: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_min_level(i) {
        trickle_down::<true, _, _>(heap, i, less);
    } else {
        trickle_down::<false, _, _>(heap, i, less);
    }
}

#[cfg(feature = "check-invariants")]
#[inline]
fn debug_check<T, F>(heap: &[T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(check_minmax_heap_by(heap, less), Ok(()));
}

#[cfg(not(feature = "check-invariants"))]
#[inline(always)]
fn debug_check<T, F>(_heap: &[T], _less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
}

/// Inserts the last element of `heap` into the min-max heap formed by the rest
///
/// `heap[..heap.len() - 1]` must already be a min-max heap; the new element is
/// expected to have just been appended. An empty slice is left untouched.
pub fn push_minmax_heap<T: Ord>(heap: &mut [T]) {
    push_minmax_heap_by(heap, T::lt);
}

/// Like [`push_minmax_heap`], ordering elements with `less`
///
/// `less(a, b)` returns whether `a` is strictly ordered before `b` and must be a
/// strict weak ordering.
pub fn push_minmax_heap_by<T, F>(heap: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(i) = heap.len().checked_sub(1) else {
        return;
    };
    if i > 0 {
        let p = parent(i, 2);
        if is_min_level(i) {
            if less(&heap[p], &heap[i]) {
                heap.swap(i, p);
                sift_up_grandparents::<false, _, _>(heap, p, &mut less);
            } else {
                sift_up_grandparents::<true, _, _>(heap, i, &mut less);
            }
        } else if less(&heap[i], &heap[p]) {
            heap.swap(i, p);
            sift_up_grandparents::<true, _, _>(heap, p, &mut less);
        } else {
            sift_up_grandparents::<false, _, _>(heap, i, &mut less);
        }
    }
    debug_check(heap, &mut less);
}

/// Rearranges `heap` into a min-max heap
pub fn make_minmax_heap<T: Ord>(heap: &mut [T]) {
    make_minmax_heap_by(heap, T::lt);
}

/// Like [`make_minmax_heap`], ordering elements with `less`
pub fn make_minmax_heap_by<T, F>(heap: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in (0..heap.len() / 2).rev() {
        trickle_down_at(heap, i, &mut less);
    }
    debug_check(heap, &mut less);
}

/// Moves the minimum of the min-max heap to the last position
///
/// Afterwards `heap[..heap.len() - 1]` is a min-max heap. Calling this on an
/// empty slice is a precondition violation: it panics in debug builds and does
/// nothing otherwise.
pub fn pop_minmax_heap_min<T: Ord>(heap: &mut [T]) {
    pop_minmax_heap_min_by(heap, T::lt);
}

/// Like [`pop_minmax_heap_min`], ordering elements with `less`
pub fn pop_minmax_heap_min_by<T, F>(heap: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!heap.is_empty(), "pop from an empty min-max heap");
    let Some(last) = heap.len().checked_sub(1) else {
        return;
    };
    heap.swap(0, last);
    let rest = &mut heap[..last];
    trickle_down::<true, _, _>(rest, 0, &mut less);
    debug_check(rest, &mut less);
}

/// Moves the maximum of the min-max heap to the last position
///
/// Afterwards `heap[..heap.len() - 1]` is a min-max heap. Calling this on an
/// empty slice is a precondition violation: it panics in debug builds and does
/// nothing otherwise.
pub fn pop_minmax_heap_max<T: Ord>(heap: &mut [T]) {
    pop_minmax_heap_max_by(heap, T::lt);
}

/// Like [`pop_minmax_heap_max`], ordering elements with `less`
pub fn pop_minmax_heap_max_by<T, F>(heap: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!heap.is_empty(), "pop from an empty min-max heap");
    let Some(m) = max_index(heap, &mut less) else {
        return;
    };
    let last = heap.len() - 1;
    heap.swap(m, last);
    let rest = &mut heap[..last];
    trickle_down::<false, _, _>(rest, m, &mut less);
    debug_check(rest, &mut less);
}

#[inline]
fn max_index<T, F>(heap: &[T], less: &mut F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    match heap.len() {
        0 => None,
        1 => Some(0),
        2 => Some(1),
        _ => Some(if less(&heap[1], &heap[2]) { 2 } else { 1 }),
    }
}

/// Returns the position of the maximum of a min-max heap, or `None` if it is empty
///
/// This is the element [`pop_minmax_heap_max`] would remove.
///
/// ```
/// use minmax_dary_heap::minmax::{make_minmax_heap, minmax_heap_max_index};
///
/// let mut v = vec![4, 8, 15, 16, 23, 42];
/// make_minmax_heap(&mut v);
/// let max = minmax_heap_max_index(&v).unwrap();
/// assert_eq!(v[max], 42);
/// assert_eq!(v[0], 4);
/// ```
pub fn minmax_heap_max_index<T: Ord>(heap: &[T]) -> Option<usize> {
    max_index(heap, &mut T::lt)
}

/// Like [`minmax_heap_max_index`], ordering elements with `less`
pub fn minmax_heap_max_index_by<T, F>(heap: &[T], mut less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    max_index(heap, &mut less)
}

fn first_violation<T, F>(heap: &[T], less: &mut F) -> Option<(usize, usize)>
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..heap.len() {
        let p = parent(i, 2);
        let min_level = is_min_level(i);
        let parent_ok = if min_level {
            !less(&heap[p], &heap[i])
        } else {
            !less(&heap[i], &heap[p])
        };
        if !parent_ok {
            return Some((i, p));
        }
        if i >= 3 {
            let g = grandparent(i);
            let grandparent_ok = if min_level {
                !less(&heap[i], &heap[g])
            } else {
                !less(&heap[g], &heap[i])
            };
            if !grandparent_ok {
                return Some((i, g));
            }
        }
    }
    None
}

/// Checks the min-max invariant, reporting the first element out of order
///
/// Every element is compared with its parent and its grandparent, which by
/// transitivity covers all of its ancestors.
///
/// # Errors
/// Returns [`HeapError::InvariantViolated`] naming the first offending position and
/// the ancestor it conflicts with.
pub fn check_minmax_heap_by<T, F>(heap: &[T], mut less: F) -> Result<(), HeapError>
where
    F: FnMut(&T, &T) -> bool,
{
    match first_violation(heap, &mut less) {
        Some((index, ancestor)) => Err(HeapError::InvariantViolated { index, ancestor }),
        None => Ok(()),
    }
}

/// Returns the length of the longest prefix of `heap` that is a min-max heap
pub fn is_minmax_heap_until<T: Ord>(heap: &[T]) -> usize {
    is_minmax_heap_until_by(heap, T::lt)
}

/// Like [`is_minmax_heap_until`], ordering elements with `less`
pub fn is_minmax_heap_until_by<T, F>(heap: &[T], mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    first_violation(heap, &mut less).map_or(heap.len(), |(index, _)| index)
}

/// Returns whether `heap` is a min-max heap
pub fn is_minmax_heap<T: Ord>(heap: &[T]) -> bool {
    first_violation(heap, &mut T::lt).is_none()
}

/// Like [`is_minmax_heap`], ordering elements with `less`
pub fn is_minmax_heap_by<T, F>(heap: &[T], mut less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    first_violation(heap, &mut less).is_none()
}
