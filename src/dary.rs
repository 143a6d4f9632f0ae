//! D-ary heap algorithms
//!
//! A d-ary max-heap stores a tree in which every node has up to `D` children and
//! no child is greater than its parent. `D = 2` is the classic binary heap; larger
//! arities make the tree shallower (fewer levels for `push`) at the price of more
//! comparisons per level when sifting down, and keep siblings within fewer cache
//! lines.
//!
//! The arity is a type parameter implementing [`Arity`]:
//!
//! - [`Const<D>`](crate::traits::Const): fixed at compile time. The free functions
//!   of this module (`push_dary_heap::<D, _>` and friends) use it, and for `D = 2`
//!   and `D = 4` the child scan is unrolled into branch-free selects.
//! - [`RuntimeArity`]: chosen at runtime through [`DaryHeap::with_arity`].
//!
//! # Time Complexity
//!
//! | Operation | Complexity       |
//! |-----------|------------------|
//! | `push`    | O(log_D n)       |
//! | `make`    | O(n)             |
//! | `pop`     | O(D · log_D n)   |
//! | `sort`    | O(D · n log_D n) |
//!
//! # Example
//!
//! ```rust
//! use minmax_dary_heap::dary::{make_dary_heap, pop_dary_heap, push_dary_heap};
//!
//! let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! make_dary_heap::<4, _>(&mut v);
//! v.push(8);
//! push_dary_heap::<4, _>(&mut v);
//!
//! let mut out = Vec::new();
//! while !v.is_empty() {
//!     pop_dary_heap::<4, _>(&mut v);
//!     out.extend(v.pop());
//! }
//! assert_eq!(out, [9, 8, 6, 5, 4, 3, 2, 1, 1]);
//! ```

use crate::index::{first_child, last_child, last_parent, parent};
use crate::traits::{Arity, Const, HeapError, RuntimeArity};

#[inline]
fn sift_up<A: Arity, T, F>(heap: &mut [T], mut i: usize, arity: A, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let d = arity.get();
    while i > 0 {
        let p = parent(i, d);
        if less(&heap[p], &heap[i]) {
            heap.swap(i, p);
            i = p;
        } else {
            break;
        }
    }
}

/// Position of the greatest child, the earliest one among equals
#[inline(always)]
fn largest_child<A: Arity, T, F>(heap: &[T], first: usize, arity: A, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let d = arity.get();
    let len = heap.len();
    if len - first >= d {
        match d {
            2 => return first + less(&heap[first], &heap[first + 1]) as usize,
            4 => {
                let a = first + less(&heap[first], &heap[first + 1]) as usize;
                let b = first + 2 + less(&heap[first + 2], &heap[first + 3]) as usize;
                return a + (b - a) * less(&heap[a], &heap[b]) as usize;
            }
            _ => {}
        }
    }

    let mut best = first;
    for c in first + 1..=last_child(first, d, len) {
        if less(&heap[best], &heap[c]) {
            best = c;
        }
    }
    best
}

#[inline]
fn sift_down<A: Arity, T, F>(heap: &mut [T], mut i: usize, arity: A, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let d = arity.get();
    let Some(limit) = last_parent(heap.len(), d) else {
        return;
    };
    while i <= limit {
        let best = largest_child(heap, first_child(i, d), arity, less);
        if less(&heap[i], &heap[best]) {
            heap.swap(i, best);
            i = best;
        } else {
            break;
        }
    }
}

fn first_violation<A: Arity, T, F>(heap: &[T], arity: A, less: &mut F) -> Option<(usize, usize)>
where
    F: FnMut(&T, &T) -> bool,
{
    let d = arity.get();
    (1..heap.len())
        .map(|i| (i, parent(i, d)))
        .find(|&(i, p)| less(&heap[p], &heap[i]))
}

/// The d-ary heap discipline for a given [`Arity`]
///
/// This is not a container: it holds only the branching factor, and every method
/// works on a slice owned by the caller.
///
/// ```
/// use minmax_dary_heap::dary::DaryHeap;
///
/// let heap = DaryHeap::with_arity(3).unwrap();
/// let mut v = vec![2, 7, 1, 8, 2, 8];
/// heap.make(&mut v);
/// assert_eq!(v[0], 8);
/// heap.sort(&mut v);
/// assert_eq!(v, [1, 2, 2, 7, 8, 8]);
///
/// assert!(DaryHeap::with_arity(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DaryHeap<A: Arity> {
    arity: A,
}

impl<const D: usize> DaryHeap<Const<D>> {
    /// Creates the discipline for a compile-time arity
    pub const fn new() -> Self {
        Self { arity: Const::<D> }
    }
}

impl DaryHeap<RuntimeArity> {
    /// Creates the discipline for an arity chosen at runtime
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn with_arity(arity: usize) -> Result<Self, HeapError> {
        Ok(Self {
            arity: RuntimeArity::new(arity)?,
        })
    }
}

impl<A: Arity> DaryHeap<A> {
    /// Returns the number of children per node
    pub fn arity(&self) -> usize {
        self.arity.get()
    }

    /// Inserts the last element of `heap` into the heap formed by the rest
    ///
    /// `heap[..heap.len() - 1]` must already be a heap; the new element is
    /// expected to have just been appended. An empty slice is left untouched.
    pub fn push<T: Ord>(&self, heap: &mut [T]) {
        self.push_by(heap, T::lt);
    }

    /// Like [`push`](Self::push), ordering elements with `less`
    ///
    /// `less(a, b)` returns whether `a` is strictly ordered before `b` and must be a
    /// strict weak ordering. The greatest element under `less` ends up at the root.
    pub fn push_by<T, F>(&self, heap: &mut [T], mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if let Some(i) = heap.len().checked_sub(1) {
            sift_up(heap, i, self.arity, &mut less);
        }
        self.debug_check(heap, &mut less);
    }

    /// Rearranges `heap` into a heap
    pub fn make<T: Ord>(&self, heap: &mut [T]) {
        self.make_by(heap, T::lt);
    }

    /// Like [`make`](Self::make), ordering elements with `less`
    pub fn make_by<T, F>(&self, heap: &mut [T], mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if let Some(limit) = last_parent(heap.len(), self.arity.get()) {
            for i in (0..=limit).rev() {
                sift_down(heap, i, self.arity, &mut less);
            }
        }
        self.debug_check(heap, &mut less);
    }

    /// Moves the greatest element of the heap to the last position
    ///
    /// Afterwards `heap[..heap.len() - 1]` is a heap. Calling this on an empty slice
    /// is a precondition violation: it panics in debug builds and does nothing
    /// otherwise.
    pub fn pop<T: Ord>(&self, heap: &mut [T]) {
        self.pop_by(heap, T::lt);
    }

    /// Like [`pop`](Self::pop), ordering elements with `less`
    pub fn pop_by<T, F>(&self, heap: &mut [T], mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(!heap.is_empty(), "pop from an empty d-ary heap");
        let Some(last) = heap.len().checked_sub(1) else {
            return;
        };
        heap.swap(0, last);
        let rest = &mut heap[..last];
        sift_down(rest, 0, self.arity, &mut less);
        self.debug_check(rest, &mut less);
    }

    /// Sorts a heap in ascending order by popping every element in turn
    pub fn sort<T: Ord>(&self, heap: &mut [T]) {
        self.sort_by(heap, T::lt);
    }

    /// Like [`sort`](Self::sort), ordering elements with `less`
    pub fn sort_by<T, F>(&self, heap: &mut [T], mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        for end in (2..=heap.len()).rev() {
            heap.swap(0, end - 1);
            sift_down(&mut heap[..end - 1], 0, self.arity, &mut less);
        }
    }

    /// Checks the heap invariant, reporting the first element greater than its parent
    ///
    /// # Errors
    /// Returns [`HeapError::InvariantViolated`] with the offending position and its
    /// parent.
    pub fn check_by<T, F>(&self, heap: &[T], mut less: F) -> Result<(), HeapError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        match first_violation(heap, self.arity, &mut less) {
            Some((index, ancestor)) => Err(HeapError::InvariantViolated { index, ancestor }),
            None => Ok(()),
        }
    }

    /// Returns whether `heap` is a heap
    pub fn is_heap<T: Ord>(&self, heap: &[T]) -> bool {
        self.is_heap_by(heap, T::lt)
    }

    /// Like [`is_heap`](Self::is_heap), ordering elements with `less`
    pub fn is_heap_by<T, F>(&self, heap: &[T], mut less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        first_violation(heap, self.arity, &mut less).is_none()
    }

    /// Returns the length of the longest prefix of `heap` that is a heap
    pub fn is_heap_until<T: Ord>(&self, heap: &[T]) -> usize {
        self.is_heap_until_by(heap, T::lt)
    }

    /// Like [`is_heap_until`](Self::is_heap_until), ordering elements with `less`
    pub fn is_heap_until_by<T, F>(&self, heap: &[T], mut less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        first_violation(heap, self.arity, &mut less).map_or(heap.len(), |(index, _)| index)
    }

    #[cfg(feature = "check-invariants")]
    #[inline]
    fn debug_check<T, F>(&self, heap: &[T], less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert_eq!(self.check_by(heap, less), Ok(()));
    }

    #[cfg(not(feature = "check-invariants"))]
    #[inline(always)]
    fn debug_check<T, F>(&self, _heap: &[T], _less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
    }
}

/// Inserts the last element of `heap` into the `D`-ary heap formed by the rest
pub fn push_dary_heap<const D: usize, T: Ord>(heap: &mut [T]) {
    DaryHeap::<Const<D>>::new().push(heap);
}

/// Like [`push_dary_heap`], ordering elements with `less`
pub fn push_dary_heap_by<const D: usize, T, F>(heap: &mut [T], less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    DaryHeap::<Const<D>>::new().push_by(heap, less);
}

/// Rearranges `heap` into a `D`-ary heap
pub fn make_dary_heap<const D: usize, T: Ord>(heap: &mut [T]) {
    DaryHeap::<Const<D>>::new().make(heap);
}

/// Like [`make_dary_heap`], ordering elements with `less`
pub fn make_dary_heap_by<const D: usize, T, F>(heap: &mut [T], less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    DaryHeap::<Const<D>>::new().make_by(heap, less);
}

/// Moves the greatest element of the `D`-ary heap to the last position
pub fn pop_dary_heap<const D: usize, T: Ord>(heap: &mut [T]) {
    DaryHeap::<Const<D>>::new().pop(heap);
}

/// Like [`pop_dary_heap`], ordering elements with `less`
pub fn pop_dary_heap_by<const D: usize, T, F>(heap: &mut [T], less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    DaryHeap::<Const<D>>::new().pop_by(heap, less);
}

/// Sorts a `D`-ary heap in ascending order
pub fn sort_dary_heap<const D: usize, T: Ord>(heap: &mut [T]) {
    DaryHeap::<Const<D>>::new().sort(heap);
}

/// Like [`sort_dary_heap`], ordering elements with `less`
pub fn sort_dary_heap_by<const D: usize, T, F>(heap: &mut [T], less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    DaryHeap::<Const<D>>::new().sort_by(heap, less);
}

/// Checks the `D`-ary heap invariant, reporting the first element out of order
///
/// # Errors
/// Returns [`HeapError::InvariantViolated`] with the offending position and its parent.
pub fn check_dary_heap_by<const D: usize, T, F>(heap: &[T], less: F) -> Result<(), HeapError>
where
    F: FnMut(&T, &T) -> bool,
{
    DaryHeap::<Const<D>>::new().check_by(heap, less)
}

/// Returns whether `heap` is a `D`-ary heap
pub fn is_dary_heap<const D: usize, T: Ord>(heap: &[T]) -> bool {
    DaryHeap::<Const<D>>::new().is_heap(heap)
}

/// Like [`is_dary_heap`], ordering elements with `less`
pub fn is_dary_heap_by<const D: usize, T, F>(heap: &[T], less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    DaryHeap::<Const<D>>::new().is_heap_by(heap, less)
}

/// Returns the length of the longest prefix of `heap` that is a `D`-ary heap
pub fn is_dary_heap_until<const D: usize, T: Ord>(heap: &[T]) -> usize {
    DaryHeap::<Const<D>>::new().is_heap_until(heap)
}

/// Like [`is_dary_heap_until`], ordering elements with `less`
pub fn is_dary_heap_until_by<const D: usize, T, F>(heap: &[T], less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    DaryHeap::<Const<D>>::new().is_heap_until_by(heap, less)
}
