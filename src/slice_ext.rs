//! Method-call syntax for the heap algorithms
//!
//! Provides extension traits on `[T]` so that heap operations read like the
//! slice methods of the standard library (`v.sort()`, `v.reverse()`). Because
//! `Vec<T>` dereferences to `[T]`, they are available on vectors as well.
//!
//! # Example
//!
//! ```rust
//! use minmax_dary_heap::slice_ext::{DaryHeapExt, MinMaxHeapExt};
//!
//! let mut v = vec![5, 3, 7];
//! v.make_minmax_heap();
//! v.push(1);
//! v.push_minmax_heap();
//! v.pop_minmax_heap_max();
//! assert_eq!(v.pop(), Some(7));
//!
//! let mut w = vec![2, 9, 4];
//! w.make_dary_heap::<4>();
//! w.pop_dary_heap::<4>();
//! assert_eq!(w.pop(), Some(9));
//! ```

use crate::{dary, minmax};

/// Min-max heap operations on a slice
///
/// See [`crate::minmax`] for the meaning of each operation.
pub trait MinMaxHeapExt<T> {
    /// Inserts the last element into the min-max heap formed by the rest
    fn push_minmax_heap(&mut self)
    where
        T: Ord;

    /// Like [`push_minmax_heap`](Self::push_minmax_heap), ordering elements with `less`
    fn push_minmax_heap_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Rearranges the slice into a min-max heap
    fn make_minmax_heap(&mut self)
    where
        T: Ord;

    /// Like [`make_minmax_heap`](Self::make_minmax_heap), ordering elements with `less`
    fn make_minmax_heap_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Moves the minimum to the last position
    fn pop_minmax_heap_min(&mut self)
    where
        T: Ord;

    /// Like [`pop_minmax_heap_min`](Self::pop_minmax_heap_min), ordering elements with `less`
    fn pop_minmax_heap_min_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Moves the maximum to the last position
    fn pop_minmax_heap_max(&mut self)
    where
        T: Ord;

    /// Like [`pop_minmax_heap_max`](Self::pop_minmax_heap_max), ordering elements with `less`
    fn pop_minmax_heap_max_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Returns whether the slice is a min-max heap
    fn is_minmax_heap(&self) -> bool
    where
        T: Ord;
}

impl<T> MinMaxHeapExt<T> for [T] {
    fn push_minmax_heap(&mut self)
    where
        T: Ord,
    {
        minmax::push_minmax_heap(self);
    }

    fn push_minmax_heap_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        minmax::push_minmax_heap_by(self, less);
    }

    fn make_minmax_heap(&mut self)
    where
        T: Ord,
    {
        minmax::make_minmax_heap(self);
    }

    fn make_minmax_heap_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        minmax::make_minmax_heap_by(self, less);
    }

    fn pop_minmax_heap_min(&mut self)
    where
        T: Ord,
    {
        minmax::pop_minmax_heap_min(self);
    }

    fn pop_minmax_heap_min_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        minmax::pop_minmax_heap_min_by(self, less);
    }

    fn pop_minmax_heap_max(&mut self)
    where
        T: Ord,
    {
        minmax::pop_minmax_heap_max(self);
    }

    fn pop_minmax_heap_max_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        minmax::pop_minmax_heap_max_by(self, less);
    }

    fn is_minmax_heap(&self) -> bool
    where
        T: Ord,
    {
        minmax::is_minmax_heap(self)
    }
}

/// D-ary heap operations on a slice, with the arity as a const parameter
///
/// See [`crate::dary`] for the meaning of each operation.
pub trait DaryHeapExt<T> {
    /// Inserts the last element into the `D`-ary heap formed by the rest
    fn push_dary_heap<const D: usize>(&mut self)
    where
        T: Ord;

    /// Like [`push_dary_heap`](Self::push_dary_heap), ordering elements with `less`
    fn push_dary_heap_by<const D: usize, F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Rearranges the slice into a `D`-ary heap
    fn make_dary_heap<const D: usize>(&mut self)
    where
        T: Ord;

    /// Like [`make_dary_heap`](Self::make_dary_heap), ordering elements with `less`
    fn make_dary_heap_by<const D: usize, F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Moves the greatest element to the last position
    fn pop_dary_heap<const D: usize>(&mut self)
    where
        T: Ord;

    /// Like [`pop_dary_heap`](Self::pop_dary_heap), ordering elements with `less`
    fn pop_dary_heap_by<const D: usize, F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Sorts a `D`-ary heap in ascending order
    fn sort_dary_heap<const D: usize>(&mut self)
    where
        T: Ord;

    /// Returns whether the slice is a `D`-ary heap
    fn is_dary_heap<const D: usize>(&self) -> bool
    where
        T: Ord;
}

impl<T> DaryHeapExt<T> for [T] {
    fn push_dary_heap<const D: usize>(&mut self)
    where
        T: Ord,
    {
        dary::push_dary_heap::<D, T>(self);
    }

    fn push_dary_heap_by<const D: usize, F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        dary::push_dary_heap_by::<D, T, F>(self, less);
    }

    fn make_dary_heap<const D: usize>(&mut self)
    where
        T: Ord,
    {
        dary::make_dary_heap::<D, T>(self);
    }

    fn make_dary_heap_by<const D: usize, F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        dary::make_dary_heap_by::<D, T, F>(self, less);
    }

    fn pop_dary_heap<const D: usize>(&mut self)
    where
        T: Ord,
    {
        dary::pop_dary_heap::<D, T>(self);
    }

    fn pop_dary_heap_by<const D: usize, F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        dary::pop_dary_heap_by::<D, T, F>(self, less);
    }

    fn sort_dary_heap<const D: usize>(&mut self)
    where
        T: Ord,
    {
        dary::sort_dary_heap::<D, T>(self);
    }

    fn is_dary_heap<const D: usize>(&self) -> bool
    where
        T: Ord,
    {
        dary::is_dary_heap::<D, T>(self)
    }
}
