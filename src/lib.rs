//! In-place heap algorithms over caller-owned slices
//!
//! This crate provides two heap disciplines that work directly on a `&mut [T]`,
//! without allocating and without owning the storage:
//!
//! - **Min-max heap** ([`minmax`]): O(log n) removal of both the minimum and the
//!   maximum; O(n) construction
//! - **D-ary heap** ([`dary`]): a max-heap with `D` children per node, with `D`
//!   fixed at compile time or chosen at runtime; `D = 2` is the binary heap
//!
//! Each discipline follows the same protocol as the standard library's
//! `BinaryHeap` internals:
//!
//! - **push**: append the new element to the slice, then call `push_*` on the
//!   whole slice
//! - **make**: fill the slice in any order, then call `make_*`
//! - **pop**: call `pop_*`; the removed element is moved to the last position,
//!   and the heap is everything before it
//!
//! Ordering defaults to `Ord`. Every operation has a `_by` variant taking a
//! `less(a, b)` predicate that must be a strict weak ordering.
//!
//! # Example
//!
//! ```rust
//! use minmax_dary_heap::minmax::{pop_minmax_heap_max, pop_minmax_heap_min, push_minmax_heap};
//! use minmax_dary_heap::dary::{make_dary_heap, pop_dary_heap};
//!
//! let mut v = Vec::new();
//! for x in [5, 1, 9, 3, 7] {
//!     v.push(x);
//!     push_minmax_heap(&mut v);
//! }
//! pop_minmax_heap_min(&mut v);
//! assert_eq!(v.pop(), Some(1));
//! pop_minmax_heap_max(&mut v);
//! assert_eq!(v.pop(), Some(9));
//!
//! let mut w = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! make_dary_heap::<4, _>(&mut w);
//! let n = w.len();
//! pop_dary_heap::<4, _>(&mut w[..n]);
//! pop_dary_heap::<4, _>(&mut w[..n - 1]);
//! assert_eq!(&w[n - 2..], &[6, 9]);
//! ```
//!
//! # Features
//!
//! - `check-invariants`: every mutating operation re-verifies the heap with
//!   `debug_assert!` (O(n) per call, debug builds only)
//! - `perf-counters`: hardware performance counter benchmarks (Linux)

pub mod dary;
pub mod index;
pub mod minmax;
pub mod slice_ext;
pub mod traits;

// Re-export the main types for convenience
pub use dary::DaryHeap;
pub use traits::{Arity, Const, HeapError, RuntimeArity};
