//! Common traits and types shared by the heap disciplines
//!
//! This module provides:
//!
//! - [`Arity`]: the branching factor of a d-ary heap, either fixed at compile
//!   time ([`Const`]) or chosen at runtime ([`RuntimeArity`])
//! - [`HeapError`]: the error type returned by the fallible, non-hot-path
//!   entry points (runtime arity validation and invariant checking)
//!
//! The heap operations themselves never return errors. Their preconditions
//! (non-empty slice for `pop`, a valid heap before `push`, a comparator that is
//! a strict weak ordering) are the caller's responsibility.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A runtime branching factor below 2 was requested
    InvalidArity {
        /// The rejected branching factor
        arity: usize,
    },
    /// The element at `index` is ordered wrongly relative to `ancestor`
    InvariantViolated {
        /// Position of the first element found out of order
        index: usize,
        /// The parent or grandparent it conflicts with
        ancestor: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArity { arity } => {
                write!(f, "heap arity must be at least 2, got {}", arity)
            }
            HeapError::InvariantViolated { index, ancestor } => {
                write!(
                    f,
                    "heap invariant violated: element {} is out of order with ancestor {}",
                    index, ancestor
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Branching factor of a d-ary heap
///
/// Implemented by [`Const<D>`], where the value is known to the compiler and the
/// child scan can be unrolled, and by [`RuntimeArity`] for dynamic configuration.
pub trait Arity: Copy {
    /// Returns the number of children per node (always at least 2)
    fn get(self) -> usize;
}

/// A branching factor fixed at compile time
///
/// Using `Const<D>` with `D < 2` fails to compile as soon as the arity is used.
///
/// ```compile_fail
/// use minmax_dary_heap::dary::make_dary_heap;
///
/// let mut v = vec![3, 1, 2];
/// make_dary_heap::<1, _>(&mut v);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const D: usize>;

impl<const D: usize> Const<D> {
    const VALID: () = assert!(D >= 2, "heap arity must be at least 2");
}

impl<const D: usize> Arity for Const<D> {
    #[inline(always)]
    fn get(self) -> usize {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        D
    }
}

/// A branching factor chosen at runtime
///
/// Loses the unrolled child scan of [`Const`] for arities other than 2 and 4,
/// in exchange for being configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuntimeArity(usize);

impl RuntimeArity {
    /// Validates `arity`, which must be at least 2
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn new(arity: usize) -> Result<Self, HeapError> {
        if arity < 2 {
            return Err(HeapError::InvalidArity { arity });
        }
        Ok(Self(arity))
    }
}

impl Arity for RuntimeArity {
    #[inline(always)]
    fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for RuntimeArity {
    type Error = HeapError;

    fn try_from(arity: usize) -> Result<Self, Self::Error> {
        Self::new(arity)
    }
}
