//! Three-way comparators.
//!
//! A comparator answers one question: where does the *key* sort relative to a
//! *candidate* element?
//!
//! ```text
//!   Greater  ->  key follows candidate   (search continues to the right)
//!   Less     ->  key precedes candidate  (search continues to the left)
//!   Equal    ->  match
//! ```
//!
//! The searched sequence must already be sorted ascending under the same
//! comparator, and the comparator must be pure: the engine may call it
//! several times with the same arguments and relies on getting the same
//! verdict back.

use std::cmp::Ordering;

use libc::{c_int, c_void};

/// A three-way ordering between a key of type `K` and an element of type `T`.
///
/// Any `FnMut(&K, &T) -> Ordering` closure is a comparator, so most callers
/// never name this trait.
pub trait Comparator<K: ?Sized, T: ?Sized> {
  fn compare(
    &mut self,
    key: &K,
    candidate: &T,
  ) -> Ordering;
}

impl<K, T, F> Comparator<K, T> for F
where
  K: ?Sized,
  T: ?Sized,
  F: FnMut(&K, &T) -> Ordering,
{
  fn compare(
    &mut self,
    key: &K,
    candidate: &T,
  ) -> Ordering {
    self(key, candidate)
  }
}

/// The element type's own [`Ord`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T, T> for Natural {
  fn compare(
    &mut self,
    key: &T,
    candidate: &T,
  ) -> Ordering {
    key.cmp(candidate)
  }
}

/// Integer comparator.
pub fn int_cmp(
  a: &i32,
  b: &i32,
) -> Ordering {
  if a > b {
    return Ordering::Greater;
  }
  if a < b {
    return Ordering::Less;
  }
  Ordering::Equal
}

/// The C comparator signature shared by `bsearch(3)` and `qsort(3)`.
///
/// Negative, zero and positive results mean less, equal and greater.
pub type RawComparator = unsafe extern "C" fn(*const c_void, *const c_void) -> c_int;

/// [`int_cmp`] over untyped pointers: `1`, `-1` or `0`.
///
/// # Safety
///
/// Both pointers must be valid for reading an aligned `i32`.
pub unsafe extern "C" fn int_cmp_raw(
  a: *const c_void,
  b: *const c_void,
) -> c_int {
  let (a, b) = unsafe { (*(a as *const i32), *(b as *const i32)) };
  if a > b {
    return 1;
  }
  if a < b {
    return -1;
  }
  0
}

/// Collapses a raw comparator result to its sign.
pub fn verdict(raw: c_int) -> Ordering {
  raw.cmp(&0)
}
