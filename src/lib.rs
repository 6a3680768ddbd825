//! # rbsearch - Generic Binary Search over Contiguous Memory
//!
//! This crate provides a binary search that works over elements of **any
//! type and any size**, driven only by an element count, an element size and
//! a caller-supplied three-way comparator, plus a few tools for looking at
//! how values are laid out in memory.
//!
//! ## Overview
//!
//! Binary search halves a sorted range until the key is found or the range
//! is empty:
//!
//! ```text
//!   Searching for 18 in [1, 4, 7, 18, 90]:
//!
//!   index    0     1     2     3     4
//!          ┌─────┬─────┬─────┬─────┬─────┐
//!          │  1  │  4  │  7  │ 18  │ 90  │
//!          └─────┴─────┴─────┴─────┴─────┘
//!   step 1  low         mid         high     18 > 7   → low  = mid + 1
//!   step 2                    low   high     mid = 3, 18 == 18 → found
//!                             mid
//!
//!   mid = low + (high - low) / 2      (never overflows, unlike (low + high) / 2)
//! ```
//!
//! At most `ceil(log2(n + 1))` comparisons are made.
//!
//! ## Crate Structure
//!
//! ```text
//!   rbsearch
//!   ├── cmp      - Comparator trait, int_cmp, the C comparator signature
//!   ├── search   - Typed search over slices (bsearch, bsearch_by)
//!   ├── strided  - Safe byte-granular view: fixed-size slots over &[u8]
//!   ├── raw      - Type-erased search: base pointer, count, size, fn pointer
//!   ├── align    - Alignment macros (align!, align_to!)
//!   ├── layout   - C struct layout and padding diagrams
//!   ├── dump     - Byte-cell dumps of values
//!   └── error    - Error / Result
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rbsearch::{bsearch_index_by, int_cmp};
//!
//! let array = [1, 4, 7, 18, 90];
//!
//! assert_eq!(bsearch_index_by(&7, &array, int_cmp), Some(2));
//! assert_eq!(bsearch_index_by(&5, &array, int_cmp), None);
//! ```
//!
//! The same engine without any type information, the way C's `bsearch(3)`
//! sees memory:
//!
//! ```rust
//! use std::mem;
//! use libc::c_void;
//! use rbsearch::{bsearch_raw, int_cmp_raw};
//!
//! let array = [1i32, 4, 7, 18, 90];
//! let key = 18i32;
//!
//! let found = unsafe {
//!     bsearch_raw(
//!         &key as *const i32 as *const c_void,
//!         array.as_ptr() as *const c_void,
//!         array.len(),
//!         mem::size_of::<i32>(),
//!         int_cmp_raw,
//!     )
//! }
//! .unwrap();
//!
//! assert_eq!(found.map(|p| p.as_ptr() as *const i32), Some(&array[3] as *const i32));
//! ```
//!
//! ## Duplicates
//!
//! When several elements compare equal to the key, the search returns
//! whichever one the halving path reaches first. That is **not** guaranteed
//! to be the first or the last occurrence.
//!
//! ## Preconditions
//!
//! - The sequence must be sorted ascending under the comparator. This is not
//!   checked; unsorted input gives an unspecified (but memory safe) answer.
//! - For the raw search, `elem_size` must be the true stride of the data.
//!   Zero sizes and impossible counts are rejected with
//!   [`Error::InvalidArgument`]; a wrong but plausible size is not detectable.
//!
//! ## Concurrency
//!
//! Searches only read. Any number of threads may search the same sequence at
//! once, as long as nobody writes to it meanwhile; nothing here locks.

pub mod align;
mod cmp;
pub mod dump;
mod error;
pub mod layout;
mod raw;
mod search;
mod strided;

pub use cmp::{Comparator, Natural, RawComparator, int_cmp, int_cmp_raw, verdict};
pub use error::{Error, Result};
pub use raw::{bsearch_raw, element_at};
pub use search::{bsearch, bsearch_by, bsearch_index_by, halving_search};
pub use strided::StridedBytes;
