//! Type-erased search over raw memory.
//!
//! This is the `bsearch(3)` shape: a base pointer, an element count, an
//! element size in bytes and a C comparator. Nothing here knows the element
//! type, so every candidate is addressed by byte offset:
//!
//! ```text
//!   base                 base + mid * elem_size
//!    │                     │
//!    ▼                     ▼
//!   ┌─────────┬─────────┬─────────┬─────────┬─────────┐
//!   │ elem 0  │ elem 1  │ elem 2  │ elem 3  │ elem 4  │
//!   └─────────┴─────────┴─────────┴─────────┴─────────┘
//!   │◄───────►│
//!    elem_size
//! ```
//!
//! Arguments that are wrong on their face (zero size, impossible counts, a
//! null base) are rejected with [`Error::InvalidArgument`]. A size that does
//! not match the real stride of the data cannot be detected; the search then
//! compares misaligned bytes and its answer is meaningless.

use std::ptr::NonNull;

use libc::c_void;

use crate::{
  cmp::{RawComparator, verdict},
  error::{Error, Result},
  search::halving_search,
};

/// Address of element `index`: `base + index * elem_size`, counted in bytes.
///
/// # Safety
///
/// `index * elem_size` must not overflow `isize` and the result must stay
/// within the allocation `base` points into (or one byte past its end).
pub unsafe fn element_at(
  base: *const c_void,
  index: usize,
  elem_size: usize,
) -> *const c_void {
  unsafe { (base as *const u8).add(index * elem_size) as *const c_void }
}

/// Searches `num_elems` elements of `elem_size` bytes starting at `base`,
/// sorted ascending under `cmp`, for one equal to `key`.
///
/// Returns a pointer to the matching element, `Ok(None)` when the key is
/// absent. A C caller passing a negative count through `size_t` arrives here
/// with `num_elems > isize::MAX` and is rejected.
///
/// # Safety
///
/// `base` must be valid for reading `num_elems * elem_size` bytes for the
/// duration of the call, and must not be written to concurrently. `cmp` must
/// be safe to call with `key` and with any element pointer in that span.
pub unsafe fn bsearch_raw(
  key: *const c_void,
  base: *const c_void,
  num_elems: usize,
  elem_size: usize,
  cmp: RawComparator,
) -> Result<Option<NonNull<c_void>>> {
  check_span(base, num_elems, elem_size)?;

  let found = halving_search(num_elems, |mid| {
    let candidate = unsafe { element_at(base, mid, elem_size) };
    verdict(unsafe { cmp(key, candidate) })
  });

  Ok(found.and_then(|mid| NonNull::new(unsafe { element_at(base, mid, elem_size) } as *mut c_void)))
}

fn check_span(
  base: *const c_void,
  num_elems: usize,
  elem_size: usize,
) -> Result<()> {
  if elem_size == 0 {
    return Err(Error::invalid("element size must be positive"));
  }
  if num_elems > isize::MAX as usize {
    return Err(Error::invalid(format!("element count {num_elems} is out of range")));
  }
  match num_elems.checked_mul(elem_size) {
    Some(span) if span <= isize::MAX as usize => {}
    _ => {
      return Err(Error::invalid(format!(
        "{num_elems} elements of {elem_size} bytes overflow the address space"
      )));
    }
  }
  if base.is_null() && num_elems > 0 {
    return Err(Error::invalid("null base pointer"));
  }
  Ok(())
}
