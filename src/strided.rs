//! Byte-granular element access.
//!
//! ```text
//!   elem_size = 6
//!
//!   byte   0           6           12          18
//!          ├───────────┼───────────┼───────────┼───────────┐
//!          │  slot 0   │  slot 1   │  slot 2   │  slot 3   │
//!          └───────────┴───────────┴───────────┴───────────┘
//!
//!   offset_of(i) = i * elem_size,  for i < len
//! ```
//!
//! The view never looks inside a slot; the comparator decides what the bytes
//! mean.

use std::cmp::Ordering;

use crate::{
  error::{Error, Result},
  search::halving_search,
};

#[derive(Debug, Clone, Copy)]
pub struct StridedBytes<'a> {
  bytes: &'a [u8],
  elem_size: usize,
}

impl<'a> StridedBytes<'a> {
  pub fn new(
    bytes: &'a [u8],
    elem_size: usize,
  ) -> Result<Self> {
    if elem_size == 0 {
      return Err(Error::invalid("element size must be positive"));
    }
    if bytes.len() % elem_size != 0 {
      return Err(Error::invalid(format!(
        "{} bytes is not a whole number of {}-byte elements",
        bytes.len(),
        elem_size
      )));
    }

    Ok(Self { bytes, elem_size })
  }

  pub fn len(&self) -> usize {
    self.bytes.len() / self.elem_size
  }

  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  pub fn elem_size(&self) -> usize {
    self.elem_size
  }

  /// Byte offset of slot `index` from the start of the buffer, `None` past
  /// the last slot.
  pub fn offset_of(
    &self,
    index: usize,
  ) -> Option<usize> {
    if index >= self.len() {
      return None;
    }
    Some(index * self.elem_size)
  }

  pub fn get(
    &self,
    index: usize,
  ) -> Option<&'a [u8]> {
    let start = self.offset_of(index)?;
    Some(&self.bytes[start..start + self.elem_size])
  }

  /// Searches the slots, sorted ascending under `cmp`, for one equal to `key`.
  pub fn search<F>(
    &self,
    key: &[u8],
    mut cmp: F,
  ) -> Option<usize>
  where
    F: FnMut(&[u8], &[u8]) -> Ordering,
  {
    let bytes = self.bytes;
    let elem_size = self.elem_size;

    halving_search(self.len(), |mid| {
      let start = mid * elem_size;
      cmp(key, &bytes[start..start + elem_size])
    })
  }
}
