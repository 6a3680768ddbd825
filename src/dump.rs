//! Byte dumps.
//!
//! Draws the bytes of a value as a row of cells, highest address on the
//! left, so a little-endian integer reads most significant byte first:
//!
//! ```text
//!   1u64 << 31 on x86_64
//!
//!   +--------+--------+--------+--------+--------+--------+--------+--------+
//!   |       0|       0|       0|       0|     128|       0|       0|       0|
//!   +--------+--------+--------+--------+--------+--------+--------+--------+
//! ```

use std::{
  fmt::{Display, Write},
  mem, slice,
};

/// The in-memory bytes of `value`, lowest address first.
///
/// # Safety
///
/// Every byte of `T` must be initialized: no padding, and for unions the
/// whole union must have been written at least once.
pub unsafe fn object_bytes<T>(value: &T) -> &[u8] {
  unsafe { slice::from_raw_parts(value as *const T as *const u8, mem::size_of::<T>()) }
}

/// Border line for `num_bytes` cells. Empty for zero bytes.
pub fn border(num_bytes: usize) -> String {
  if num_bytes == 0 {
    return String::new();
  }
  format!("+{}\n", "--------+".repeat(num_bytes))
}

/// Renders `bytes` (given in memory order) as a boxed row of decimal cells,
/// highest address first.
pub fn render(bytes: &[u8]) -> String {
  if bytes.is_empty() {
    return String::new();
  }

  let line = border(bytes.len());
  let mut out = line.clone();

  out.push('|');
  for byte in bytes.iter().rev() {
    write!(out, "{byte:>8}|").ok();
  }
  out.push('\n');
  out.push_str(&line);
  out
}

/// [`render`] over a value's own bytes.
///
/// # Safety
///
/// Same contract as [`object_bytes`].
pub unsafe fn render_value<T>(value: &T) -> String {
  render(unsafe { object_bytes(value) })
}

/// `[a, b, c]`
pub fn format_array<T: Display>(values: &[T]) -> String {
  let items: Vec<String> = values.iter().map(ToString::to_string).collect();
  format!("[{}]", items.join(", "))
}
