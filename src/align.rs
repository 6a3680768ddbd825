/// Rounds `value` up to the next multiple of `align`, which must be a power
/// of two.
///
/// # Examples
///
/// ```rust
/// use rbsearch::align_to;
///
/// assert_eq!(align_to!(5, 4), 8);
/// assert_eq!(align_to!(16, 8), 16);
/// assert_eq!(align_to!(0, 2), 0);
/// ```
#[macro_export]
macro_rules! align_to {
  ($value:expr, $align:expr) => {
    ($value + $align - 1) & !($align - 1)
  };
}

/// Rounds `value` up to the machine word size.
///
/// # Examples
///
/// ```rust
/// use rbsearch::align;
///
/// match std::mem::size_of::<usize>() {
///     8 => assert_eq!(align!(13), 16), // 64 bit machine.
///     4 => assert_eq!(align!(11), 12), // 32 bit machine.
///     _ => {},
/// };
/// ```
#[macro_export]
macro_rules! align {
  ($value:expr) => {
    $crate::align_to!($value, ::core::mem::size_of::<usize>())
  };
}

/// Checked [`align_to!`]: `None` when `align` is not a power of two or the
/// rounded value does not fit in a `usize`.
pub fn align_up(
  value: usize,
  align: usize,
) -> Option<usize> {
  if !align.is_power_of_two() {
    return None;
  }
  Some(value.checked_add(align - 1)? & !(align - 1))
}

/// Bytes of padding needed to bring `offset` up to `align`.
pub fn padding_for(
  offset: usize,
  align: usize,
) -> Option<usize> {
  Some(align_up(offset, align)? - offset)
}
