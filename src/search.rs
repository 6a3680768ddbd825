use std::cmp::Ordering;

use crate::cmp::{Comparator, Natural};

/// Iterative halving over the index range `[0, len)`.
///
/// `probe(mid)` must return the verdict of comparing the key against the
/// element at `mid`. Returns the first matching index the halving path lands
/// on. Among equal elements, which one is returned is unspecified.
///
/// `probe` runs at most `ceil(log2(len + 1))` times.
pub fn halving_search<P>(
  len: usize,
  mut probe: P,
) -> Option<usize>
where
  P: FnMut(usize) -> Ordering,
{
  // Slices and checked raw spans never exceed isize::MAX elements.
  let mut low: isize = 0;
  let mut high: isize = isize::try_from(len).ok()? - 1;

  while low <= high {
    // (low + high) / 2 overflows for ranges near isize::MAX.
    let mid = low + (high - low) / 2;

    tracing::trace!(low, high, mid, "probe");

    match probe(mid as usize) {
      Ordering::Equal => return Some(mid as usize),
      Ordering::Greater => low = mid + 1,
      Ordering::Less => high = mid - 1,
    }
  }

  None
}

/// Searches a slice sorted by [`Ord`] for `key`.
///
/// ```rust
/// use rbsearch::bsearch;
///
/// let values = [1, 4, 7, 18, 90];
/// assert_eq!(bsearch(&7, &values), Some(&7));
/// assert_eq!(bsearch(&19, &values), None);
/// ```
pub fn bsearch<'a, T: Ord>(
  key: &T,
  values: &'a [T],
) -> Option<&'a T> {
  bsearch_by(key, values, Natural)
}

/// Searches `values`, sorted ascending under `cmp`, for an element equal to
/// `key`.
///
/// The key does not have to share the element type: a comparator that reads
/// one field of each element lets a bare field value act as the key.
///
/// When several elements compare equal to the key, any one of them may be
/// returned. Unsorted input is not detected and gives an unspecified answer.
pub fn bsearch_by<'a, K, T, C>(
  key: &K,
  values: &'a [T],
  cmp: C,
) -> Option<&'a T>
where
  K: ?Sized,
  C: Comparator<K, T>,
{
  bsearch_index_by(key, values, cmp).map(|index| &values[index])
}

/// Like [`bsearch_by`], returning the index of the match.
pub fn bsearch_index_by<K, T, C>(
  key: &K,
  values: &[T],
  mut cmp: C,
) -> Option<usize>
where
  K: ?Sized,
  C: Comparator<K, T>,
{
  halving_search(values.len(), |mid| cmp.compare(key, &values[mid]))
}
