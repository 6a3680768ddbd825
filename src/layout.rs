//! C struct layout.
//!
//! Computes where a `#[repr(C)]` struct puts its fields, following the C
//! padding rules:
//!
//! 1. There is no padding at the beginning of a struct.
//! 2. Every field starts at a multiple of its own alignment.
//! 3. All bytes of a field are stored contiguously.
//! 4. The total size is a multiple of the largest field alignment.
//!
//! The result can be drawn as a row diagram, one row per alignment unit,
//! with `-` marking padding bytes:
//!
//! ```text
//!   +---+---+---+---+
//!  0| i             |
//!   +---+---+---+---+
//!  4| c | - | - | - |
//!   +---+---+---+---+
//!   Total: 8 bytes
//! ```
//!
//! Alignments of primitive types are platform dependent. Feeding the
//! calculator `Field::of::<T>()` keeps it in agreement with the compiler on
//! whatever target it runs.

use std::{fmt::Write, mem};

use crate::{
  align::align_up,
  error::{Error, Result},
};

/// One contiguous run of bytes inside a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
  Field {
    name: String,
    offset: usize,
    size: usize,
  },
  Padding {
    offset: usize,
    size: usize,
  },
}

impl Span {
  pub fn offset(&self) -> usize {
    match self {
      Span::Field { offset, .. } | Span::Padding { offset, .. } => *offset,
    }
  }

  pub fn size(&self) -> usize {
    match self {
      Span::Field { size, .. } | Span::Padding { size, .. } => *size,
    }
  }

  fn shifted(
    &self,
    by: usize,
  ) -> Span {
    match self {
      Span::Field { name, offset, size } => Span::Field {
        name: name.clone(),
        offset: offset + by,
        size: *size,
      },
      Span::Padding { offset, size } => Span::Padding {
        offset: offset + by,
        size: *size,
      },
    }
  }
}

/// A struct member: a scalar, an array of scalars, or a nested struct.
#[derive(Debug, Clone)]
pub struct Field {
  name: String,
  elem_size: usize,
  count: usize,
  align: usize,
  nested: Vec<Span>,
}

impl Field {
  pub fn new(
    name: impl Into<String>,
    size: usize,
    align: usize,
  ) -> Self {
    Self {
      name: name.into(),
      elem_size: size,
      count: 1,
      align,
      nested: Vec::new(),
    }
  }

  pub fn of<T>(name: impl Into<String>) -> Self {
    Self::new(name, mem::size_of::<T>(), mem::align_of::<T>())
  }

  pub fn array<T>(
    name: impl Into<String>,
    count: usize,
  ) -> Self {
    Self {
      count,
      ..Self::of::<T>(name)
    }
  }

  /// Embeds another struct by value. Its fields keep their own names in the
  /// diagram.
  pub fn nested(
    name: impl Into<String>,
    layout: &StructLayout,
  ) -> Self {
    Self {
      nested: layout.spans.clone(),
      ..Self::new(name, layout.size, layout.align)
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn size(&self) -> usize {
    self.elem_size * self.count
  }

  pub fn align(&self) -> usize {
    self.align
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
  offsets: Vec<(String, usize)>,
  spans: Vec<Span>,
  size: usize,
  align: usize,
}

impl StructLayout {
  pub fn c_repr(fields: &[Field]) -> Result<Self> {
    if fields.is_empty() {
      return Err(Error::invalid("a C struct needs at least one field"));
    }

    let mut offsets = Vec::with_capacity(fields.len());
    let mut spans = Vec::new();
    let mut offset = 0usize;
    let mut align = 1usize;

    for field in fields {
      let start = align_up(offset, field.align).ok_or_else(|| {
        Error::invalid(format!("field `{}` has invalid alignment {}", field.name, field.align))
      })?;
      if start > offset {
        spans.push(Span::Padding {
          offset,
          size: start - offset,
        });
      }

      if field.nested.is_empty() {
        for i in 0..field.count {
          spans.push(Span::Field {
            name: field.name.clone(),
            offset: start + i * field.elem_size,
            size: field.elem_size,
          });
        }
      } else {
        spans.extend(field.nested.iter().map(|span| span.shifted(start)));
      }

      offsets.push((field.name.clone(), start));
      offset = field
        .elem_size
        .checked_mul(field.count)
        .and_then(|size| start.checked_add(size))
        .ok_or_else(|| Error::invalid(format!("field `{}` overflows the struct", field.name)))?;
      align = align.max(field.align);
    }

    let size = align_up(offset, align)
      .ok_or_else(|| Error::invalid("struct size overflows usize"))?;
    if size > offset {
      spans.push(Span::Padding {
        offset,
        size: size - offset,
      });
    }

    Ok(Self {
      offsets,
      spans,
      size,
      align,
    })
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn align(&self) -> usize {
    self.align
  }

  pub fn spans(&self) -> &[Span] {
    &self.spans
  }

  /// Top-level fields with their byte offsets, in declaration order.
  pub fn offsets(&self) -> &[(String, usize)] {
    &self.offsets
  }

  pub fn offset_of(
    &self,
    name: &str,
  ) -> Option<usize> {
    self
      .offsets
      .iter()
      .find(|(field, _)| field == name)
      .map(|(_, offset)| *offset)
  }

  /// Total padding bytes, including padding inside nested structs.
  pub fn padding(&self) -> usize {
    self
      .spans
      .iter()
      .filter(|span| matches!(span, Span::Padding { .. }))
      .map(Span::size)
      .sum()
  }

  /// Bytes per diagram row.
  pub fn row_width(&self) -> usize {
    self.align.clamp(4, 8)
  }

  pub fn render(&self) -> String {
    let width = self.row_width();
    let rows = self.size.div_ceil(width);
    let margin = rows
      .saturating_sub(1)
      .saturating_mul(width)
      .to_string()
      .len()
      .max(2);

    let border = format!("{:margin$}+{}\n", "", "---+".repeat(width));
    let mut out = border.clone();

    for row in 0..rows {
      let row_start = row * width;
      let row_end = (row_start + width).min(self.size);
      write!(out, "{row_start:>margin$}|").ok();

      for span in &self.spans {
        let start = span.offset().max(row_start);
        let end = (span.offset() + span.size()).min(row_end);
        if start >= end {
          continue;
        }

        match span {
          Span::Field { name, .. } => {
            let cell = 4 * (end - start) - 1;
            let label = format!(" {name}");
            write!(out, "{label:<cell$.cell$}|").ok();
          }
          Span::Padding { .. } => {
            out.push_str(&" - |".repeat(end - start));
          }
        }
      }

      out.push('\n');
      out.push_str(&border);
    }

    writeln!(out, "{:margin$}Total: {} bytes", "", self.size).ok();
    out
  }
}

#[cfg(test)]
mod tests {
  use std::mem::{align_of, offset_of, size_of};

  use super::*;

  #[repr(C)]
  struct Person1 {
    first: *const u8,
    age: i32,
    last: *const u8,
    id: i16,
  }

  #[repr(C)]
  struct Person2 {
    first: *const u8,
    last: *const u8,
    age: i32,
    id: i16,
  }

  #[repr(C)]
  struct Obj1 {
    i: i32,
    c: u8,
  }

  #[repr(C)]
  struct Obj2 {
    c: u8,
    s: i16,
    c1: u8,
    l: i64,
  }

  #[repr(C)]
  struct Obj3 {
    c1: u8,
    o: Obj1,
    c2: u8,
    r#in: i32,
  }

  #[repr(C)]
  struct Obj4 {
    c: [u8; 9],
    a: i32,
    c1: u8,
    i: i32,
    s: i16,
  }

  #[repr(C)]
  struct Obj5 {
    c2: u8,
    lo: i64,
    m: i32,
    o: Obj4,
    n: i32,
  }

  fn person1() -> StructLayout {
    StructLayout::c_repr(&[
      Field::of::<*const u8>("first"),
      Field::of::<i32>("age"),
      Field::of::<*const u8>("last"),
      Field::of::<i16>("id"),
    ])
    .unwrap()
  }

  fn person2() -> StructLayout {
    StructLayout::c_repr(&[
      Field::of::<*const u8>("first"),
      Field::of::<*const u8>("last"),
      Field::of::<i32>("age"),
      Field::of::<i16>("id"),
    ])
    .unwrap()
  }

  fn obj1() -> StructLayout {
    StructLayout::c_repr(&[Field::of::<i32>("i"), Field::of::<u8>("c")]).unwrap()
  }

  fn obj2() -> StructLayout {
    StructLayout::c_repr(&[
      Field::of::<u8>("c"),
      Field::of::<i16>("s"),
      Field::of::<u8>("c1"),
      Field::of::<i64>("l"),
    ])
    .unwrap()
  }

  fn obj3() -> StructLayout {
    StructLayout::c_repr(&[
      Field::of::<u8>("c1"),
      Field::nested("o", &obj1()),
      Field::of::<u8>("c2"),
      Field::of::<i32>("in"),
    ])
    .unwrap()
  }

  fn obj4() -> StructLayout {
    StructLayout::c_repr(&[
      Field::array::<u8>("c", 9),
      Field::of::<i32>("a"),
      Field::of::<u8>("c1"),
      Field::of::<i32>("i"),
      Field::of::<i16>("s"),
    ])
    .unwrap()
  }

  fn obj5() -> StructLayout {
    StructLayout::c_repr(&[
      Field::of::<u8>("c2"),
      Field::of::<i64>("lo"),
      Field::of::<i32>("m"),
      Field::nested("o", &obj4()),
      Field::of::<i32>("n"),
    ])
    .unwrap()
  }

  #[test]
  fn test_matches_compiler_layout() {
    let cases = [
      (person1(), size_of::<Person1>(), align_of::<Person1>()),
      (person2(), size_of::<Person2>(), align_of::<Person2>()),
      (obj1(), size_of::<Obj1>(), align_of::<Obj1>()),
      (obj2(), size_of::<Obj2>(), align_of::<Obj2>()),
      (obj3(), size_of::<Obj3>(), align_of::<Obj3>()),
      (obj4(), size_of::<Obj4>(), align_of::<Obj4>()),
      (obj5(), size_of::<Obj5>(), align_of::<Obj5>()),
    ];

    for (layout, size, align) in cases {
      assert_eq!(layout.size(), size);
      assert_eq!(layout.align(), align);
    }
  }

  #[test]
  fn test_offsets_match_compiler() {
    let layout = person1();
    assert_eq!(layout.offset_of("first"), Some(offset_of!(Person1, first)));
    assert_eq!(layout.offset_of("age"), Some(offset_of!(Person1, age)));
    assert_eq!(layout.offset_of("last"), Some(offset_of!(Person1, last)));
    assert_eq!(layout.offset_of("id"), Some(offset_of!(Person1, id)));

    let layout = person2();
    assert_eq!(layout.offset_of("age"), Some(offset_of!(Person2, age)));
    assert_eq!(layout.offset_of("id"), Some(offset_of!(Person2, id)));

    let layout = obj3();
    assert_eq!(layout.offset_of("o"), Some(offset_of!(Obj3, o)));
    assert_eq!(layout.offset_of("c2"), Some(offset_of!(Obj3, c2)));
    assert_eq!(layout.offset_of("in"), Some(offset_of!(Obj3, r#in)));

    let layout = obj5();
    assert_eq!(layout.offset_of("lo"), Some(offset_of!(Obj5, lo)));
    assert_eq!(layout.offset_of("m"), Some(offset_of!(Obj5, m)));
    assert_eq!(layout.offset_of("o"), Some(offset_of!(Obj5, o)));
    assert_eq!(layout.offset_of("n"), Some(offset_of!(Obj5, n)));

    let inner = obj4();
    assert_eq!(inner.offset_of("a"), Some(offset_of!(Obj4, a)));
    assert_eq!(inner.offset_of("c1"), Some(offset_of!(Obj4, c1)));
    assert_eq!(inner.offset_of("i"), Some(offset_of!(Obj4, i)));
    assert_eq!(inner.offset_of("s"), Some(offset_of!(Obj4, s)));
    assert_eq!(offset_of!(Obj2, l), obj2().offset_of("l").unwrap());
  }

  // Platform specific: pointers and i64 are 8 bytes wide and 8-aligned.
  #[cfg(target_pointer_width = "64")]
  #[test]
  fn test_sizes_on_64_bit() {
    assert_eq!(person1().size(), 32);
    assert_eq!(person2().size(), 24);
    assert_eq!(obj1().size(), 8);
    assert_eq!(obj2().size(), 16);
    assert_eq!(obj3().size(), 20);
    assert_eq!(obj4().size(), 28);
    assert_eq!(obj5().size(), 56);

    assert_eq!(person1().padding(), 10);
    assert_eq!(person2().padding(), 2);
  }

  #[test]
  fn test_padding_counts_nested_struct() {
    // c1 + 3, o.c + 3, c2 + 3
    assert_eq!(obj3().padding(), 9);
    assert_eq!(obj3().size() - obj3().padding(), 11);
  }

  #[test]
  fn test_render_small_struct() {
    let expected = concat!(
      "  +---+---+---+---+\n",
      " 0| i             |\n",
      "  +---+---+---+---+\n",
      " 4| c | - | - | - |\n",
      "  +---+---+---+---+\n",
      "  Total: 8 bytes\n",
    );

    assert_eq!(obj1().render(), expected);
  }

  #[test]
  fn test_render_splits_arrays_and_nested_fields() {
    let expected = concat!(
      "  +---+---+---+---+\n",
      " 0| c | c | c | c |\n",
      "  +---+---+---+---+\n",
      " 4| c | c | c | c |\n",
      "  +---+---+---+---+\n",
      " 8| c | - | - | - |\n",
      "  +---+---+---+---+\n",
      "12| a             |\n",
      "  +---+---+---+---+\n",
      "16| c1| - | - | - |\n",
      "  +---+---+---+---+\n",
      "20| i             |\n",
      "  +---+---+---+---+\n",
      "24| s     | - | - |\n",
      "  +---+---+---+---+\n",
      "  Total: 28 bytes\n",
    );

    assert_eq!(obj4().render(), expected);

    let nested = obj3().render();
    assert!(nested.contains(" 4| i             |\n"));
    assert!(nested.contains(" 8| c | - | - | - |\n"));
  }

  #[cfg(target_pointer_width = "64")]
  #[test]
  fn test_render_word_rows() {
    let expected = concat!(
      "  +---+---+---+---+---+---+---+---+\n",
      " 0| c | - | s     | c1| - | - | - |\n",
      "  +---+---+---+---+---+---+---+---+\n",
      " 8| l                             |\n",
      "  +---+---+---+---+---+---+---+---+\n",
      "  Total: 16 bytes\n",
    );

    assert_eq!(obj2().render(), expected);
  }

  #[test]
  fn test_rejects_bad_fields() {
    assert!(StructLayout::c_repr(&[]).unwrap_err().is_invalid_argument());

    let odd = Field::new("odd", 3, 3);
    assert!(StructLayout::c_repr(&[odd]).unwrap_err().is_invalid_argument());

    let huge = Field::new("huge", usize::MAX, 1);
    let tail = Field::new("tail", 1, 1);
    assert!(StructLayout::c_repr(&[huge, tail]).unwrap_err().is_invalid_argument());
  }
}
