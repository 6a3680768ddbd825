use std::mem;

use rbsearch::{
  dump::{format_array, render_value},
  layout::{Field, StructLayout},
};
use tracing_subscriber::{EnvFilter, fmt};

#[repr(C)]
#[derive(Clone, Copy)]
union MyUnion {
  c: i8,
  s: i16,
  i: i32,
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt().with_env_filter(filter).with_target(false).init();
}

fn samples() -> rbsearch::Result<Vec<(&'static str, StructLayout)>> {
  let person1 = StructLayout::c_repr(&[
    Field::of::<*const u8>("first"),
    Field::of::<i32>("age"),
    Field::of::<*const u8>("last"),
    Field::of::<i16>("id"),
  ])?;
  let person2 = StructLayout::c_repr(&[
    Field::of::<*const u8>("first"),
    Field::of::<*const u8>("last"),
    Field::of::<i32>("age"),
    Field::of::<i16>("id"),
  ])?;
  let obj1 = StructLayout::c_repr(&[Field::of::<i32>("i"), Field::of::<u8>("c")])?;
  let obj2 = StructLayout::c_repr(&[
    Field::of::<u8>("c"),
    Field::of::<i16>("s"),
    Field::of::<u8>("c1"),
    Field::of::<i64>("l"),
  ])?;
  let obj3 = StructLayout::c_repr(&[
    Field::of::<u8>("c1"),
    Field::nested("o", &obj1),
    Field::of::<u8>("c2"),
    Field::of::<i32>("in"),
  ])?;
  let obj4 = StructLayout::c_repr(&[
    Field::array::<u8>("c", 9),
    Field::of::<i32>("a"),
    Field::of::<u8>("c1"),
    Field::of::<i32>("i"),
    Field::of::<i16>("s"),
  ])?;
  let obj5 = StructLayout::c_repr(&[
    Field::of::<u8>("c2"),
    Field::of::<i64>("lo"),
    Field::of::<i32>("m"),
    Field::nested("o", &obj4),
    Field::of::<i32>("n"),
  ])?;

  Ok(vec![
    ("person1", person1),
    ("person2", person2),
    ("obj1", obj1),
    ("obj2", obj2),
    ("obj3", obj3),
    ("obj4", obj4),
    ("obj5", obj5),
  ])
}

fn main() {
  init_tracing();

  let layouts = match samples() {
    Ok(layouts) => layouts,
    Err(err) => {
      tracing::error!(%err, "failed to lay out sample structs");
      return;
    }
  };

  for (name, layout) in &layouts {
    println!("{name}: {} bytes", layout.size());
  }

  // Distance from each field to the next, padding included.
  if let Some((name, layout)) = layouts.last() {
    println!("\n{name} field offsets:");
    let offsets = layout.offsets();
    for (i, (field, offset)) in offsets.iter().enumerate() {
      let next = offsets.get(i + 1).map_or(layout.size(), |(_, next)| *next);
      println!("{field:<4}: offset {offset:>2} - length {}", next - offset);
    }
  }

  for (name, layout) in &layouts {
    println!("\n{name}:\n{}", layout.render());
  }

  // --------------------------------------------------------------------
  // Union overlap: every member starts at byte 0.
  // --------------------------------------------------------------------
  let mut u = MyUnion { i: 0 };
  u.c = b'A' as i8;
  u.s = 16383;
  let c = unsafe { u.c };
  let var0 = i32::from(c);

  println!("{c}");
  println!("{var0}");
  print!("{}", unsafe { render_value(&u) });

  let r = 1u64 << 31;
  print!("{}", unsafe { render_value(&r) });

  let array: Vec<i32> = (0..10).collect();
  println!("{}", format_array(&array));
  println!("size_of::<MyUnion>() = {}", mem::size_of::<MyUnion>());
}
