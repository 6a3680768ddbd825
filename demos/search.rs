use std::mem;

use libc::c_void;
use rbsearch::{bsearch_index_by, bsearch_raw, int_cmp, int_cmp_raw};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a subscriber honoring `RUST_LOG`, defaulting to `info`.
/// Run with `RUST_LOG=rbsearch=trace` to watch every probe.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
  init_tracing();

  // Both arrays have the same length; keys[i] is looked up in array.
  let array = [1, 4, 7, 18, 90];
  let keys = [1, 5, 7, 19, 90];

  println!("Typed search:");
  for key in keys {
    print!("Searching for {key}...");
    match bsearch_index_by(&key, &array, int_cmp) {
      Some(index) => println!("{} was found at index {index}!", array[index]),
      None => println!("{key} was not found."),
    }
  }

  // --------------------------------------------------------------------
  // The same lookups with all type information erased: a base pointer,
  // a count, a byte size, and a C comparator.
  // --------------------------------------------------------------------
  println!("\nType-erased search:");
  for key in &keys {
    print!("Searching for {key}...");

    let found = unsafe {
      bsearch_raw(
        key as *const i32 as *const c_void,
        array.as_ptr() as *const c_void,
        array.len(),
        mem::size_of::<i32>(),
        int_cmp_raw,
      )
    };

    match found {
      Ok(Some(ptr)) => {
        let ptr = ptr.as_ptr() as *const i32;
        let index = unsafe { ptr.offset_from(array.as_ptr()) };
        println!("{} was found at index {index}!", unsafe { *ptr });
      }
      Ok(None) => println!("{key} was not found."),
      Err(err) => {
        tracing::error!(%err, "search rejected");
        return;
      }
    }
  }
}
