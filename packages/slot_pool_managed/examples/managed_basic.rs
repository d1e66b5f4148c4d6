//! Basic usage of the `slot_pool_managed` package:
//!
//! * Building a pool with a constructor and a cleanup routine.
//! * Observing that released items are reset before they are recycled.

use slot_pool_managed::ManagedSlotPool;

fn main() {
    let mut pool = ManagedSlotPool::builder()
        .initial_size(4)
        .constructor(|| String::with_capacity(64))
        .cleanup(|line: &mut String| line.clear())
        .build()
        .expect("a constructor was supplied");

    let mut line = pool.get();
    line.push_str("temporary formatting scratch");
    println!("Used a pooled string: {line:?}");

    pool.release(line);

    // The cleanup routine cleared the string before it went back in its slot.
    let line = pool.get();
    println!("Recycled string is empty again: {:?}", line.is_empty());

    pool.release(line);
    println!(
        "Pool state: capacity {}, in use {}",
        pool.capacity(),
        pool.in_use()
    );
}
