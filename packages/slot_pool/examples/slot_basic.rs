//! Basic usage of the `slot_pool` package:
//!
//! * Creating a pool with pre-built handles.
//! * Checking handles out and back in.
//! * Observing the grow-by-two exhaustion behavior.

use slot_pool::SlotPool;

fn main() {
    let mut pool = SlotPool::new(2, || Box::new(vec![0_u8; 1024]));

    println!(
        "Created pool: capacity {}, available {}",
        pool.capacity(),
        pool.available()
    );

    let a = pool.get(|| Box::new(vec![0_u8; 1024]));
    let b = pool.get(|| Box::new(vec![0_u8; 1024]));

    println!("Checked out two buffers, in use: {}", pool.in_use());

    // The pool is now exhausted; this get constructs two new buffers,
    // returning one and keeping one ready for the next caller.
    let c = pool.get(|| Box::new(vec![0_u8; 1024]));

    println!(
        "After exhaustion: capacity {}, available {}",
        pool.capacity(),
        pool.available()
    );

    pool.release(c);
    pool.release(b);
    pool.release(a);

    // `a` was released last, so it is the first to come back.
    let recycled = pool.get(|| Box::new(vec![0_u8; 1024]));
    println!("Recycled a buffer of {} bytes", recycled.len());
    pool.release(recycled);
}
