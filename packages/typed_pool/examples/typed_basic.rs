//! Basic usage of the `typed_pool` package:
//!
//! * Creating a typed pool with a cleanup routine.
//! * Checking items out and back in with no type plumbing.

use typed_pool::TypedPool;

struct Message {
    sequence: u64,
    payload: Vec<u8>,
}

fn main() {
    let mut pool = TypedPool::with_cleanup(
        10,
        || Message {
            sequence: 0,
            payload: Vec::with_capacity(1500),
        },
        |message| {
            message.sequence = 0;
            message.payload.clear();
        },
    );

    let mut a = pool.get();
    let mut b = pool.get();

    a.sequence = 1;
    a.payload.extend_from_slice(b"first");
    b.sequence = 2;
    b.payload.extend_from_slice(b"second");

    println!(
        "Checked out {} messages, pool capacity {}",
        pool.in_use(),
        pool.capacity()
    );

    pool.release(a);
    pool.release(b);

    // Recycled messages arrive reset but keep their payload allocations.
    let message = pool.get();
    println!(
        "Recycled message: sequence {}, payload capacity {}",
        message.sequence,
        message.payload.capacity()
    );
    pool.release(message);
}
