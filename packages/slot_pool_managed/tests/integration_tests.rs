//! Integration tests for the `slot_pool_managed` package.
//!
//! These verify the cleanup contract and the freshness guarantee: cleanup runs exactly
//! once per release, never on the get path, and never on an item that was never
//! released.

use std::cell::Cell;
use std::rc::Rc;

use slot_pool_managed::ManagedSlotPool;

#[derive(Debug)]
struct Scratch {
    primed: bool,
    answer: i64,
    label: String,
}

fn counting_pool(
    initial_size: usize,
) -> (ManagedSlotPool<Box<Scratch>>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let constructed = Rc::new(Cell::new(0));
    let cleaned = Rc::new(Cell::new(0));

    let constructed_in_make = Rc::clone(&constructed);
    let cleaned_in_cleanup = Rc::clone(&cleaned);

    let pool = ManagedSlotPool::builder()
        .initial_size(initial_size)
        .constructor(move || {
            constructed_in_make.set(constructed_in_make.get() + 1);
            Box::new(Scratch {
                primed: false,
                answer: 0,
                label: "fresh".to_string(),
            })
        })
        .cleanup(move |item: &mut Box<Scratch>| {
            cleaned_in_cleanup.set(cleaned_in_cleanup.get() + 1);
            item.primed = true;
            item.answer = 42;
            item.label = "clean".to_string();
        })
        .build()
        .unwrap();

    (pool, constructed, cleaned)
}

#[test]
fn cleanup_runs_exactly_once_per_release() {
    let (mut pool, _constructed, cleaned) = counting_pool(1);

    let mut item = pool.get();
    assert_eq!(item.label, "fresh");

    item.label = "dirty".to_string();
    pool.release(item);
    assert_eq!(cleaned.get(), 1);

    // The recycled item comes back in post-cleanup state.
    let item = pool.get();
    assert_eq!(item.label, "clean");
    assert!(item.primed);
    assert_eq!(item.answer, 42);
    assert_eq!(cleaned.get(), 1);

    pool.release(item);
    assert_eq!(cleaned.get(), 2);
}

#[test]
fn fresh_items_never_see_cleanup() {
    let (mut pool, constructed, cleaned) = counting_pool(1);
    assert_eq!(constructed.get(), 1);

    // First get returns the pre-built item, second exhausts the pool and returns a
    // newly constructed one. Neither has ever been released, so neither was cleaned.
    let first = pool.get();
    let second = pool.get();

    assert_eq!(first.label, "fresh");
    assert_eq!(second.label, "fresh");
    assert_eq!(cleaned.get(), 0);
    assert_eq!(constructed.get(), 3);

    pool.release(second);
    pool.release(first);
}

#[test]
fn end_to_end_exhaustion_and_recycling() {
    let (mut pool, constructed, cleaned) = counting_pool(2);
    assert_eq!(constructed.get(), 2);

    // Both pre-built items check out without construction.
    let a = pool.get();
    let b = pool.get();
    assert_eq!(constructed.get(), 2);

    // Third get exhausts the pool: capacity grows to 4 with exactly two
    // constructions, one item returned and one stored.
    let c = pool.get();
    assert_eq!(constructed.get(), 4);
    assert_eq!(pool.capacity(), 4);

    // Releasing and re-getting recycles; the construction count stays put.
    pool.release(c);
    let c = pool.get();
    assert_eq!(constructed.get(), 4);
    assert_eq!(c.label, "clean");
    assert_eq!(cleaned.get(), 1);

    pool.release(a);
    pool.release(b);
    pool.release(c);
}

#[test]
fn lifo_ordering_through_the_managed_layer() {
    let (mut pool, _constructed, _cleaned) = counting_pool(2);

    let a1 = pool.get();
    let b1 = pool.get();

    let a_addr: *const Scratch = &*a1;
    let b_addr: *const Scratch = &*b1;

    pool.release(b1);
    pool.release(a1);

    let a2 = pool.get();
    let b2 = pool.get();

    assert!(std::ptr::eq(a_addr, &*a2));
    assert!(std::ptr::eq(b_addr, &*b2));

    pool.release(a2);
    pool.release(b2);
}

#[test]
fn orphan_release_cleans_and_grows() {
    let (mut pool, constructed, cleaned) = counting_pool(1);
    assert_eq!(pool.capacity(), 1);

    // Release three items the pool never handed out. Cleanup runs for each, the
    // in-use counter stays at zero and the capacity absorbs the orphans.
    for _ in 0..3 {
        pool.release(Box::new(Scratch {
            primed: false,
            answer: 0,
            label: "orphan".to_string(),
        }));
    }

    assert_eq!(cleaned.get(), 3);
    assert_eq!(pool.in_use(), 0);
    assert_eq!(pool.capacity(), 4);

    // Subsequent gets stay orderly: the orphans come back newest-first in cleaned
    // state, then the pre-built item, all without construction.
    for _ in 0..3 {
        let item = pool.get();
        assert_eq!(item.label, "clean");
    }
    let prebuilt = pool.get();
    assert_eq!(prebuilt.label, "fresh");
    assert_eq!(constructed.get(), 1);
    assert_eq!(pool.in_use(), 4);
}
