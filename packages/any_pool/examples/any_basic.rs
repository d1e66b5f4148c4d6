//! Basic usage of the `any_pool` package:
//!
//! * Building a type-erased pool.
//! * Checked retrieval with `get_as()`.
//! * Recovering from a type mismatch.

use std::any::Any;

use any_pool::AnyPool;

#[derive(Default)]
struct RenderJob {
    triangles: Vec<u32>,
}

fn main() {
    let mut pool = AnyPool::builder()
        .initial_size(2)
        .constructor(|| Box::new(RenderJob::default()))
        .cleanup(|item: &mut dyn Any| {
            if let Some(job) = item.downcast_mut::<RenderJob>() {
                job.triangles.clear();
            }
        })
        .build()
        .expect("a constructor was supplied");

    let mut job = pool.get_as::<RenderJob>().expect("pool holds render jobs");
    job.triangles.extend([1, 2, 3]);
    println!("Filled a job with {} triangles", job.triangles.len());

    pool.release(job);

    // Asking for the wrong type is reported, not fatal.
    if let Err(error) = pool.get_as::<String>() {
        println!("Recoverable mismatch: {error}");
    }

    // The pool is unaffected and still serves the right type.
    let job = pool.get_as::<RenderJob>().expect("pool holds render jobs");
    println!(
        "Recycled job is clean again: {} triangles, pool in use: {}",
        job.triangles.len(),
        pool.in_use()
    );
    pool.release(job);
}
