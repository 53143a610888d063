//! Multi-threaded execution helpers.
//!
//! Every parallel matrix operation goes through [`split`]: the work is cut
//! into one contiguous range per hardware thread, each range runs on its own
//! scoped OS thread, and the caller blocks until all of them are joined.
//! Threads are created fresh for every call; there is no pool.

pub mod split;

pub use split::{available_threads, partitions, run, run_mut, try_run};
