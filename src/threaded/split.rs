//! Fan-out/join work splitting over contiguous index ranges.

use std::any::Any;
use std::ops::Range;
use std::panic;
use std::thread::{self, ScopedJoinHandle};

use log::trace;

/// Number of hardware execution contexts used by [`run`] and [`run_mut`].
///
/// Never less than 1.
pub fn available_threads() -> usize {
    num_cpus::get().max(1)
}

/// Splits `total_work` units into `num_threads` contiguous ranges.
///
/// Every range but the last holds `total_work / num_threads` units; the last
/// one absorbs the remainder. When `num_threads > total_work` all ranges but
/// the last are empty.
///
/// # Example
///
/// ```
/// use rmatrix::threaded::split::partitions;
///
/// assert_eq!(partitions(7, 4), vec![0..1, 1..2, 2..3, 3..7]);
/// assert_eq!(partitions(2, 4), vec![0..0, 0..0, 0..0, 0..2]);
/// ```
///
/// # Panics
///
/// Panics if `num_threads` is zero.
pub fn partitions(total_work: usize, num_threads: usize) -> Vec<Range<usize>> {
    assert!(num_threads > 0, "partitions: need at least one thread");

    let chunk = total_work / num_threads;
    (0..num_threads)
        .map(|t| {
            let start = t * chunk;
            let end = if t == num_threads - 1 {
                total_work
            } else {
                start + chunk
            };
            start..end
        })
        .collect()
}

/// Runs `worker(start, end)` once per partition of `[0, total_work)`, one OS
/// thread per partition, and returns after all of them finish.
///
/// `worker` must tolerate empty ranges. A panic in any partition is re-raised
/// here once every partition has joined.
pub fn run<F>(total_work: usize, worker: F)
where
    F: Fn(usize, usize) + Sync,
{
    run_with_threads(total_work, available_threads(), worker);
}

/// Same as [`run`] with an explicit partition count.
pub fn run_with_threads<F>(total_work: usize, num_threads: usize, worker: F)
where
    F: Fn(usize, usize) + Sync,
{
    let ranges = partitions(total_work, num_threads);
    trace!("run: {} units over {} partitions", total_work, ranges.len());

    thread::scope(|s| {
        let worker = &worker;
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| s.spawn(move || worker(range.start, range.end)))
            .collect();

        join_all(handles);
    });
}

/// Fallible variant of [`run`].
///
/// Every partition runs to completion; the first error in partition order is
/// returned.
pub fn try_run<F, E>(total_work: usize, worker: F) -> Result<(), E>
where
    F: Fn(usize, usize) -> Result<(), E> + Sync,
    E: Send,
{
    try_run_with_threads(total_work, available_threads(), worker)
}

/// Same as [`try_run`] with an explicit partition count.
pub fn try_run_with_threads<F, E>(total_work: usize, num_threads: usize, worker: F) -> Result<(), E>
where
    F: Fn(usize, usize) -> Result<(), E> + Sync,
    E: Send,
{
    let ranges = partitions(total_work, num_threads);
    trace!("try_run: {} units over {} partitions", total_work, ranges.len());

    thread::scope(|s| {
        let worker = &worker;
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| s.spawn(move || worker(range.start, range.end)))
            .collect();

        join_all(handles).into_iter().collect()
    })
}

/// Runs `worker(start, end, chunk)` over disjoint mutable chunks of `data`.
///
/// `data` holds `total_work` units of equal length laid out back to back.
/// Each partition gets the sub-slice covering exactly its units, so the
/// write sets never overlap.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of `total_work` (or `data` is
/// non-empty while `total_work` is zero), or if a partition panics.
pub fn run_mut<T, F>(total_work: usize, data: &mut [T], worker: F)
where
    T: Send,
    F: Fn(usize, usize, &mut [T]) + Sync,
{
    run_mut_with_threads(total_work, data, available_threads(), worker);
}

/// Same as [`run_mut`] with an explicit partition count.
pub fn run_mut_with_threads<T, F>(total_work: usize, data: &mut [T], num_threads: usize, worker: F)
where
    T: Send,
    F: Fn(usize, usize, &mut [T]) + Sync,
{
    let unit_len = if total_work == 0 {
        0
    } else {
        data.len() / total_work
    };
    assert_eq!(
        unit_len * total_work,
        data.len(),
        "run_mut: {} elements do not split into {} units",
        data.len(),
        total_work
    );

    let ranges = partitions(total_work, num_threads);
    trace!(
        "run_mut: {} units of {} elements over {} partitions",
        total_work,
        unit_len,
        ranges.len()
    );

    thread::scope(|s| {
        let worker = &worker;
        let mut rest = data;
        let mut handles = Vec::with_capacity(ranges.len());

        for range in ranges {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * unit_len);
            rest = tail;
            handles.push(s.spawn(move || worker(range.start, range.end, chunk)));
        }

        join_all(handles);
    });
}

/// Joins every handle, then re-raises the first panic (in partition order)
/// with its original payload.
fn join_all<T>(handles: Vec<ScopedJoinHandle<'_, T>>) -> Vec<T> {
    let mut results = Vec::with_capacity(handles.len());
    let mut failure: Option<Box<dyn Any + Send>> = None;

    for handle in handles {
        match handle.join() {
            Ok(value) => results.push(value),
            Err(payload) => {
                failure.get_or_insert(payload);
            }
        }
    }

    if let Some(payload) = failure {
        panic::resume_unwind(payload);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn assert_covers(ranges: &[Range<usize>], total_work: usize) {
        let mut expected_start = 0;
        for range in ranges {
            if !range.is_empty() {
                assert_eq!(range.start, expected_start, "gap or overlap at {:?}", range);
                expected_start = range.end;
            }
        }
        assert_eq!(expected_start, total_work);
    }

    #[test]
    fn test_partitions_seven_over_four() {
        let ranges = partitions(7, 4);
        assert_eq!(ranges, vec![0..1, 1..2, 2..3, 3..7]);
        assert_covers(&ranges, 7);
    }

    #[test]
    fn test_partitions_more_threads_than_work() {
        let ranges = partitions(3, 8);
        assert_eq!(ranges.len(), 8);
        assert!(ranges[..7].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[7], 0..3);
        assert_covers(&ranges, 3);
    }

    #[test]
    fn test_partitions_various() {
        for total_work in [0, 1, 5, 16, 17, 100, 1023] {
            for threads in [1, 2, 3, 4, 7, 16] {
                let ranges = partitions(total_work, threads);
                assert_eq!(ranges.len(), threads);
                assert_covers(&ranges, total_work);
            }
        }
    }

    #[test]
    #[should_panic(expected = "at least one thread")]
    fn test_partitions_zero_threads() {
        partitions(4, 0);
    }

    #[test]
    fn test_run_visits_every_index_once() {
        let hits: Vec<AtomicUsize> = (0..97).map(|_| AtomicUsize::new(0)).collect();
        let calls = AtomicUsize::new(0);

        run_with_threads(hits.len(), 4, |start, end| {
            calls.fetch_add(1, Ordering::SeqCst);
            for hit in &hits[start..end] {
                hit.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert!(hits.iter().all(|h| h.load(Ordering::SeqCst) == 1));
    }

    #[test]
    fn test_run_empty_ranges_are_invoked() {
        let seen = Mutex::new(Vec::new());
        run_with_threads(2, 5, |start, end| seen.lock().unwrap().push((start, end)));

        let mut seen = seen.into_inner().unwrap();
        seen.sort();
        assert_eq!(seen, vec![(0, 0), (0, 0), (0, 0), (0, 0), (0, 2)]);
    }

    #[test]
    fn test_run_mut_chunks_align_with_units() {
        let mut data = vec![0usize; 10 * 3];
        run_mut_with_threads(10, &mut data, 4, |start, end, chunk| {
            assert_eq!(chunk.len(), (end - start) * 3);
            for (offset, value) in chunk.iter_mut().enumerate() {
                *value = start * 3 + offset;
            }
        });
        assert_eq!(data, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_mut_zero_work() {
        let mut data: Vec<f64> = Vec::new();
        run_mut_with_threads(0, &mut data, 3, |start, end, chunk| {
            assert_eq!(start, end);
            assert!(chunk.is_empty());
        });
    }

    #[test]
    #[should_panic(expected = "do not split")]
    fn test_run_mut_uneven_units() {
        let mut data = vec![0.0; 7];
        run_mut_with_threads(3, &mut data, 2, |_, _, _| {});
    }

    #[test]
    #[should_panic(expected = "partition failed")]
    fn test_panic_propagates() {
        run_with_threads(8, 4, |start, _| {
            if start == 4 {
                panic!("partition failed");
            }
        });
    }

    #[test]
    fn test_try_run_returns_error() {
        let finished = AtomicUsize::new(0);
        let result = try_run_with_threads(8, 4, |start, end| {
            finished.fetch_add(1, Ordering::SeqCst);
            if start >= 4 {
                Err(format!("bad range {}..{}", start, end))
            } else {
                Ok(())
            }
        });

        assert_eq!(result, Err("bad range 4..6".to_string()));
        assert_eq!(finished.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_try_run_ok() {
        let result: Result<(), ()> = try_run(100, |_, _| Ok(()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_available_threads() {
        assert!(available_threads() >= 1);
    }
}
