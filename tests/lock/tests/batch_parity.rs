//! Batch scans agree with a sequential scan regardless of worker count,
//! chunk size, or the order in which chunks finish.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};

use advent_harness::batch::Batch;
use advent_kernel::hash::{canonical_hash, HashDomain};

fn zeros(index: u64) -> u32 {
    canonical_hash(HashDomain::Probe, format!("lock{index}").as_bytes()).leading_zero_nibbles()
}

#[test]
fn find_first_parity_over_configurations() {
    let expected = (0..).find(|&i| zeros(i) >= 3);
    for workers in [1, 2, 3, 8] {
        for chunk_size in [1, 7, 64, 1000] {
            let batch = Batch::default()
                .with_workers(workers)
                .with_chunk_size(chunk_size);
            assert_eq!(
                batch.find_first(|i| zeros(i) >= 3).unwrap(),
                expected,
                "workers={workers} chunk_size={chunk_size}"
            );
        }
    }
}

#[test]
fn every_index_scanned_exactly_once() {
    let total = AtomicU64::new(0);
    let batch = Batch::default()
        .with_workers(5)
        .with_chunk_size(13)
        .starting_at(7)
        .with_limit(1007);
    batch
        .run(
            |start, len| {
                total.fetch_add((start..start + len).sum::<u64>(), Ordering::Relaxed);
            },
            |_| ControlFlow::Continue(()),
        )
        .unwrap();
    let expected: u64 = (7..1007).sum();
    assert_eq!(total.load(Ordering::Relaxed), expected);
}
