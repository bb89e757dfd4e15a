// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Randomized multi-length runs over every operator.
//!
//! Each iteration drives a full pipeline with a source of length 0, 1,
//! or N and asserts two things: every element comes out where the
//! operator's contract says it must, and every output the operator owns
//! reaches end-of-sequence — `collect` returning at all is the proof of
//! closure, and drop-based ownership makes a second close
//! unrepresentable.

use sluice::merge;
use sluice::prelude::*;
use sluice_test_utils::{collect, conduits, feed};

fn random_length() -> usize {
    match fastrand::u8(0..3) {
        0 => 0,
        1 => 1,
        _ => fastrand::usize(2..24),
    }
}

fn random_values() -> Vec<u32> {
    (0..random_length() as u32).collect()
}

#[tokio::test]
async fn test_windowing_chains_always_close_and_account_for_every_element() {
    for _ in 0..200 {
        let values = random_values();
        let signal = Signal::new();

        let skip = fastrand::usize(0..6);
        let skipped = collect(feed(values.clone()).skip_n(&signal, skip)).await;
        assert_eq!(skipped, values.iter().skip(skip).copied().collect::<Vec<_>>());

        let keep = fastrand::usize(0..6);
        let kept = collect(feed(values.clone()).take_n(&signal, keep)).await;
        assert_eq!(kept, values.iter().take(keep).copied().collect::<Vec<_>>());

        let odds = collect(feed(values.clone()).skip_matching(&signal, |v| v % 2 == 0)).await;
        assert_eq!(
            odds,
            values.iter().filter(|v| *v % 2 == 1).copied().collect::<Vec<_>>()
        );

        let bound = fastrand::u32(0..24);
        let prefix = collect(feed(values.clone()).take_while(&signal, move |v| *v < bound)).await;
        assert_eq!(
            prefix,
            values
                .iter()
                .take_while(|v| **v < bound)
                .copied()
                .collect::<Vec<_>>()
        );
    }
}

#[tokio::test]
async fn test_broadcast_and_distribute_always_close_every_output() {
    for _ in 0..200 {
        let values = random_values();
        let fan_width = fastrand::usize(1..4);

        // tee: every output gets the full sequence
        let (txs, rxs) = conduits(fan_width);
        feed(values.clone()).tee(txs).unwrap();
        let collected =
            futures::future::join_all(rxs.into_iter().map(collect)).await;
        for output in collected {
            assert_eq!(output, values);
        }

        // fan_out: outputs partition the sequence round-robin
        let (txs, rxs) = conduits(fan_width);
        feed(values.clone()).fan_out(txs).unwrap();
        let collected =
            futures::future::join_all(rxs.into_iter().map(collect)).await;
        for (offset, output) in collected.iter().enumerate() {
            let expected: Vec<u32> = values
                .iter()
                .skip(offset)
                .step_by(fan_width)
                .copied()
                .collect();
            assert_eq!(*output, expected);
        }

        // fan_out_random: the union is exact even if the partition is free
        let (txs, rxs) = conduits(fan_width);
        feed(values.clone()).fan_out_random(txs).unwrap();
        let collected =
            futures::future::join_all(rxs.into_iter().map(collect)).await;
        let mut union: Vec<u32> = collected.into_iter().flatten().collect();
        union.sort_unstable();
        assert_eq!(union, values);
    }
}

#[tokio::test]
async fn test_merge_and_flatten_always_close_and_lose_nothing() {
    for _ in 0..200 {
        let first = random_values();
        let second = random_values();

        let merged = merge(vec![feed(first.clone()), feed(second.clone())]);
        let mut union = collect(merged).await;
        union.sort_unstable();
        let mut expected = [first.clone(), second.clone()].concat();
        expected.sort_unstable();
        assert_eq!(union, expected);

        let signal = Signal::new();
        let expected_flat = [first.clone(), second.clone()].concat();
        let (outer_tx, outer_rx) = conduit();
        let flat = outer_rx.flatten(&signal);
        let producer = tokio::spawn(async move {
            let _ = outer_tx.send(feed(first)).await;
            let _ = outer_tx.send(feed(second)).await;
        });
        let flattened = collect(flat).await;
        producer.await.unwrap();
        assert_eq!(flattened, expected_flat);
    }
}
