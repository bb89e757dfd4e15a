// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice::prelude::*;
use sluice_test_utils::{assert_closed, collect, feed};

#[tokio::test]
async fn test_skip_n_discards_exactly_the_prefix() {
    // Arrange
    let signal = Signal::new();
    let source = feed(vec![1, 2, 3, 4, 5]);

    // Act
    let tail = source.skip_n(&signal, 2);

    // Assert - value and order of the remainder are untouched
    assert_eq!(collect(tail).await, vec![3, 4, 5]);
}

#[tokio::test]
async fn test_skip_n_zero_forwards_everything() {
    let signal = Signal::new();
    let source = feed(vec![1, 2, 3]);

    let tail = source.skip_n(&signal, 0);

    assert_eq!(collect(tail).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_skip_n_beyond_source_length_yields_empty() {
    let signal = Signal::new();
    let source = feed(vec![1, 2]);

    let tail = source.skip_n(&signal, 10);

    assert_eq!(collect(tail).await, Vec::<i32>::new());
}

#[tokio::test]
async fn test_skip_matching_drops_matches_throughout() {
    // Arrange
    let signal = Signal::new();
    let source = feed(vec![1, 2, 3, 4, 5, 6]);

    // Act - stateless: every even element is dropped, wherever it occurs
    let odds = source.skip_matching(&signal, |value| value % 2 == 0);

    // Assert
    assert_eq!(collect(odds).await, vec![1, 3, 5]);
}

#[tokio::test]
async fn test_skip_while_only_drops_the_leading_run() {
    // Arrange
    let signal = Signal::new();
    let source = feed(vec![2, 4, 5, 6, 2]);

    // Act - latch flips at 5; the later 6 and 2 pass through
    let tail = source.skip_while(&signal, |value| value % 2 == 0);

    // Assert
    assert_eq!(collect(tail).await, vec![5, 6, 2]);
}

#[tokio::test]
async fn test_skip_while_with_no_matching_prefix_forwards_everything() {
    let signal = Signal::new();
    let source = feed(vec![1, 2, 3]);

    let tail = source.skip_while(&signal, |value| *value > 100);

    assert_eq!(collect(tail).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_skip_n_fired_during_discard_phase_closes_output() -> anyhow::Result<()> {
    // Arrange - a source that stays open, pinned mid-discard
    let signal = Signal::new();
    let (tx, rx) = conduit();
    let tail = rx.skip_n(&signal, 5);

    tx.send(1).await?;

    // Act
    signal.fire();

    // Assert - nothing was forwarded and the output closes promptly
    assert_closed(&tail, 500).await;

    Ok(())
}
