// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice::prelude::*;
use sluice_test_utils::{
    assert_closed, collect, feed, recv_within,
    test_data::{parcel_book, parcel_crate, parcel_letter},
};

#[tokio::test]
async fn test_map_transforms_every_element_in_order() {
    // Arrange
    let source = feed(vec![1, 2, 3, 4]);

    // Act
    let scaled = source.map(|value| value * 10);

    // Assert
    assert_eq!(collect(scaled).await, vec![10, 20, 30, 40]);
}

#[tokio::test]
async fn test_map_can_change_the_element_type() {
    // Arrange
    let source = feed(vec![parcel_letter(), parcel_book(), parcel_crate()]);

    // Act
    let labels = source.map(|parcel| parcel.label);

    // Assert - same length, same order
    assert_eq!(collect(labels).await, vec!["letter", "book", "crate"]);
}

#[tokio::test]
async fn test_map_over_closed_source_closes_output() {
    // Arrange - a source that closes without producing
    let source = feed(Vec::<i32>::new());

    // Act
    let mapped = source.map(|value| value + 1);

    // Assert
    assert_closed(&mapped, 500).await;
}

#[tokio::test]
async fn test_map_stops_when_consumer_detaches() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = conduit();
    let mapped = rx.map(|value: i32| value + 1);

    tx.send(1).await?;
    assert_eq!(recv_within(&mapped, 500).await, 2);

    // Act - the consumer walks away
    drop(mapped);

    // Assert - the stage lets go of the source instead of stalling
    let mut rejected = false;
    for value in 0..8 {
        if tx.send(value).await.is_err() {
            rejected = true;
            break;
        }
    }
    assert!(rejected, "source sender should observe the detached stage");

    Ok(())
}
