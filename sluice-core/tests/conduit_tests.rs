// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::{conduit, FanError};

#[tokio::test]
async fn test_roundtrip() -> anyhow::Result<()> {
    let (tx, rx) = conduit();

    tx.send(42).await?;

    assert_eq!(rx.recv().await, Ok(42));

    Ok(())
}

#[tokio::test]
async fn test_producer_can_stage_one_element_ahead() -> anyhow::Result<()> {
    let (tx, rx) = conduit();

    // One element fits without a waiting consumer; a second does not.
    assert!(tx.try_send(1).is_ok());
    assert!(tx.try_send(2).is_err());

    assert_eq!(rx.recv().await, Ok(1));
    assert!(tx.try_send(2).is_ok());

    Ok(())
}

#[tokio::test]
async fn test_dropping_sender_closes_after_drain() -> anyhow::Result<()> {
    let (tx, rx) = conduit();

    tx.send(7).await?;
    drop(tx);

    // The staged element is still delivered, then end-of-sequence.
    assert_eq!(rx.recv().await, Ok(7));
    assert!(rx.recv().await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_send_fails_once_consumers_are_gone() {
    let (tx, rx) = conduit();
    drop(rx);

    assert!(tx.send(1).await.is_err());
}

#[test]
fn test_fan_error_message() {
    assert_eq!(
        FanError::NoOutputs.to_string(),
        "at least one output conduit is required"
    );
}
