// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator - applies a transformation to every element.
//!
//! One stage, one output. The output sequence has the same length and
//! order as the source; element `i` of the output is the transformation
//! applied to element `i` of the source. There is no cancellation
//! parameter: the stage runs until the source is exhausted (or the
//! consumer detaches), with backpressure supplied by the conduit itself.

use sluice_core::{conduit, Receiver};

/// Extension trait providing the `map` operator for conduit receivers.
pub trait MapExt<In> {
    /// Transforms every element of the sequence, preserving order.
    ///
    /// The returned receiver yields `transform(element)` for each source
    /// element, in source order, and closes once the source closes.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// # async fn example() {
    /// let (tx, rx) = conduit();
    /// let doubled = rx.map(|value: i32| value * 2);
    ///
    /// tx.send(21).await.unwrap();
    /// drop(tx);
    ///
    /// assert_eq!(doubled.recv().await, Ok(42));
    /// assert!(doubled.recv().await.is_err());
    /// # }
    /// ```
    fn map<Out, F>(self, transform: F) -> Receiver<Out>
    where
        F: FnMut(In) -> Out + Send + 'static,
        Out: Send + 'static;
}

impl<In> MapExt<In> for Receiver<In>
where
    In: Send + 'static,
{
    fn map<Out, F>(self, mut transform: F) -> Receiver<Out>
    where
        F: FnMut(In) -> Out + Send + 'static,
        Out: Send + 'static,
    {
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            while let Ok(value) = self.recv().await {
                if tx.send(transform(value)).await.is_err() {
                    crate::logging::trace!("map: consumer detached, stage stopping");
                    break;
                }
            }
        });
        rx
    }
}
