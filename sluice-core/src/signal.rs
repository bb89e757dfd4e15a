// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared close-once cancellation signal.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use std::sync::Arc;

use event_listener::{Event, EventListener};

/// Broadcast stop signal observed by cancellation-aware pipeline stages.
///
/// A `Signal` can be cloned freely; every clone shares the same state.
/// Firing it is the only transition and is irreversible: once
/// [`fire`](Signal::fire) has been called, every current and future waiter
/// on [`fired`](Signal::fired) resolves immediately.
///
/// # Examples
///
/// ```
/// use sluice_core::Signal;
///
/// # async fn example() {
/// let signal = Signal::new();
/// let observer = signal.clone();
///
/// tokio::spawn(async move {
///     observer.fired().await;
///     // wind the stage down
/// });
///
/// signal.fire();
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Signal {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    fired: AtomicBool,
    event: Event,
}

impl Signal {
    /// Creates an unfired signal.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                fired: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Fires the signal, waking every waiter. Idempotent.
    pub fn fire(&self) {
        // Release so waiters woken below observe everything written
        // before the fire.
        self.shared.fired.store(true, Ordering::Release);
        self.shared.event.notify(usize::MAX);
    }

    /// Returns whether the signal has fired, without waiting.
    pub fn is_fired(&self) -> bool {
        self.shared.fired.load(Ordering::Acquire)
    }

    /// Waits until the signal fires. Resolves immediately if it already has.
    pub fn fired(&self) -> Fired<'_> {
        Fired {
            signal: self,
            listener: None,
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`Signal::fired`].
pub struct Fired<'a> {
    signal: &'a Signal,
    listener: Option<EventListener>,
}

impl Future for Fired<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.signal.is_fired() {
            return Poll::Ready(());
        }

        if self.listener.is_none() {
            self.listener = Some(self.signal.shared.event.listen());
            // A fire between the check above and listen() would otherwise
            // be missed: the notification predates the listener.
            if self.signal.is_fired() {
                return Poll::Ready(());
            }
        }

        match Pin::new(self.listener.as_mut().unwrap()).poll(cx) {
            Poll::Ready(()) => Poll::Ready(()),
            Poll::Pending => Poll::Pending,
        }
    }
}
