//! One-shot and recurring timers that deliver events to the main loop
//!
//! Both timers stop when their handle is dropped, so a timer can never
//! outlive the screen or controller that owns it.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Handle to a scheduled one-shot event
#[derive(Debug)]
pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    /// Abort the task if it has not fired yet
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Send `event` on `tx` once, after `delay`
pub fn schedule_once<T>(delay: Duration, tx: UnboundedSender<T>, event: T) -> TaskHandle
where
    T: Send + 'static,
{
    let handle = tokio::spawn(async move {
        time::sleep(delay).await;
        // Receiver gone means the app is shutting down
        let _ = tx.send(event);
    });
    TaskHandle { handle }
}

/// Recurring event source, stopped on [`Ticker::stop`] or drop
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Send a clone of `event` every `period`, starting one period from now
    pub fn start<T>(period: Duration, tx: UnboundedSender<T>, event: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(event.clone()).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
