//! Terminal consumers: drive a pipeline to completion on the calling thread.
//!
//! Each call spins up a current-thread tokio runtime with timers enabled, so
//! delayed stages work without a caller-provided runtime. Don't call these
//! from inside an async context.

use std::fmt::Display;
use std::io::Write;

use futures::future;
use futures::stream::{Stream, StreamExt};
use tokio::runtime::{Builder, Runtime};

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Idle,
    Running,
    Completed,
    Failed,
}

impl SubscriptionState {
    fn as_str(&self) -> &'static str {
        match self {
            SubscriptionState::Idle => "idle",
            SubscriptionState::Running => "running",
            SubscriptionState::Completed => "completed",
            SubscriptionState::Failed => "failed",
        }
    }
}

/// Prints every element of one stream to `out`, one per line.
pub struct BlockingSubscriber<W> {
    out: W,
    state: SubscriptionState,
    emitted: usize,
}

impl<W: Write> BlockingSubscriber<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            state: SubscriptionState::Idle,
            emitted: 0,
        }
    }

    pub fn state(&self) -> SubscriptionState {
        self.state
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Block until `stream` completes. Returns the number of lines written.
    ///
    /// A subscriber runs once; a second call fails without touching the stream.
    pub fn subscribe<S>(&mut self, stream: S) -> Result<usize>
    where
        S: Stream,
        S::Item: Display,
    {
        if self.state != SubscriptionState::Idle {
            return Err(PipelineError::AlreadySubscribed(self.state.as_str()));
        }
        let runtime = current_thread_runtime()?;

        self.transition(SubscriptionState::Running);
        match runtime.block_on(self.drain(stream)) {
            Ok(()) => {
                self.transition(SubscriptionState::Completed);
                Ok(self.emitted)
            }
            Err(e) => {
                self.transition(SubscriptionState::Failed);
                tracing::warn!(emitted = self.emitted, error = %e, "subscription failed");
                Err(e)
            }
        }
    }

    async fn drain<S>(&mut self, stream: S) -> Result<()>
    where
        S: Stream,
        S::Item: Display,
    {
        let mut stream = std::pin::pin!(stream);
        while let Some(item) = stream.next().await {
            writeln!(self.out, "{}", item)?;
            self.emitted += 1;
        }
        self.out.flush()?;
        Ok(())
    }

    fn transition(&mut self, next: SubscriptionState) {
        tracing::debug!(from = self.state.as_str(), to = next.as_str(), "subscription state");
        self.state = next;
    }
}

fn current_thread_runtime() -> Result<Runtime> {
    Ok(Builder::new_current_thread().enable_time().build()?)
}

/// Print every element of `stream` to `out` and return how many were printed.
pub fn blocking_subscribe<S, W>(stream: S, out: W) -> Result<usize>
where
    S: Stream,
    S::Item: Display,
    W: Write,
{
    BlockingSubscriber::new(out).subscribe(stream)
}

/// Drive `stream` to completion and count its elements.
pub fn blocking_count<S: Stream>(stream: S) -> Result<usize> {
    let runtime = current_thread_runtime()?;
    Ok(runtime.block_on(stream.fold(0usize, |count, _| future::ready(count + 1))))
}

/// Drive `stream` to completion and return its last element, or `default`
/// if it completed without emitting.
pub fn blocking_last<S: Stream>(stream: S, default: S::Item) -> Result<S::Item> {
    let runtime = current_thread_runtime()?;
    Ok(runtime.block_on(stream.fold(default, |_, item| future::ready(item))))
}
