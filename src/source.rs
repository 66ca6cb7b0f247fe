//! Finite integer sources.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};

/// Emits `start, start + 1, ..` exactly `count` times, then completes.
///
/// Consumed by value: once exhausted it stays exhausted, build a new one to
/// run the sequence again.
#[derive(Debug)]
pub struct RangeStream {
    next: i32,
    remaining: usize,
}

impl RangeStream {
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Stream for RangeStream {
    type Item = i32;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.remaining == 0 {
            return Poll::Ready(None);
        }
        let current = self.next;
        self.remaining -= 1;
        // Don't step past the last value, it may be i32::MAX.
        if self.remaining > 0 {
            self.next += 1;
        }
        Poll::Ready(Some(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Build the range `start..start + count`, checked against the configured
/// length limit before anything is emitted.
pub fn range(start: i32, count: i64, config: &PipelineConfig) -> Result<RangeStream> {
    config.check_range_len("count", count)?;
    if i64::from(start) + count > i64::from(i32::MAX) + 1 {
        return Err(PipelineError::invalid_argument(
            "count",
            count,
            format!("range starting at {} overflows i32", start),
        ));
    }
    tracing::debug!(start, count, "range created");
    Ok(RangeStream {
        next: start,
        remaining: count as usize,
    })
}
