//! Aggregating exercises: count a range, echo a random-length range then its last element.

use std::io::Write;

use futures::{Stream, StreamExt};

use crate::config::PipelineConfig;
use crate::consumer::{blocking_count, blocking_subscribe};
use crate::error::Result;
use crate::random::RandomInt;
use crate::source::range;

/// Upper bound (exclusive) for the random length of the echoed range.
const MAX_ECHO_LEN: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationRoutine {
    CountRange,
    EchoThenLast,
}

impl AggregationRoutine {
    pub fn name(&self) -> &'static str {
        match self {
            AggregationRoutine::CountRange => "count_range",
            AggregationRoutine::EchoThenLast => "echo_then_last",
        }
    }

    pub fn run<W: Write>(&self, config: &PipelineConfig, out: W) -> Result<usize> {
        tracing::info!(routine = self.name(), "routine started");
        let result = match self {
            AggregationRoutine::CountRange => count_range(config, out),
            AggregationRoutine::EchoThenLast => echo_then_last(config, out),
        };
        let printed = super::warn_on_error(self.name(), result)?;
        tracing::info!(routine = self.name(), printed, "routine completed");
        Ok(printed)
    }
}

/// range(1, N) counted by folding, printed as a single line.
pub fn count_range<W: Write>(config: &PipelineConfig, mut out: W) -> Result<usize> {
    let count = blocking_count(range(1, config.range_len, config)?)?;
    writeln!(out, "{}", count)?;
    Ok(1)
}

/// range(1, n) for a random n in [1, 100): every element, then the last one again.
pub fn echo_then_last<W: Write>(config: &PipelineConfig, out: W) -> Result<usize> {
    let len = RandomInt::new(MAX_ECHO_LEN - 1)?.draw() + 1;
    echo_then_last_of(range(1, len.into(), config)?, out)
}

/// Prints each element as it passes, then the last one (or 1 when empty).
fn echo_then_last_of<S, W>(numbers: S, mut out: W) -> Result<usize>
where
    S: Stream<Item = i32>,
    W: Write,
{
    let mut last = 1;
    let printed = blocking_subscribe(numbers.inspect(|v| last = *v), &mut out)?;
    writeln!(out, "{}", last)?;
    Ok(printed + 1)
}
