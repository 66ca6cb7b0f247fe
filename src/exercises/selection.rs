//! Selection exercises: filter by threshold, concat behind a delay, take a prefix.

use std::io::Write;

use futures::{Stream, StreamExt};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::operators::{concat, PipelineExt};
use crate::source::range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRoutine {
    RandomAboveThreshold,
    DelayedConcat,
    TakeFive,
}

impl SelectionRoutine {
    pub const ALL: [SelectionRoutine; 3] = [
        SelectionRoutine::RandomAboveThreshold,
        SelectionRoutine::DelayedConcat,
        SelectionRoutine::TakeFive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SelectionRoutine::RandomAboveThreshold => "random_above_threshold",
            SelectionRoutine::DelayedConcat => "delayed_concat",
            SelectionRoutine::TakeFive => "take_five",
        }
    }

    pub fn run<W: Write>(&self, config: &PipelineConfig, out: W) -> Result<usize> {
        let name = self.name();
        let result = match self {
            SelectionRoutine::RandomAboveThreshold => random_above_threshold(config)
                .and_then(|stream| super::print_all(name, stream, out)),
            SelectionRoutine::DelayedConcat => {
                delayed_concat(config).and_then(|stream| super::print_all(name, stream, out))
            }
            SelectionRoutine::TakeFive => {
                take_five(config).and_then(|stream| super::print_all(name, stream, out))
            }
        };
        super::warn_on_error(name, result)
    }
}

/// range(0, N) -> random in [0, bound) -> keep values above the threshold
pub fn random_above_threshold(config: &PipelineConfig) -> Result<impl Stream<Item = i32>> {
    Ok(range(0, config.range_len, config)?
        .randomize(config.random_bound)?
        .above(config.threshold))
}

/// `"From flow 1 <i>"` lines held back by the delay, followed by `"From flow 2 <i>"`.
pub fn delayed_concat(config: &PipelineConfig) -> Result<impl Stream<Item = String>> {
    let first = range(0, config.range_len, config)?
        .map(|i| format!("From flow 1 {}", i))
        .delayed(config.delay());
    let second = range(0, config.range_len, config)?.map(|i| format!("From flow 2 {}", i));
    Ok(concat(first, second))
}

/// range(0, 10) -> random in [0, bound) -> first few
pub fn take_five(config: &PipelineConfig) -> Result<impl Stream<Item = i32>> {
    Ok(range(0, config.short_range_len, config)?
        .randomize(config.random_bound)?
        .take(config.take_count))
}
