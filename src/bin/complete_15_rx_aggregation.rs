//! Aggregation exercises: count a range, echo a random-length range and its last element.
//!
//! Run with: cargo run --bin complete_15_rx_aggregation

use anyhow::Context;
use reactive_ranges::exercises::AggregationRoutine;
use reactive_ranges::{logging, PipelineConfig};

const SELECTED: AggregationRoutine = AggregationRoutine::EchoThenLast;

fn main() -> anyhow::Result<()> {
    let config = PipelineConfig::default();
    logging::init_with_config(&config);

    SELECTED
        .run(&config, std::io::stdout().lock())
        .with_context(|| format!("routine {} failed", SELECTED.name()))?;
    Ok(())
}
