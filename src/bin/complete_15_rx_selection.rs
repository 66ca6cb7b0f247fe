//! Selection exercises: threshold filter, delayed concat, take.
//!
//! Run with: cargo run --bin complete_15_rx_selection

use anyhow::Context;
use reactive_ranges::exercises::SelectionRoutine;
use reactive_ranges::{logging, PipelineConfig};

/// Switch this to run a different exercise.
const SELECTED: SelectionRoutine = SelectionRoutine::TakeFive;

fn main() -> anyhow::Result<()> {
    let config = PipelineConfig::default();
    logging::init_with_config(&config);

    let stdout = std::io::stdout();
    SELECTED
        .run(&config, stdout.lock())
        .with_context(|| format!("routine {} failed", SELECTED.name()))?;
    Ok(())
}
