//! # Reactive Ranges
//!
//! Operator exercises over finite integer ranges, built on `futures::Stream`
//! and driven to completion by a blocking subscriber.
//!
//! ## Pieces
//!
//! 1. **Sources** - `source::range` emits `start..start + count` lazily
//! 2. **Stages** - `PipelineExt` adds randomize, square, letter codes,
//!    threshold filter and delayed start; `skip`/`take` come from `StreamExt`
//! 3. **Combinators** - `zip_with` and `concat`
//! 4. **Terminal consumers** - `blocking_subscribe` prints one element per line,
//!    `blocking_count` and `blocking_last` fold the stream
//!
//! ## Running the Exercises
//!
//! ```bash
//! cargo run --bin complete_15_rx_mapping
//! cargo run --bin complete_15_rx_selection
//! cargo run --bin complete_15_rx_aggregation
//! ```
//!
//! ## Example
//!
//! ```
//! use futures::StreamExt;
//! use reactive_ranges::{blocking_subscribe, range, PipelineConfig, PipelineExt};
//!
//! let config = PipelineConfig::default();
//! let pipeline = range(0, 10, &config)?.randomize(1000)?.take(5);
//!
//! let mut out = Vec::new();
//! assert_eq!(blocking_subscribe(pipeline, &mut out)?, 5);
//! # Ok::<(), reactive_ranges::PipelineError>(())
//! ```

pub mod config;
pub mod consumer;
pub mod error;
pub mod exercises;
pub mod logging;
pub mod operators;
pub mod random;
pub mod source;

pub use config::PipelineConfig;
pub use consumer::{
    blocking_count, blocking_last, blocking_subscribe, BlockingSubscriber, SubscriptionState,
};
pub use error::{PipelineError, Result};
pub use operators::{concat, zip_with, PipelineExt};
pub use source::{range, RangeStream};
