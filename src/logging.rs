//! Diagnostic logging for the exercise binaries.
//!
//! Log lines go to stderr so stdout carries nothing but emitted elements.
//! `RUST_LOG` takes precedence over the configured level:
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin complete_15_rx_selection
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::PipelineConfig;

static INIT: Once = Once::new();

/// Install the global subscriber. Only the first call takes effect.
pub fn init_with_config(config: &PipelineConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(&config.log_level)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        // A test harness may already own the global subscriber.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

/// Initialize with the default `warn` level.
pub fn init() {
    init_with_config(&PipelineConfig::default());
}
