//! The exercise routines, grouped the way the binaries group them.
//!
//! Every routine validates its whole pipeline before the first element is
//! pulled, so a rejected routine prints nothing.

pub mod aggregation;
pub mod mapping;
pub mod selection;

use std::fmt::Display;
use std::io::Write;
use std::time::Instant;

use futures::Stream;

use crate::consumer::blocking_subscribe;
use crate::error::Result;

pub use aggregation::AggregationRoutine;
pub use mapping::MappingRoutine;
pub use selection::SelectionRoutine;

fn print_all<S, W>(name: &str, stream: S, out: W) -> Result<usize>
where
    S: Stream,
    S::Item: Display,
    W: Write,
{
    tracing::info!(routine = name, "routine started");
    let started = Instant::now();
    let printed = blocking_subscribe(stream, out)?;
    tracing::info!(
        routine = name,
        printed,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "routine completed"
    );
    Ok(printed)
}

fn warn_on_error<T>(name: &str, result: Result<T>) -> Result<T> {
    match &result {
        Err(e) if e.is_invalid_argument() => {
            tracing::warn!(routine = name, error = %e, "routine rejected");
        }
        Err(e) => tracing::warn!(routine = name, error = %e, "routine failed"),
        Ok(_) => {}
    }
    result
}

#[cfg(test)]
pub(crate) mod test_support {
    pub fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn ints(buf: &[u8]) -> Vec<i64> {
        lines(buf)
            .iter()
            .map(|l| l.parse().expect("integer line"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured<F: FnOnce()>(f: F) -> String {
        let log = SharedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_rejected_routine_logs_warning() {
        let config = PipelineConfig {
            random_bound: 0,
            ..PipelineConfig::default()
        };
        let logs = captured(|| {
            let mut out = Vec::new();
            assert!(MappingRoutine::SkipThree.run(&config, &mut out).is_err());
            assert!(SelectionRoutine::TakeFive.run(&config, &mut out).is_err());
            assert!(out.is_empty());
        });
        assert!(logs.contains("WARN"), "{}", logs);
        assert!(logs.contains("routine rejected"), "{}", logs);
        assert!(logs.contains("skip_three"), "{}", logs);
        assert!(logs.contains("take_five"), "{}", logs);
    }

    #[test]
    fn test_rejected_aggregation_logs_warning() {
        let config = PipelineConfig {
            max_range_len: 10,
            short_range_len: 10,
            ..PipelineConfig::default()
        };
        let logs = captured(|| {
            let mut out = Vec::new();
            assert!(AggregationRoutine::CountRange.run(&config, &mut out).is_err());
            assert!(out.is_empty());
        });
        assert!(logs.contains("routine rejected"), "{}", logs);
        assert!(logs.contains("count_range"), "{}", logs);
    }

    #[test]
    fn test_successful_routine_logs_no_warning() {
        let logs = captured(|| {
            let mut out = Vec::new();
            MappingRoutine::SkipThree
                .run(&PipelineConfig::default(), &mut out)
                .unwrap();
        });
        assert!(!logs.contains("WARN"), "{}", logs);
    }
}
