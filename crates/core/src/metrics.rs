//! Metrics collection and reporting for a generator run.
//!
//! Counters are updated explicitly by the driver at each pipeline stage;
//! the system is single-threaded, so no synchronization is involved.

use std::time::{Duration, Instant};

/// Counters and timing for one generate-encode-write run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    /// Source bits drawn from the random source
    pub bits_generated: u64,

    /// Line symbols produced by the encoder
    pub symbols_encoded: u64,

    /// Bytes written to the output record (including terminator)
    pub record_bytes_written: u64,
}

impl RunMetrics {
    /// Start a new metrics collection (records the start time).
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            bits_generated: 0,
            symbols_encoded: 0,
            record_bytes_written: 0,
        }
    }

    /// Mark the run as complete.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Elapsed wall-clock time (up to now if the run hasn't finished).
    pub fn elapsed(&self) -> Duration {
        self.end_time.unwrap_or_else(Instant::now) - self.start_time
    }

    /// Print a human-readable summary.
    pub fn print_summary(&self) {
        println!("=== Run Summary ===");
        println!("Bits generated:  {}", self.bits_generated);
        println!(
            "Symbols encoded: {} ({}x expansion)",
            self.symbols_encoded,
            if self.bits_generated > 0 {
                self.symbols_encoded / self.bits_generated
            } else {
                0
            }
        );
        println!("Record bytes:    {}", self.record_bytes_written);
        println!("Elapsed:         {:?}", self.elapsed());
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = RunMetrics::new();
        assert_eq!(metrics.bits_generated, 0);
        assert_eq!(metrics.symbols_encoded, 0);
        assert_eq!(metrics.record_bytes_written, 0);
        assert!(metrics.end_time.is_none());
    }

    #[test]
    fn test_finish_sets_end_time() {
        let mut metrics = RunMetrics::new();
        metrics.finish();
        assert!(metrics.end_time.is_some());
        assert!(metrics.elapsed() >= Duration::ZERO);
    }
}
