// file: src/utils/telemetry.rs
// description: operation timing for summarization and translation calls
// reference: tracing based timing helpers

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} in {:.2}ms",
            self.operation,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }

    /// Logs the number of sentences (or other items) handled by the operation.
    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} - {} items in {:.2}ms",
            self.operation,
            count,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }

    pub fn warn_if_slow(&self, threshold: Duration, message: &str) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "Slow operation [{}]: {} took {:.2}s (threshold: {:.2}s)",
                self.operation,
                message,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        timer.warn_if_slow(Duration::from_millis(1), "sleep");
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_finish_with_count() {
        let timer = OperationTimer::new("count");
        let elapsed = timer.finish_with_count(5);
        assert!(elapsed < Duration::from_secs(5));
    }
}
