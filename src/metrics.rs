use std::time::Duration;

use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Running accumulation of per-call samples for one tokenizer instance.
///
/// Each `tokenize` call contributes one duration sample and one pair of
/// memory samples, plus its token and error counts. Updates require `&mut`,
/// so a shared instance cannot lose a fold.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    processing_time: Vec<Duration>,
    memory_usage: Vec<f64>,
    peak_memory: Vec<f64>,
    token_count: usize,
    error_count: usize,
}

/// Derived metrics over everything a tokenizer instance has processed.
/// Memory figures are in MB.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub average_processing_time: Duration,
    pub total_tokens: usize,
    pub error_rate: f64,
    pub average_memory_usage: f64,
    pub peak_memory_usage: f64,
    pub tokens_per_second: f64,
}

impl MetricsCollector {
    pub(crate) fn record(
        &mut self,
        elapsed: Duration,
        tokens: usize,
        errors: usize,
        memory_used: usize,
        memory_reserved: usize,
    ) {
        self.processing_time.push(elapsed);
        self.memory_usage.push(memory_used as f64 / BYTES_PER_MB);
        self.peak_memory.push(memory_reserved as f64 / BYTES_PER_MB);
        self.token_count += tokens;
        self.error_count += errors;
    }

    pub fn total_tokens(&self) -> usize {
        self.token_count
    }

    pub fn total_errors(&self) -> usize {
        self.error_count
    }

    /// Derived metrics, or `None` if nothing has been recorded yet.
    ///
    /// The error-rate denominator is floored at one token so a run that
    /// produced only errors still reports a rate instead of dividing by
    /// zero.
    pub fn report(&self) -> Option<MetricsReport> {
        if self.processing_time.is_empty() {
            return None;
        }

        let total_time: Duration = self.processing_time.iter().sum();
        let average_processing_time = total_time / self.processing_time.len() as u32;

        let average_memory_usage =
            self.memory_usage.iter().sum::<f64>() / self.memory_usage.len() as f64;
        let peak_memory_usage = self
            .peak_memory
            .iter()
            .fold(0.0_f64, |acc, sample| acc.max(*sample));

        Some(MetricsReport {
            average_processing_time,
            total_tokens: self.token_count,
            error_rate: self.error_count as f64 / self.token_count.max(1) as f64,
            average_memory_usage,
            peak_memory_usage,
            tokens_per_second: self.token_count as f64 / total_time.as_secs_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collector_reports_nothing() {
        let collector = MetricsCollector::default();
        assert!(collector.report().is_none());
    }

    #[test]
    fn test_single_call() {
        let mut collector = MetricsCollector::default();
        collector.record(Duration::from_millis(10), 100, 2, 1024, 2048);

        let report = collector.report().unwrap();
        assert_eq!(report.average_processing_time, Duration::from_millis(10));
        assert_eq!(report.total_tokens, 100);
        assert_eq!(report.error_rate, 0.02);
        assert!(report.tokens_per_second > 0.0);
        assert!(report.peak_memory_usage >= report.average_memory_usage);
    }

    #[test]
    fn test_accumulates_across_calls() {
        let mut collector = MetricsCollector::default();
        collector.record(Duration::from_millis(10), 10, 0, 1000, 1000);
        collector.record(Duration::from_millis(30), 30, 4, 3000, 5000);

        let report = collector.report().unwrap();
        assert_eq!(report.average_processing_time, Duration::from_millis(20));
        assert_eq!(report.total_tokens, 40);
        assert_eq!(report.error_rate, 0.1);
        assert_eq!(report.peak_memory_usage, 5000.0 / (1024.0 * 1024.0));
    }

    #[test]
    fn test_error_rate_denominator_floor() {
        let mut collector = MetricsCollector::default();
        collector.record(Duration::from_millis(1), 0, 3, 0, 0);

        let report = collector.report().unwrap();
        assert_eq!(report.error_rate, 3.0);
    }
}
