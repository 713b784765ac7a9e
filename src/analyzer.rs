use std::collections::HashMap;

use serde::Serialize;

use crate::metrics::MetricsReport;
use crate::morphology::NamingConvention;
use crate::tokenizer::{TokenKind, TokenSpan};

/// Read-only analysis over a finished token stream.
///
/// Operates strictly after `tokenize` returns and never mutates scanner
/// state; it only needs each token's kind, value, morphemes, and
/// convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAnalyzer;

/// Histograms derived from one token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamAnalysis {
    pub kind_counts: HashMap<TokenKind, usize>,
    pub convention_counts: HashMap<NamingConvention, usize>,
    pub morpheme_frequency: HashMap<String, usize>,
}

impl ResultAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, tokens: &[TokenSpan]) -> StreamAnalysis {
        let mut kind_counts = HashMap::new();
        let mut convention_counts = HashMap::new();
        let mut morpheme_frequency = HashMap::new();

        for token in tokens {
            *kind_counts.entry(token.kind()).or_insert(0) += 1;

            if let Some(convention) = token.convention() {
                *convention_counts.entry(convention).or_insert(0) += 1;
            }
            for morpheme in token.morphemes() {
                *morpheme_frequency.entry(morpheme.clone()).or_insert(0) += 1;
            }
        }

        StreamAnalysis {
            kind_counts,
            convention_counts,
            morpheme_frequency,
        }
    }

    /// Human-readable summary of a metrics report.
    pub fn format_metrics(&self, report: &MetricsReport) -> String {
        format!(
            "Performance Results:\n\
             Processing Time: {:?} average\n\
             Memory Usage: {:.3}MB average ({:.3}MB peak)\n\
             Error Rate: {:.1}%\n\
             Throughput: {:.0} tokens/s",
            report.average_processing_time,
            report.average_memory_usage,
            report.peak_memory_usage,
            report.error_rate * 100.0,
            report.tokens_per_second,
        )
    }
}

impl StreamAnalysis {
    /// The most frequent naming convention, if any identifiers were seen.
    /// Ties resolve to the tag with the higher count first encountered.
    pub fn most_common_convention(&self) -> Option<NamingConvention> {
        self.convention_counts
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(convention, _)| *convention)
    }
}
