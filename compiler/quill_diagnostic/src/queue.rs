//! Diagnostic queue for collecting and ordering diagnostics.
//!
//! Features:
//! - Source-order output (stable sort by anchor offset)
//! - Error limit applied when reporting

use crate::Diagnostic;

/// How much of a run's diagnostics to report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors reported by [`DiagnosticQueue::flush`]
    /// (0 = unlimited). Every error is still recorded.
    pub error_limit: usize,
}

impl DiagnosticConfig {
    /// Create a config that reports at most `limit` errors.
    pub fn with_error_limit(limit: usize) -> Self {
        DiagnosticConfig { error_limit: limit }
    }
}

/// Queued diagnostic with the offset used for sorting.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    offset: u32,
}

/// Collects diagnostics in any order and releases them sorted by anchor.
/// Diagnostics with the same anchor keep the order they were added in.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            config,
        }
    }

    /// Add a diagnostic, anchored at the start of its primary span.
    pub fn add(&mut self, diag: Diagnostic) {
        let offset = diag.anchor();
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            offset,
        });
    }

    /// Number of queued diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by position and return them, applying the error
    /// limit. Clears the queue.
    ///
    /// Diagnostics at the same offset keep their insertion order. Skips
    /// sorting if already in order (the common case for a single pass).
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].offset <= w[1].offset);

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.offset);
        }

        let limit = match self.config.error_limit {
            0 => usize::MAX,
            limit => limit,
        };
        self.diagnostics
            .drain(..)
            .take(limit)
            .map(|d| d.diagnostic)
            .collect()
    }
}

impl Extend<Diagnostic> for DiagnosticQueue {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diag in iter {
            self.add(diag);
        }
    }
}

#[cfg(test)]
mod tests;
