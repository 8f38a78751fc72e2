//! Per-item outcomes and the reports batch operations fold them into.

use std::fmt;

/// Outcome of a single deploy or delete against the remote registry.
///
/// Failures carry the message extracted from the registry's error response;
/// they are reported, not propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// The app was deployed.
    Deployed,
    /// The app was deleted.
    Deleted,
    /// The registry refused the operation with this message.
    Failed(String),
}

impl OperationResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deployed => f.write_str("Deployed."),
            Self::Deleted => f.write_str("Deleted."),
            Self::Failed(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// One line of a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// App name the outcome belongs to (may be empty for unnamed files).
    pub identifier: String,
    pub outcome: OperationResult,
}

/// Ordered per-app outcomes of a batch operation.
///
/// Rendered as one `identifier: outcome` line per entry, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome for `identifier`.
    pub fn push(&mut self, identifier: impl Into<String>, outcome: OperationResult) {
        self.entries.push(ReportEntry {
            identifier: identifier.into(),
            outcome,
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose outcome is a failure.
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_error()).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.identifier, entry.outcome)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_result_display() {
        assert_eq!(OperationResult::Deployed.to_string(), "Deployed.");
        assert_eq!(OperationResult::Deleted.to_string(), "Deleted.");
        assert_eq!(
            OperationResult::failed("Siddhi App already exists").to_string(),
            "ERROR: Siddhi App already exists"
        );
    }

    #[test]
    fn test_report_keeps_insertion_order() {
        let mut report = Report::new();
        report.push("B", OperationResult::Deleted);
        report.push("A", OperationResult::failed("not found"));

        assert_eq!(report.to_string(), "B: Deleted.\nA: ERROR: not found\n");
        assert_eq!(report.len(), 2);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.entries()[0].identifier, "B");
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }
}
