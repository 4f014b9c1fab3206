use feedgate_core::{CheckId, Finding, Verdict};

use crate::events;

/// Ordered findings collected while one candidate is validated.
#[derive(Debug, Clone, Default)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check.
    pub fn fail(&mut self, check: CheckId, message: impl Into<String>) {
        let message = message.into();
        events::check_failed(check, &message);
        self.findings.push(Finding::new(check, message));
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn has(&self, check: CheckId) -> bool {
        self.findings.iter().any(|f| f.check == check)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Collapse into the public verdict, keeping message order.
    pub fn into_verdict(self) -> Verdict {
        Verdict::from_errors(self.findings.into_iter().map(|f| f.message).collect())
    }
}
