//! Expected test outcomes and a pass/fail tally for vector runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Outcome a Wycheproof test case expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedResult {
    /// The operation must succeed
    Valid,
    /// The operation must fail
    Invalid,
    /// Either outcome is allowed
    Acceptable,
}

impl ExpectedResult {
    /// Parses the `result` field of a test case.
    ///
    /// # Errors
    /// Returns [`DocumentError::UnknownResult`] for anything other than
    /// `"valid"`, `"invalid"` or `"acceptable"`.
    pub fn parse(value: &str) -> Result<Self, DocumentError> {
        match value {
            "valid" => Ok(Self::Valid),
            "invalid" => Ok(Self::Invalid),
            "acceptable" => Ok(Self::Acceptable),
            other => Err(DocumentError::UnknownResult { value: other.to_string() }),
        }
    }
}

/// Running totals for a set of test vectors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VectorTally {
    /// Total number of tests run
    pub total: usize,
    /// Number of tests passed
    pub passed: usize,
    /// Number of tests failed
    pub failed: usize,
    /// Number of tests skipped
    pub skipped: usize,
    /// Failure details
    pub failures: Vec<String>,
}

impl VectorTally {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing failed. Skips do not count as failures.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Fraction of all tests that failed; `0.0` for an empty tally.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn failure_rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.failed as f64 / self.total as f64 }
    }

    /// Add a passed test
    pub fn add_pass(&mut self) {
        self.total = self.total.saturating_add(1);
        self.passed = self.passed.saturating_add(1);
    }

    /// Add a failed test
    pub fn add_failure(&mut self, message: String) {
        self.total = self.total.saturating_add(1);
        self.failed = self.failed.saturating_add(1);
        self.failures.push(message);
    }

    /// Add a skipped test
    pub fn add_skip(&mut self) {
        self.total = self.total.saturating_add(1);
        self.skipped = self.skipped.saturating_add(1);
    }

    /// Records the outcome of test `tc_id`, where `succeeded` says whether
    /// the operation under test succeeded.
    pub fn record(&mut self, tc_id: u64, expected: ExpectedResult, succeeded: bool) {
        match (expected, succeeded) {
            (ExpectedResult::Acceptable, _)
            | (ExpectedResult::Valid, true)
            | (ExpectedResult::Invalid, false) => self.add_pass(),
            (ExpectedResult::Valid, false) => {
                self.add_failure(format!("Test {tc_id}: expected valid but operation failed"));
            }
            (ExpectedResult::Invalid, true) => {
                self.add_failure(format!("Test {tc_id}: expected invalid but operation succeeded"));
            }
        }
    }
}

impl fmt::Display for VectorTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} passed, {} skipped", self.passed, self.total, self.skipped)
    }
}
