//! The report a failed verification hands to the test harness.

use std::error::Error;
use std::fmt;

use crate::Verdict;

/// A failed must/wont verification.
///
/// Locations are kept pre-rendered so the caller decides how paths are
/// displayed (relative to the working directory or as captured).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    verdict: Verdict,
    at: String,
    compared_at: Option<String>,
    reason: String,
}

impl Failure {
    pub fn new(verdict: Verdict, at: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            verdict,
            at: at.into(),
            compared_at: None,
            reason: reason.into(),
        }
    }

    /// Record where the comparison itself ran, when it differs from the verification site.
    #[must_use]
    pub fn with_comparison_site(mut self, site: impl Into<String>) -> Self {
        self.compared_at = Some(site.into());
        self
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn at(&self) -> &str {
        &self.at
    }

    #[must_use]
    pub fn compared_at(&self) -> Option<&str> {
        self.compared_at.as_deref()
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed at {}", self.verdict, self.at)?;
        if let Some(site) = &self.compared_at {
            write!(f, " (compared at {site})")?;
        }
        write!(f, "; reason ~ {}", self.reason)
    }
}

impl Error for Failure {}
