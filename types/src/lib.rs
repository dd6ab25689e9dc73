//! Core domain types for yoda.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! the must/wont verdict, captured source locations, the failure report a
//! verification produces, and the error taxonomy for misuse.

mod error;
mod failure;
mod maybe;
mod origin;

pub use error::YodaError;
pub use failure::Failure;
pub use maybe::Maybe;
pub use origin::Origin;

use std::fmt;

// ============================================================================
// Verdict
// ============================================================================

/// The expectation a verification call holds a truth value against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The outcome must be `true`.
    Must,
    /// The outcome must be `false`.
    Wont,
}

impl Verdict {
    /// The outcome this verdict accepts.
    #[must_use]
    pub const fn expects(self) -> bool {
        matches!(self, Verdict::Must)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verdict::Must => "Must",
            Verdict::Wont => "Wont",
        }
    }

    /// Whether `outcome` satisfies this verdict.
    #[must_use]
    pub const fn accepts(self, outcome: bool) -> bool {
        self.expects() == outcome
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
