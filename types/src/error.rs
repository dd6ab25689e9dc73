//! Misuse and contract errors.
//!
//! These are programming errors in the test itself, so they surface as
//! panics carrying the error's message rather than as failed verifications.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YodaError {
    /// A comparison started while the previous truth value was still unverified.
    #[error(
        "darkside you have: previous comparison was never verified, missing must() or wont() it is"
    )]
    UnverifiedComparison,

    /// A primitive was handed a value of a type it cannot judge.
    #[error("{primitive}() expects a {expected} value, found {found}")]
    ContractViolation {
        primitive: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
