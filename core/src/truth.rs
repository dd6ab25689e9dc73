//! The truth value and its must/wont gate.

use yoda_config::settings;
use yoda_types::{Failure, Origin, Verdict};
use yoda_utils::{relative_to_cwd, truncate_with_ellipsis};

use crate::guard;
use crate::harness::{Harness, Libtest};

/// The outcome of one comparison, with a diagnostic describing what was compared.
///
/// A `Truth` is inert until verified: [`Truth::must`] fails the test when the
/// outcome is false, [`Truth::wont`] when it is true. Verification consumes
/// the value, and the next comparison refuses to start until it happens.
#[must_use = "a Truth checks nothing until `must()` or `wont()` is called"]
#[derive(Debug, PartialEq, Eq)]
pub struct Truth {
    value: bool,
    dump: String,
    origin: Origin,
}

impl Truth {
    pub(crate) fn new(value: bool, dump: String, origin: Origin) -> Self {
        Self {
            value,
            dump,
            origin,
        }
    }

    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    #[must_use]
    pub fn dump(&self) -> &str {
        &self.dump
    }

    /// Where the comparison that produced this truth was called.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Fail the current test unless the outcome is true.
    #[track_caller]
    pub fn must(self) {
        self.verify(Verdict::Must, &Libtest, Origin::caller());
    }

    /// Fail the current test unless the outcome is false.
    #[track_caller]
    pub fn wont(self) {
        self.verify(Verdict::Wont, &Libtest, Origin::caller());
    }

    /// Like [`Truth::must`], reporting to `harness`.
    #[track_caller]
    pub fn must_in<H: Harness + ?Sized>(self, harness: &H) {
        self.verify(Verdict::Must, harness, Origin::caller());
    }

    /// Like [`Truth::wont`], reporting to `harness`.
    #[track_caller]
    pub fn wont_in<H: Harness + ?Sized>(self, harness: &H) {
        self.verify(Verdict::Wont, harness, Origin::caller());
    }

    #[track_caller]
    fn verify<H: Harness + ?Sized>(self, verdict: Verdict, harness: &H, at: Origin) {
        // Cleared before judging so a failed verification can't also trip the
        // guard on a later, unrelated comparison.
        guard::release();
        if verdict.accepts(self.value) {
            return;
        }
        let failure = self.failure(verdict, at);
        tracing::debug!(%verdict, at = failure.at(), "Verification failed");
        harness.fatal(&failure)
    }

    fn failure(&self, verdict: Verdict, at: Origin) -> Failure {
        let reason = truncate_with_ellipsis(&self.dump, settings().dump_limit);
        let failure = Failure::new(verdict, render(at), reason);
        if self.origin.same_line(at) {
            failure
        } else {
            failure.with_comparison_site(render(self.origin))
        }
    }
}

fn render(origin: Origin) -> String {
    format!(
        "{}:{}:{}",
        relative_to_cwd(origin.file()),
        origin.line(),
        origin.column()
    )
}
