//! The misuse guard.
//!
//! A comparison marks the guard pending; `must()`/`wont()` clear it. Starting
//! a comparison while the guard is pending means the previous truth was
//! thrown away unverified, which aborts the test.
//!
//! The state is thread-local. libtest runs each test on its own thread, so a
//! guard never leaks between test cases, even when they run in parallel.

use std::cell::Cell;
use std::panic::Location;

use yoda_types::YodaError;

thread_local! {
    static PENDING: Cell<bool> = const { Cell::new(false) };
}

/// Mark a comparison as in progress.
///
/// # Panics
///
/// Panics with [`YodaError::UnverifiedComparison`] if the previous comparison
/// was never verified. The guard is cleared first so a caught panic doesn't
/// wedge every later comparison.
#[track_caller]
pub fn arm() {
    if PENDING.with(|pending| pending.replace(true)) {
        release();
        tracing::warn!(at = %Location::caller(), "Unverified comparison pending, resetting guard");
        panic!("{}", YodaError::UnverifiedComparison);
    }
}

/// Clear the guard: the pending comparison has been verified.
pub fn release() {
    PENDING.with(|pending| pending.set(false));
}

#[must_use]
pub fn is_pending() -> bool {
    PENDING.with(Cell::get)
}
