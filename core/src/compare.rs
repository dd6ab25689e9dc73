//! The comparison primitives.
//!
//! Each one arms the guard before anything else, evaluates its comparison,
//! and returns an unverified [`Truth`].

use std::any::{Any, type_name};
use std::fmt::{Debug, Display};
use std::panic::{self, AssertUnwindSafe};

use yoda_config::settings;
use yoda_types::{Origin, YodaError};
use yoda_utils::format_line_diff;

use crate::guard;
use crate::identity::Identity;
use crate::nilable::Nilable;
use crate::truth::Truth;

fn judged(primitive: &'static str, value: bool, dump: String, origin: Origin) -> Truth {
    tracing::trace!(primitive, value, "Comparison evaluated");
    Truth::new(value, dump, origin)
}

/// Compares that `expected` and `actual` are deeply equal.
///
/// When they differ and their pretty renders span several lines, the
/// diagnostic ends with a line diff of those renders (unless `YODA_DIFF=off`).
#[track_caller]
pub fn equal<E, A>(expected: E, actual: A) -> Truth
where
    E: PartialEq<A> + Debug,
    A: Debug,
{
    guard::arm();
    let origin = Origin::caller();
    let value = expected == actual;
    let mut dump = format!("{expected:?} vs. {actual:?}");
    if !value && settings().diff {
        let (left, right) = (format!("{expected:#?}"), format!("{actual:#?}"));
        if left.contains('\n') || right.contains('\n') {
            dump.push('\n');
            dump.push_str(&format_line_diff(&left, &right));
        }
    }
    judged("equal", value, dump, origin)
}

/// Determines whether `actual` is absent: `None`, a null pointer, a dropped
/// weak reference, or any of those behind a reference or smart pointer.
///
/// A panicking [`Nilable::is_nil`] is contained and judged not nil.
#[track_caller]
pub fn nil<T: Nilable>(actual: T) -> Truth {
    guard::arm();
    let origin = Origin::caller();
    let value = panic::catch_unwind(AssertUnwindSafe(|| actual.is_nil())).unwrap_or_else(|_| {
        tracing::warn!(
            type_name = type_name::<T>(),
            "Nil check panicked, treating value as present"
        );
        false
    });
    judged("nil", value, format!("{actual:?}"), origin)
}

/// Determines whether calling `function` panics.
///
/// The function runs with the guard cleared, so it may make and verify its
/// own comparisons. Returning normally with one of them still unverified is
/// reported as misuse.
#[track_caller]
pub fn panics<F, R>(function: F) -> Truth
where
    F: FnOnce() -> R,
{
    guard::arm();
    let origin = Origin::caller();
    guard::release();
    let value = panic::catch_unwind(AssertUnwindSafe(function)).is_err();
    if value {
        // unwinding may have skipped the callee's own verification
        guard::release();
    }
    guard::arm();
    judged("panics", value, String::new(), origin)
}

/// Compares that `expected` and `actual` are the same: they point at the
/// same address and are deeply equal.
///
/// Plain values carry no address, so for them this is deep equality alone.
#[track_caller]
pub fn same<T>(expected: T, actual: T) -> Truth
where
    T: Identity + PartialEq + Debug,
{
    guard::arm();
    let origin = Origin::caller();
    let value = expected.address() == actual.address() && expected == actual;
    judged("same", value, format!("{actual:?}"), origin)
}

/// Compares that `expected` and `actual` display as the same text.
#[track_caller]
pub fn text<E, A>(expected: E, actual: A) -> Truth
where
    E: Display + Debug,
    A: Display + Debug,
{
    guard::arm();
    let origin = Origin::caller();
    let value = expected.to_string() == actual.to_string();
    judged("text", value, format!("{expected:?} vs. {actual:?}"), origin)
}

/// Takes `actual` as the outcome; it must be a `bool`.
///
/// # Panics
///
/// Panics with [`YodaError::ContractViolation`] for any other type. The
/// guard is cleared first, so the test can go on after catching it.
#[track_caller]
pub fn truth<T: Any + Debug>(actual: T) -> Truth {
    guard::arm();
    let origin = Origin::caller();
    let Some(&value) = (&actual as &dyn Any).downcast_ref::<bool>() else {
        guard::release();
        let err = YodaError::ContractViolation {
            primitive: "truth",
            expected: "bool",
            found: type_name::<T>(),
        };
        tracing::warn!(%err, "Wrong primitive for value");
        panic!("{err}");
    };
    judged("truth", value, format!("{actual:?}"), origin)
}

/// Compares the type name of `actual` against `expected`.
///
/// Names are those of [`std::any::type_name`], e.g. `alloc::string::String`
/// or `&str`.
#[track_caller]
pub fn type_is<T: ?Sized>(expected: &str, _actual: &T) -> Truth {
    guard::arm();
    let origin = Origin::caller();
    let actual_name = type_name::<T>();
    judged(
        "type_is",
        expected == actual_name,
        format!("{expected:?} vs. {actual_name:?}"),
        origin,
    )
}
