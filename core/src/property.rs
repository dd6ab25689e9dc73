//! Randomized property checks for `all()`.
//!
//! A property is any `Fn(A, ..) -> bool` whose arguments proptest can
//! generate. `all()` feeds it random inputs and reports the first
//! (shrunk) counterexample.

use std::any::Any;
use std::cell::Cell;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use proptest::arbitrary::{Arbitrary, any};
use proptest::test_runner::{Config, TestCaseError, TestCaseResult, TestError, TestRunner};
use yoda_config::settings;
use yoda_types::Origin;

use crate::guard;
use crate::truth::Truth;

/// A predicate over randomly generated arguments.
///
/// Implemented for closures and functions of one to four arguments.
pub trait Property<Args> {
    /// Search for a counterexample, describing it if one is found.
    ///
    /// # Panics
    ///
    /// Re-raises the first panic out of the property once the runner stops.
    fn falsify(&self, runner: &mut TestRunner) -> Result<(), String>;
}

/// Panic payload held back from the runner.
type Escaped = Cell<Option<Box<dyn Any + Send>>>;

/// Runs one trial. A panic is not a counterexample: it is stashed and every
/// later trial fails without running, so the runner winds down quickly.
fn trial(escaped: &Escaped, check: impl FnOnce() -> bool) -> TestCaseResult {
    if let Some(payload) = escaped.take() {
        escaped.set(Some(payload));
        return Err(TestCaseError::fail("property panicked"));
    }
    match panic::catch_unwind(AssertUnwindSafe(check)) {
        Ok(true) => Ok(()),
        Ok(false) => Err(TestCaseError::fail("property returned false")),
        Err(payload) => {
            escaped.set(Some(payload));
            Err(TestCaseError::fail("property panicked"))
        }
    }
}

fn settle<V: Debug>(result: Result<(), TestError<V>>, escaped: Escaped) -> Result<(), String> {
    if let Some(payload) = escaped.into_inner() {
        guard::release();
        panic::resume_unwind(payload);
    }
    result.map_err(|e| e.to_string())
}

impl<F, A> Property<(A,)> for F
where
    F: Fn(A) -> bool,
    A: Arbitrary,
{
    fn falsify(&self, runner: &mut TestRunner) -> Result<(), String> {
        let escaped = Escaped::default();
        let result = runner.run(&any::<A>(), |a| trial(&escaped, || self(a)));
        settle(result, escaped)
    }
}

macro_rules! impl_property {
    ($($ty:ident $arg:ident),+) => {
        impl<F, $($ty),+> Property<($($ty,)+)> for F
        where
            F: Fn($($ty),+) -> bool,
            $($ty: Arbitrary,)+
        {
            fn falsify(&self, runner: &mut TestRunner) -> Result<(), String> {
                let escaped = Escaped::default();
                let result = runner.run(&any::<($($ty,)+)>(), |($($arg,)+)| {
                    trial(&escaped, || self($($arg),+))
                });
                settle(result, escaped)
            }
        }
    };
}

impl_property!(A a, B b);
impl_property!(A a, B b, C c);
impl_property!(A a, B b, C c, D d);

/// Compares that `property` holds for every randomly generated input.
///
/// Runs `YODA_PROPERTY_CASES` trials (100 by default). The property runs
/// with the guard cleared, so it may verify comparisons of its own; leaving
/// one unverified is reported as misuse.
///
/// # Panics
///
/// A panic inside the property is not a counterexample. It reaches the test
/// unchanged once the run stops.
#[track_caller]
pub fn all<Args, P: Property<Args>>(property: P) -> Truth {
    guard::arm();
    let origin = Origin::caller();
    guard::release();
    let cases = settings().property_cases;
    let mut runner = TestRunner::new(Config {
        cases,
        failure_persistence: None,
        ..Config::default()
    });
    let outcome = property.falsify(&mut runner);
    guard::arm();
    let (value, dump) = match outcome {
        Ok(()) => (true, format!("try passed {cases} cases")),
        Err(counterexample) => (false, format!("try {counterexample}")),
    };
    tracing::trace!(primitive = "all", value, "Comparison evaluated");
    Truth::new(value, dump, origin)
}
