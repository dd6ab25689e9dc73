use yoda_types::Failure;

/// The test framework a failed verification reports to.
///
/// `fatal` records the failure and ends the current test case; it never
/// returns, so a failed `must()`/`wont()` can't fall through into the rest
/// of the test.
pub trait Harness {
    fn fatal(&self, failure: &Failure) -> !;
}

/// The built-in test harness: a failure panics, which fails only the
/// current `#[test]` and lets the rest of the run continue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Libtest;

impl Harness for Libtest {
    #[track_caller]
    fn fatal(&self, failure: &Failure) -> ! {
        panic!("{failure}")
    }
}

impl<H: Harness + ?Sized> Harness for &H {
    #[track_caller]
    fn fatal(&self, failure: &Failure) -> ! {
        (**self).fatal(failure)
    }
}
