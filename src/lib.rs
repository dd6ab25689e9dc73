//! Terse must/wont assertions for tests.
//!
//! Compute a truth, then say whether it must or won't hold:
//!
//! ```
//! use yoda::{all, equal, nil, panics, text, truth};
//!
//! equal(2, 1 + 1).must();
//! truth(3 < 2).wont();
//! nil(None::<u8>).must();
//! text("2", 2).must();
//! panics(|| panic!("darkside")).must();
//! all(|x: u64| x.checked_mul(0) == Some(0)).must();
//! ```
//!
//! A truth that is never verified is caught: the next comparison on the same
//! test aborts instead of letting the assertion slip by.

pub use yoda_config::{Settings, settings};
pub use yoda_core::{
    ByValue, Harness, Identity, Libtest, Nilable, Property, Truth, all, equal, guard, nil, panics,
    same, text, truth, type_is,
};
pub use yoda_types::{Failure, Maybe, Origin, Verdict, YodaError};

