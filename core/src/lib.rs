//! Comparison primitives and the must/wont verification gate.
//!
//! Every primitive returns an inert [`Truth`]; nothing fails until the test
//! decides how that truth must be judged:
//!
//! ```
//! use yoda_core::{equal, truth};
//!
//! equal(2, 1 + 1).must();
//! truth(3 < 2).wont();
//! ```
//!
//! A [`guard`] enforces that every truth is verified before the next
//! comparison starts, so an assertion can't be silently dropped.

mod compare;
pub mod guard;
mod harness;
mod identity;
mod nilable;
mod property;
mod truth;

pub use compare::{equal, nil, panics, same, text, truth, type_is};
pub use harness::{Harness, Libtest};
pub use identity::{ByValue, Identity};
pub use nilable::Nilable;
pub use property::{Property, all};
pub use truth::Truth;
