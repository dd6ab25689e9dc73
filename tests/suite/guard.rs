//! Misuse guard tests

use std::thread;

use yoda::{YodaError, equal, guard, nil, panics, truth};

use crate::common::panic_message;

#[test]
fn unverified_truth_aborts_next_comparison() {
    let _ = equal(1, 1);
    let msg = panic_message(|| {
        let _ = nil(None::<u8>);
    });
    assert_eq!(msg, YodaError::UnverifiedComparison.to_string());
}

#[test]
fn guard_recovers_after_misuse() {
    let _ = truth(true);
    let _ = panic_message(|| {
        let _ = truth(true);
    });
    assert!(!guard::is_pending());
    truth(true).must();
}

#[test]
fn comparison_leaves_guard_pending_until_verified() {
    let t = equal(1, 1);
    assert!(guard::is_pending());
    t.must();
    assert!(!guard::is_pending());
}

#[test]
fn panics_primitive_can_catch_misuse() {
    let _ = truth(true);
    guard::release();
    panics(|| {
        let _ = truth(true);
        let _ = truth(true);
    })
    .must();
}

#[test]
fn each_thread_has_its_own_guard() {
    let _ = truth(true);
    let clean = thread::spawn(|| {
        truth(1 + 1 == 2).must();
        guard::is_pending()
    })
    .join()
    .expect("worker thread panicked");
    assert!(!clean);
    assert!(guard::is_pending());
    guard::release();
}
