//! Comparison primitive tests

use std::ptr;
use std::rc::Rc;
use std::sync::{Arc, Weak};

use yoda::{
    ByValue, Maybe, Nilable, all, equal, guard, nil, panics, same, text, truth, type_is,
};

use crate::common::{Example, Nothing, panic_message};

#[test]
fn equal_holds_for_identical_values() {
    equal(2, 1 + 1).must();
    equal(Example { value: 7 }, Example { value: 7 }).must();
    equal(vec![vec![1, 2], vec![3]], vec![vec![1, 2], vec![3]]).must();
    equal((1, "a", 'c'), (1, "a", 'c')).must();
}

#[test]
fn equal_fails_for_distinct_values() {
    equal(2, 3).wont();
    equal(Example { value: 1 }, Example { value: 2 }).wont();
    equal(vec![1, 2], vec![2, 1]).wont();
    equal(None::<i32>, Some(1)).wont();
}

#[test]
fn equal_across_borrowed_and_owned() {
    equal("hupsis", String::from("hupsis")).must();
    equal(String::from("a"), "b").wont();
}

#[test]
fn equal_diff_disabled_for_single_line_renders() {
    let t = equal(1, 2);
    guard::release();
    assert!(!t.dump().contains('\n'));
}

#[test]
fn nil_only_for_absence() {
    nil(None::<Example>).must();
    nil(Some(Example { value: 0 })).wont();
    nil(0).wont();
    nil(String::new()).wont();
    nil(ptr::null_mut::<Example>()).must();
}

#[test]
fn nil_judges_any_wrapped_value_present() {
    let example = ByValue(Example { value: 1 });
    nil(&example).wont();
    nil(ByValue(Example { value: 2 })).wont();
    nil(ByValue(Nothing)).wont();
    let erased: Box<dyn Nilable> = Box::new(example);
    nil(erased).wont();
}

#[test]
fn nil_sees_through_type_erasure() {
    let slot: Box<dyn Nilable> = Box::new(None::<&Example>);
    nil(slot).must();
    let slot: Box<dyn Nilable> = Box::new(Some(1));
    nil(slot).wont();
    let shared: Rc<Option<u8>> = Rc::new(None);
    nil(&shared).must();
}

#[test]
fn nil_for_dropped_weak() {
    let strong = Arc::new(Example { value: 1 });
    let weak: Weak<Example> = Arc::downgrade(&strong);
    nil(weak.clone()).wont();
    drop(strong);
    nil(weak).must();
}

#[test]
fn panics_distinguishes_return_from_unwind() {
    panics(|| {}).wont();
    panics(|| panic!("now")).must();
    panics(|| {
        let v: Vec<u8> = Vec::new();
        v[3]
    })
    .must();
}

#[test]
fn panics_has_empty_diagnostic() {
    let t = panics(|| {});
    guard::release();
    assert_eq!(t.dump(), "");
}

#[test]
fn same_by_value_is_deep_equality() {
    let x = 4;
    same(x, x).must();
    same(ByValue(Example { value: 1 }), ByValue(Example { value: 1 })).must();
    same(ByValue(Example { value: 1 }), ByValue(Example { value: 2 })).wont();
    same(ByValue(Nothing), ByValue(Nothing)).must();
}

#[test]
fn same_by_reference_needs_identity() {
    let fresh = Box::new(Example { value: 1 });
    let copy = fresh.clone();
    equal(&*fresh, &*copy).must();
    same(&*fresh, &*copy).wont();
    same(&*fresh, &*fresh).must();
    same(fresh, copy).wont();
}

#[test]
fn same_for_zero_sized_boxes() {
    same(Box::new(Nothing), Box::new(Nothing)).must();
}

#[test]
fn same_dump_is_actual() {
    let t = same(1, 2);
    guard::release();
    assert_eq!(t.dump(), "2");
}

#[test]
fn text_compares_renderings() {
    text(2, "2").must();
    text("2", 2).must();
    text(2.5, "2.5").must();
    text("2", 1).wont();
}

#[test]
fn text_nil_is_symmetric() {
    text(Maybe::<i32>(None), "<nil>").must();
    text("<nil>", Maybe::<i32>(None)).must();
    text(Maybe(Some(2)), 2).must();
}

#[test]
fn truth_is_a_type_checked_assertion() {
    truth(true).must();
    truth(false).wont();
    let msg = panic_message(|| {
        let _ = truth("true");
    });
    assert_eq!(msg, "truth() expects a bool value, found &str");
    truth(1 < 2).must();
}

#[test]
fn type_is_uses_runtime_type_names() {
    type_is("i32", &2).must();
    type_is("&str", &"x").must();
    type_is("alloc::vec::Vec<u8>", &Vec::<u8>::new()).must();
    type_is("String", &String::new()).wont();
}

#[test]
fn all_over_unsigned_and_signed() {
    all(|x: u32| u64::from(x) <= u64::from(u32::MAX)).must();
    all(|x: i32| x >= 0).wont();
}

#[test]
fn all_reports_counterexample() {
    let t = all(|x: u16| x < 1000);
    guard::release();
    assert!(!t.value());
    assert!(t.dump().contains("minimal failing input"), "{}", t.dump());
    assert!(t.dump().contains("1000"), "{}", t.dump());
}

#[test]
fn all_lets_a_panicking_property_reach_the_test() {
    let msg = panic_message(|| {
        let _ = all(|x: u8| -> bool { panic!("boom at {x}") });
    });
    assert!(msg.starts_with("boom at "), "{msg}");
    assert!(!guard::is_pending());
    truth(true).must();
}

#[test]
fn all_aborts_on_unverified_comparison_in_property() {
    let msg = panic_message(|| {
        let _ = all(|x: u8| {
            let _ = equal(x, x);
            true
        });
    });
    assert!(msg.contains("missing must() or wont()"), "{msg}");
    assert!(!guard::is_pending());
}

#[test]
fn all_property_may_verify_inside() {
    all(|a: u8, b: u8| {
        equal(a.wrapping_add(b), b.wrapping_add(a)).must();
        true
    })
    .must();
}
