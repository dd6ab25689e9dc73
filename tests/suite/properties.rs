//! Property tests: the primitives' own laws hold for arbitrary inputs.

use proptest::collection::vec;
use proptest::prelude::{any, prop_assume, proptest};
use yoda::{Maybe, equal, nil, same, text};

#[derive(Debug, Clone, PartialEq)]
struct Record {
    id: u32,
    tags: Vec<String>,
}

proptest! {
    #[test]
    fn equal_is_reflexive(values in vec(any::<i64>(), 0..16), label in ".*") {
        equal(values.clone(), values).must();
        equal(label.clone(), label).must();
    }

    #[test]
    fn equal_is_reflexive_for_records(id in any::<u32>(), tags in vec(".{0,8}", 0..4)) {
        let record = Record { id, tags };
        equal(record.clone(), record).must();
    }

    #[test]
    fn equal_rejects_distinct_values(a in vec(any::<u8>(), 0..8), b in vec(any::<u8>(), 0..8)) {
        prop_assume!(a != b);
        equal(a, b).wont();
    }

    #[test]
    fn same_by_value_matches_equality(a in any::<i32>(), b in any::<i32>()) {
        let expected = a == b;
        let t = same(a, b);
        if expected { t.must() } else { t.wont() }
    }

    #[test]
    fn text_is_symmetric(n in any::<i64>()) {
        text(n, n.to_string()).must();
        text(n.to_string(), n).must();
    }

    #[test]
    fn text_of_present_maybe_matches_inner(n in any::<u16>()) {
        text(Maybe(Some(n)), n).must();
    }

    #[test]
    fn present_values_are_never_nil(n in any::<u64>()) {
        nil(Some(n)).wont();
        nil(n).wont();
    }
}
