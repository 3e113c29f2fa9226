//! Carrier range vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

use cbcast_core::channel::range::decode_int;
use cbcast_core::channel::{parse_carrier_ranges, parse_range_element, ChannelRange};
use cbcast_core::error::ErrorCode;

#[derive(Debug, Deserialize)]
struct RangeVector {
    description: String,
    input: String,
    expect: Vec<(u32, u32)>,
}

fn load(name: &str) -> Vec<RangeVector> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn carrier_range_vectors() {
    for v in load("carrier_ranges.json") {
        let got: Vec<(u32, u32)> = parse_carrier_ranges(&v.input)
            .iter()
            .map(|r| (r.start(), r.end()))
            .collect();
        assert_eq!(got, v.expect, "vector={}", v.description);
    }
}

#[test]
fn singleton_and_interval_shapes() {
    for (a, b) in [(0u32, 0u32), (50, 50), (919, 928), (4352, 4354), (4096, 65535)] {
        let text = format!("{a}-{b}");
        assert_eq!(
            parse_carrier_ranges(&text),
            vec![ChannelRange::new(a, b).unwrap()],
            "text={text}"
        );
        assert_eq!(parse_carrier_ranges(&a.to_string()), vec![ChannelRange::single(a)]);
    }
}

#[test]
fn strict_element_reports_invalid_range() {
    let err = parse_range_element("abc").expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::InvalidRange);
    assert_eq!(err.code().as_str(), "INVALID_RANGE");

    let err = parse_range_element("10-5").expect_err("inverted must fail");
    assert_eq!(err.code(), ErrorCode::InvalidRange);

    let ok = parse_range_element(" 0x1100-0x1102 ").unwrap();
    assert_eq!((ok.start(), ok.end()), (4352, 4354));
}

#[test]
fn decode_int_literal_forms() {
    assert_eq!(decode_int("4370").unwrap(), 4370);
    assert_eq!(decode_int("0x1112").unwrap(), 4370);
    assert_eq!(decode_int("#1112").unwrap(), 4370);
    assert_eq!(decode_int("010422").unwrap(), 4370);
    assert_eq!(decode_int("-0").unwrap(), 0);
    assert!(decode_int("").is_err());
    assert!(decode_int("0x").is_err());
    assert!(decode_int("0x+5").is_err());
    assert!(decode_int("-7").is_err());
    assert!(decode_int("12a").is_err());
}

#[test]
fn range_contains_is_inclusive() {
    let r = ChannelRange::new(919, 928).unwrap();
    assert!(r.contains(919));
    assert!(r.contains(928));
    assert!(!r.contains(918));
    assert!(!r.contains(929));
    assert_eq!(r.to_string(), "919-928");
    assert_eq!(ChannelRange::single(50).to_string(), "50");
}
