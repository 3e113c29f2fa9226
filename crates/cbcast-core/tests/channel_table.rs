//! Standard channel table tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cbcast_core::channel::{AlertClass, RanType, CHANNEL_TABLE, PRESIDENTIAL_CHANNELS};

fn rows(class: AlertClass) -> Vec<(RanType, u32, u32)> {
    CHANNEL_TABLE
        .iter()
        .filter(|e| e.class == class)
        .map(|e| (e.ran, e.range.start(), e.range.end()))
        .collect()
}

#[test]
fn table_matches_3gpp_assignments() {
    assert_eq!(rows(AlertClass::Etws), vec![(RanType::Gsm, 4352, 4354)]);
    assert_eq!(
        rows(AlertClass::Presidential),
        vec![
            (RanType::Gsm, 4370, 4370),
            (RanType::Gsm, 4383, 4383),
            (RanType::Cdma, 0x1000, 0x1000),
        ]
    );
    assert_eq!(
        rows(AlertClass::CmasExtreme),
        vec![(RanType::Gsm, 4371, 4372), (RanType::Cdma, 0x1001, 0x1001)]
    );
    assert_eq!(
        rows(AlertClass::CmasSevere),
        vec![(RanType::Gsm, 4373, 4378), (RanType::Cdma, 0x1002, 0x1002)]
    );
    assert_eq!(
        rows(AlertClass::CmasAmber),
        vec![(RanType::Gsm, 4379, 4379), (RanType::Cdma, 0x1003, 0x1003)]
    );
    assert_eq!(rows(AlertClass::EtwsTest), vec![(RanType::Gsm, 4355, 4355)]);
    assert_eq!(
        rows(AlertClass::CmasTest),
        vec![
            (RanType::Gsm, 4380, 4382),
            (RanType::Gsm, 4393, 4395),
            (RanType::Cdma, 0x1004, 0x1004),
        ]
    );
    assert_eq!(rows(AlertClass::Channel50), vec![(RanType::Gsm, 50, 50)]);
    assert_eq!(rows(AlertClass::CountrySpecific), vec![(RanType::Gsm, 919, 928)]);
}

#[test]
fn presidential_channels_mirror_table_rows() {
    let from_table: Vec<_> = CHANNEL_TABLE
        .iter()
        .filter(|e| e.class == AlertClass::Presidential)
        .map(|e| (e.ran, e.range))
        .collect();
    assert_eq!(from_table, PRESIDENTIAL_CHANNELS.to_vec());
}
