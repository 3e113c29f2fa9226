//! Emergency alert classification tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use cbcast_service::policy::classifier::in_carrier_range;
use cbcast_service::policy::{is_emergency_alert_message, CellBroadcast};

use common::host;

fn msg(category: u32, emergency: bool) -> CellBroadcast {
    CellBroadcast {
        service_category: category,
        emergency,
    }
}

#[test]
fn intrinsic_emergency_always_wins() {
    let h = host("version: 1\n");
    assert!(is_emergency_alert_message(&msg(4370, true), &h));
    assert!(!is_emergency_alert_message(&msg(4370, false), &h));
}

#[test]
fn carrier_range_marks_gsm_messages_as_emergency() {
    let h = host(
        r#"
version: 1
device:
  carrier_emergency_ids: "4352-4354, 0x1104 ,bad"
"#,
    );
    assert!(is_emergency_alert_message(&msg(4352, false), &h));
    assert!(is_emergency_alert_message(&msg(4354, false), &h));
    assert!(is_emergency_alert_message(&msg(0x1104, false), &h));
    assert!(!is_emergency_alert_message(&msg(4355, false), &h));
}

#[test]
fn carrier_range_is_ignored_on_cdma() {
    let h = host(
        r#"
version: 1
device:
  phone_type: cdma
  carrier_emergency_ids: "4096-4100"
"#,
    );
    assert!(!is_emergency_alert_message(&msg(4097, false), &h));
    assert!(is_emergency_alert_message(&msg(4097, true), &h));
}

#[test]
fn pure_carrier_branch() {
    assert!(!in_carrier_range(50, None));
    assert!(!in_carrier_range(50, Some("")));
    assert!(in_carrier_range(50, Some("50")));
    assert!(in_carrier_range(925, Some("abc,919-928")));
    assert!(!in_carrier_range(929, Some("919-928")));
}
