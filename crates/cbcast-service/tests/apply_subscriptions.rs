//! Directive application across subscriptions.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use cbcast_core::channel::{MessageId, RanType, CHANNEL_TABLE};
use cbcast_service::apply::{configure_all, resolve_target, Role, Target};
use cbcast_service::host::{RadioControl, SubId, SubscriptionSource};
use cbcast_service::obs::ConfigMetrics;

use common::host;

#[test]
fn target_resolution_order() {
    assert_eq!(resolve_target(&[1, 2], Some(2), Some(1)), Target::Sub(2));
    assert_eq!(resolve_target(&[1, 2], None, Some(1)), Target::Sub(1));
    assert_eq!(resolve_target(&[7, 2], None, None), Target::Sub(7));
    assert_eq!(resolve_target(&[], None, None), Target::NoSim);
    // A default outside the active list still wins.
    assert_eq!(resolve_target(&[1, 2], Some(9), None), Target::Sub(9));
}

#[test]
fn multi_sim_enables_target_and_disables_others() {
    let h = host(
        r#"
version: 1
device:
  sim_country: "us"
subscriptions:
  active: [1, 2]
  default_sms: 2
"#,
    );
    let metrics = ConfigMetrics::default();
    let report = configure_all(&h, &h, &h, &metrics);

    assert_eq!(report.subs.len(), 2);
    assert_eq!(report.get(2).unwrap().role, Role::Target);
    assert_eq!(report.get(1).unwrap().role, Role::NonTarget);
    assert_eq!(report.failed(), 0);

    let target = h.radio(2).unwrap();
    assert!(target.is_listening(RanType::Gsm, 4370));
    assert!(target.is_listening(RanType::Gsm, 4383));
    assert!(target.is_listening(RanType::Cdma, 0x1000));
    assert!(target.is_listening(RanType::Gsm, 4352));
    assert!(target.is_listening(RanType::Gsm, 4379));
    assert!(!target.is_listening(RanType::Gsm, 4380));
    assert!(!target.is_listening(RanType::Gsm, 50));

    let other = h.radio(1).unwrap();
    assert!(other.snapshot().is_empty());
    assert_eq!(other.call_count(), CHANNEL_TABLE.len());

    assert_eq!(metrics.evaluations.get(&[("role", "target")]), 1);
    assert_eq!(metrics.evaluations.get(&[("role", "non_target")]), 1);
}

#[test]
fn no_sim_configures_default_radio() {
    let h = host("version: 1\n");
    let metrics = ConfigMetrics::default();
    let report = configure_all(&h, &h, &h, &metrics);

    assert_eq!(report.subs.len(), 1);
    assert_eq!(report.subs[0].sub_id, None);
    assert_eq!(report.subs[0].role, Role::NoSimDefault);
    assert_eq!(report.subs[0].attempted, CHANNEL_TABLE.len() + 3);

    let radio = h.default_recording_radio();
    assert!(radio.is_listening(RanType::Gsm, 4370));
    assert!(radio.is_listening(RanType::Gsm, 4371));
}

#[test]
fn radio_failures_do_not_stop_the_batch() {
    let h = host(
        r#"
version: 1
subscriptions:
  active: [1, 2]
  default_sms: 1
radio:
  fail_subs: [1]
"#,
    );
    let metrics = ConfigMetrics::default();
    let report = configure_all(&h, &h, &h, &metrics);

    let failed = report.get(1).unwrap();
    assert_eq!(failed.attempted, CHANNEL_TABLE.len() + 3);
    assert_eq!(failed.failed, failed.attempted);
    assert_eq!(h.radio(1).unwrap().call_count(), failed.attempted);

    // The other subscription is still configured.
    assert_eq!(report.get(2).unwrap().failed, 0);
    assert_eq!(
        metrics.directives.get(&[("ran", "gsm"), ("action", "enable"), ("outcome", "failed")]),
        8
    );
}

#[test]
fn subscription_without_radio_is_skipped() {
    let h = host(
        r#"
version: 1
subscriptions:
  active: [1, 2]
  default_sms: 1
radio:
  missing_subs: [1]
"#,
    );
    let report = configure_all(&h, &h, &h, &ConfigMetrics::default());
    assert_eq!(report.subs.len(), 1);
    assert_eq!(report.subs[0].sub_id, Some(2));
    assert_eq!(report.subs[0].role, Role::NonTarget);
}

#[test]
fn reapplying_is_idempotent() {
    let h = host(
        r#"
version: 1
device:
  sim_country: "br"
  carrier_emergency_ids: "4352-4354,4356"
subscriptions:
  active: [4]
"#,
    );
    let metrics = ConfigMetrics::default();
    configure_all(&h, &h, &h, &metrics);
    let first = h.snapshot();

    configure_all(&h, &h, &h, &metrics);
    assert_eq!(h.snapshot(), first);

    let radio = h.radio(4).unwrap();
    assert!(radio.is_listening(RanType::Gsm, 50));
    assert!(radio.is_listening(RanType::Gsm, 4356));
    assert!(radio.is_enabled(RanType::Gsm, 4352, 4354));
}

#[test]
fn non_target_with_carrier_ranges_ends_disabled() {
    let h = host(
        r#"
version: 1
device:
  carrier_emergency_ids: "4356"
subscriptions:
  active: [1, 2]
  default_sms: 1
"#,
    );
    configure_all(&h, &h, &h, &ConfigMetrics::default());

    let other = h.radio(2).unwrap();
    assert!(!other.is_listening(RanType::Gsm, 4356));
    // Enabled by the carrier block, then disabled by the table rows.
    assert!(!other.is_listening(RanType::Gsm, 4370));
    assert!(!other.is_listening(RanType::Cdma, 0x1000));
}

/// Host whose subscription service is unavailable.
struct NoSubscriptionService {
    radio: common_radio::CountingRadio,
}

mod common_radio {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{MessageId, RadioControl, RanType};

    #[derive(Default)]
    pub struct CountingRadio {
        pub calls: AtomicUsize,
    }

    impl RadioControl for CountingRadio {
        fn enable_range(&self, _start: MessageId, _end: MessageId, _ran: RanType) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            true
        }

        fn disable_range(&self, _start: MessageId, _end: MessageId, _ran: RanType) -> bool {
            self.calls.fetch_add(1, Ordering::Relaxed);
            true
        }
    }
}

impl SubscriptionSource for NoSubscriptionService {
    fn active_subscription_ids(&self) -> Option<Vec<SubId>> {
        None
    }

    fn default_sms_sub_id(&self) -> Option<SubId> {
        None
    }

    fn default_data_sub_id(&self) -> Option<SubId> {
        None
    }

    fn radio_for(&self, _sub_id: SubId) -> Option<&dyn RadioControl> {
        None
    }

    fn default_radio(&self) -> Option<&dyn RadioControl> {
        Some(&self.radio)
    }
}

#[test]
fn unavailable_subscription_service_falls_back_to_default() {
    let h = host("version: 1\n");
    let subs = NoSubscriptionService {
        radio: common_radio::CountingRadio::default(),
    };
    let report = configure_all(&h, &h, &subs, &ConfigMetrics::default());

    assert_eq!(report.subs.len(), 1);
    assert_eq!(report.subs[0].role, Role::NoSimDefault);
    assert_eq!(
        subs.radio.calls.load(std::sync::atomic::Ordering::Relaxed),
        CHANNEL_TABLE.len() + 3
    );
}
