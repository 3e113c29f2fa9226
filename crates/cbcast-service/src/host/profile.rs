//! Host backed by a loaded `DeviceProfile`, with in-memory radios.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde::Serialize;

use cbcast_core::channel::ids::CARRIER_EMERGENCY_IDS_PROPERTY;
use cbcast_core::channel::{ChannelRange, MessageId, RanType};

use super::{DeviceIdentity, PhoneType, PreferenceSource, RadioControl, SubId, SubscriptionSource};
use crate::config::DeviceProfile;

/// Radio that records which exact ranges are currently enabled.
///
/// Enable inserts, disable removes; repeating either is a no-op.
#[derive(Debug, Default)]
pub struct RecordingRadio {
    enabled: Mutex<BTreeSet<(RanType, ChannelRange)>>,
    calls: AtomicUsize,
    fail: bool,
}

/// One enabled range, as printed by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnabledRange {
    pub ran: RanType,
    pub start: MessageId,
    pub end: MessageId,
}

impl RecordingRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Radio that rejects every call and never changes state.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, ran: RanType, start: MessageId, end: MessageId) -> bool {
        let Ok(range) = ChannelRange::new(start, end) else {
            return false;
        };
        self.lock_enabled().contains(&(ran, range))
    }

    /// Whether any enabled range covers `id`.
    pub fn is_listening(&self, ran: RanType, id: MessageId) -> bool {
        self.lock_enabled()
            .iter()
            .any(|(r, range)| *r == ran && range.contains(id))
    }

    pub fn snapshot(&self) -> Vec<EnabledRange> {
        self.lock_enabled()
            .iter()
            .map(|(ran, range)| EnabledRange {
                ran: *ran,
                start: range.start(),
                end: range.end(),
            })
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn lock_enabled(&self) -> std::sync::MutexGuard<'_, BTreeSet<(RanType, ChannelRange)>> {
        match self.enabled.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn set(&self, start: MessageId, end: MessageId, ran: RanType, enable: bool) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail {
            return false;
        }
        let Ok(range) = ChannelRange::new(start, end) else {
            return false;
        };
        let mut enabled = self.lock_enabled();
        if enable {
            enabled.insert((ran, range));
        } else {
            enabled.remove(&(ran, range));
        }
        true
    }
}

impl RadioControl for RecordingRadio {
    fn enable_range(&self, start: MessageId, end: MessageId, ran: RanType) -> bool {
        self.set(start, end, ran, true)
    }

    fn disable_range(&self, start: MessageId, end: MessageId, ran: RanType) -> bool {
        self.set(start, end, ran, false)
    }
}

/// Preferences, identity and subscriptions from a device profile.
#[derive(Debug)]
pub struct ProfileHost {
    preferences: BTreeMap<String, bool>,
    phone_type: PhoneType,
    sim_country: Option<String>,
    network_country: Option<String>,
    show_brazil_settings: bool,
    force_disable_test: bool,
    properties: BTreeMap<String, String>,
    active: Vec<SubId>,
    default_sms: Option<SubId>,
    default_data: Option<SubId>,
    radios: BTreeMap<SubId, RecordingRadio>,
    default_radio: RecordingRadio,
}

impl ProfileHost {
    pub fn from_profile(profile: &DeviceProfile) -> Self {
        let device = &profile.device;
        let subs = &profile.subscriptions;

        let mut properties = BTreeMap::new();
        if let Some(ids) = &device.carrier_emergency_ids {
            properties.insert(CARRIER_EMERGENCY_IDS_PROPERTY.to_string(), ids.clone());
        }

        let radios = subs
            .active
            .iter()
            .filter(|&&id| !profile.radio.missing_subs.contains(&id))
            .map(|&id| {
                let radio = if profile.radio.fail_subs.contains(&id) {
                    RecordingRadio::failing()
                } else {
                    RecordingRadio::new()
                };
                (id, radio)
            })
            .collect();

        let default_radio = if profile.radio.fail_default {
            RecordingRadio::failing()
        } else {
            RecordingRadio::new()
        };

        Self {
            preferences: profile.preferences.clone(),
            phone_type: device.phone_type,
            sim_country: device.sim_country.clone(),
            network_country: device.network_country.clone(),
            show_brazil_settings: device.show_brazil_settings,
            force_disable_test: device.force_disable_etws_cmas_test,
            properties,
            active: subs.active.clone(),
            default_sms: subs.default_sms,
            default_data: subs.default_data,
            radios,
            default_radio,
        }
    }

    /// Recording radio for a subscription (for inspection).
    pub fn radio(&self, sub_id: SubId) -> Option<&RecordingRadio> {
        self.radios.get(&sub_id)
    }

    pub fn default_recording_radio(&self) -> &RecordingRadio {
        &self.default_radio
    }

    /// Enabled ranges per radio, keyed by sub id (`"default"` for no-SIM).
    pub fn snapshot(&self) -> BTreeMap<String, Vec<EnabledRange>> {
        let mut out: BTreeMap<String, Vec<EnabledRange>> = self
            .radios
            .iter()
            .map(|(id, radio)| (id.to_string(), radio.snapshot()))
            .collect();
        out.insert("default".to_string(), self.default_radio.snapshot());
        out
    }
}

impl PreferenceSource for ProfileHost {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.preferences.get(key).copied().unwrap_or(default)
    }
}

impl DeviceIdentity for ProfileHost {
    fn sim_country_iso(&self) -> Option<String> {
        self.sim_country.clone()
    }

    fn network_country_iso(&self) -> Option<String> {
        self.network_country.clone()
    }

    fn phone_type(&self) -> PhoneType {
        self.phone_type
    }

    fn show_brazil_settings(&self) -> bool {
        self.show_brazil_settings
    }

    fn etws_cmas_test_forced_disabled(&self) -> bool {
        self.force_disable_test
    }

    fn system_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

impl SubscriptionSource for ProfileHost {
    fn active_subscription_ids(&self) -> Option<Vec<SubId>> {
        Some(self.active.clone())
    }

    fn default_sms_sub_id(&self) -> Option<SubId> {
        self.default_sms
    }

    fn default_data_sub_id(&self) -> Option<SubId> {
        self.default_data
    }

    fn radio_for(&self, sub_id: SubId) -> Option<&dyn RadioControl> {
        self.radios.get(&sub_id).map(|r| r as &dyn RadioControl)
    }

    fn default_radio(&self) -> Option<&dyn RadioControl> {
        Some(&self.default_radio)
    }
}
