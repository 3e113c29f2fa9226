//! Evaluation inputs read fresh from the host on every pass.

use crate::host::{DeviceIdentity, PhoneType, PreferenceSource};
use cbcast_core::channel::ids::CARRIER_EMERGENCY_IDS_PROPERTY;

/// Preference keys, as stored by the settings screen.
pub mod keys {
    pub const ENABLE_EMERGENCY_ALERTS: &str = "enable_emergency_alerts";
    pub const ENABLE_CMAS_EXTREME_THREAT_ALERTS: &str = "enable_cmas_extreme_threat_alerts";
    pub const ENABLE_CMAS_SEVERE_THREAT_ALERTS: &str = "enable_cmas_severe_threat_alerts";
    pub const ENABLE_CMAS_AMBER_ALERTS: &str = "enable_cmas_amber_alerts";
    pub const ENABLE_ETWS_TEST_ALERTS: &str = "enable_etws_test_alerts";
    pub const ENABLE_CMAS_TEST_ALERTS: &str = "enable_cmas_test_alerts";
    pub const ENABLE_CHANNEL_50_ALERTS: &str = "enable_channel_50_alerts";

    pub const ALL: [&str; 7] = [
        ENABLE_EMERGENCY_ALERTS,
        ENABLE_CMAS_EXTREME_THREAT_ALERTS,
        ENABLE_CMAS_SEVERE_THREAT_ALERTS,
        ENABLE_CMAS_AMBER_ALERTS,
        ENABLE_ETWS_TEST_ALERTS,
        ENABLE_CMAS_TEST_ALERTS,
        ENABLE_CHANNEL_50_ALERTS,
    ];
}

/// User preferences plus the device-level test override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceSet {
    pub emergency_alerts: bool,
    pub cmas_extreme: bool,
    pub cmas_severe: bool,
    pub cmas_amber: bool,
    pub etws_test: bool,
    pub cmas_test: bool,
    pub channel_50: bool,
    pub tests_force_disabled: bool,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            emergency_alerts: true,
            cmas_extreme: true,
            cmas_severe: true,
            cmas_amber: true,
            etws_test: false,
            cmas_test: false,
            channel_50: true,
            tests_force_disabled: false,
        }
    }
}

impl PreferenceSet {
    pub fn read(prefs: &dyn PreferenceSource, device: &dyn DeviceIdentity) -> Self {
        let d = Self::default();
        Self {
            emergency_alerts: prefs.get_bool(keys::ENABLE_EMERGENCY_ALERTS, d.emergency_alerts),
            cmas_extreme: prefs.get_bool(keys::ENABLE_CMAS_EXTREME_THREAT_ALERTS, d.cmas_extreme),
            cmas_severe: prefs.get_bool(keys::ENABLE_CMAS_SEVERE_THREAT_ALERTS, d.cmas_severe),
            cmas_amber: prefs.get_bool(keys::ENABLE_CMAS_AMBER_ALERTS, d.cmas_amber),
            etws_test: prefs.get_bool(keys::ENABLE_ETWS_TEST_ALERTS, d.etws_test),
            cmas_test: prefs.get_bool(keys::ENABLE_CMAS_TEST_ALERTS, d.cmas_test),
            channel_50: prefs.get_bool(keys::ENABLE_CHANNEL_50_ALERTS, d.channel_50),
            tests_force_disabled: device.etws_cmas_test_forced_disabled(),
        }
    }
}

/// Country and technology identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityContext {
    pub sim_country: Option<String>,
    pub network_country: Option<String>,
    pub phone_type: PhoneType,
    pub show_brazil_settings: bool,
}

impl IdentityContext {
    pub fn read(device: &dyn DeviceIdentity) -> Self {
        Self {
            sim_country: device.sim_country_iso(),
            network_country: device.network_country_iso(),
            phone_type: device.phone_type(),
            show_brazil_settings: device.show_brazil_settings(),
        }
    }

    /// Exact, case-sensitive match on the SIM country.
    pub fn sim_country_is(&self, iso: &str) -> bool {
        self.sim_country.as_deref() == Some(iso)
    }

    /// Exact, case-sensitive match on the network country.
    pub fn network_country_is(&self, iso: &str) -> bool {
        self.network_country.as_deref() == Some(iso)
    }
}

/// Carrier-defined emergency range text. GSM only; always `None` on CDMA.
pub fn carrier_emergency_range(device: &dyn DeviceIdentity, identity: &IdentityContext) -> Option<String> {
    match identity.phone_type {
        PhoneType::Cdma => None,
        PhoneType::Gsm => device
            .system_property(CARRIER_EMERGENCY_IDS_PROPERTY)
            .filter(|s| !s.is_empty()),
    }
}
