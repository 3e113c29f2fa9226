use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use cbcast_core::error::{CbError, Result};

use crate::host::{PhoneType, SubId};
use crate::policy::prefs::keys;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceProfile {
    pub version: u32,

    #[serde(default)]
    pub device: DeviceSection,

    /// Stored user preferences; missing keys read as their defaults.
    #[serde(default)]
    pub preferences: BTreeMap<String, bool>,

    #[serde(default)]
    pub subscriptions: SubscriptionSection,

    #[serde(default)]
    pub radio: RadioSection,
}

impl DeviceProfile {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CbError::UnsupportedVersion);
        }

        for key in self.preferences.keys() {
            if !keys::ALL.contains(&key.as_str()) {
                return Err(CbError::BadConfig(format!("unknown preference key: {key}")));
            }
        }

        self.device.validate()?;
        self.subscriptions.validate()?;

        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSection {
    #[serde(default)]
    pub phone_type: PhoneType,

    #[serde(default)]
    pub sim_country: Option<String>,

    #[serde(default)]
    pub network_country: Option<String>,

    #[serde(default)]
    pub show_brazil_settings: bool,

    #[serde(default)]
    pub force_disable_etws_cmas_test: bool,

    /// Value of `ro.cb.gsm.emergencyids`. Parsed leniently at evaluation time.
    #[serde(default)]
    pub carrier_emergency_ids: Option<String>,
}

impl DeviceSection {
    pub fn validate(&self) -> Result<()> {
        // Country matching is exact, so the profile must already be lowercase ISO.
        for (field, value) in [
            ("device.sim_country", &self.sim_country),
            ("device.network_country", &self.network_country),
        ] {
            if let Some(iso) = value {
                if iso.len() != 2 || !iso.bytes().all(|b| b.is_ascii_lowercase()) {
                    return Err(CbError::BadConfig(format!(
                        "{field} must be a lowercase two-letter ISO code (got {iso:?})"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionSection {
    #[serde(default)]
    pub active: Vec<SubId>,

    #[serde(default)]
    pub default_sms: Option<SubId>,

    #[serde(default)]
    pub default_data: Option<SubId>,
}

impl SubscriptionSection {
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for id in &self.active {
            if !seen.insert(*id) {
                return Err(CbError::BadConfig(format!(
                    "subscriptions.active lists {id} more than once"
                )));
            }
        }
        Ok(())
    }
}

/// Simulated radio behaviour.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadioSection {
    /// Subscriptions whose radio rejects every directive.
    #[serde(default)]
    pub fail_subs: Vec<SubId>,

    /// Active subscriptions with no radio at all.
    #[serde(default)]
    pub missing_subs: Vec<SubId>,

    /// The no-SIM default radio rejects every directive.
    #[serde(default)]
    pub fail_default: bool,
}
