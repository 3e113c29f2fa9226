//! Host collaborator interfaces.
//!
//! The configuration service never talks to a modem, a settings store, or a
//! telephony stack directly. Hosts implement these traits; `profile` provides
//! an implementation backed by a YAML device profile.

pub mod profile;

use serde::Deserialize;

use cbcast_core::channel::{MessageId, RanType};

pub use profile::{ProfileHost, RecordingRadio};

/// Logical SIM/line identity. Opaque to this crate.
pub type SubId = i32;

/// Phone technology family reported by the telephony stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    #[default]
    Gsm,
    Cdma,
}

/// Named boolean user preferences.
pub trait PreferenceSource: Send + Sync {
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

/// Device, SIM and carrier identity.
pub trait DeviceIdentity: Send + Sync {
    /// Lowercase ISO country of the SIM, if known.
    fn sim_country_iso(&self) -> Option<String>;
    /// Lowercase ISO country of the serving network, if known.
    fn network_country_iso(&self) -> Option<String>;
    fn phone_type(&self) -> PhoneType;
    /// Device resource flag forcing the Brazil channel 50 setting.
    fn show_brazil_settings(&self) -> bool;
    /// Device policy forcing ETWS/CMAS test alerts off.
    fn etws_cmas_test_forced_disabled(&self) -> bool;
    fn system_property(&self, name: &str) -> Option<String>;
}

/// Cell broadcast range control for one subscription's radio.
///
/// Both calls return `false` on failure. Ranges are validated before they
/// reach the radio.
pub trait RadioControl: Send + Sync {
    fn enable_range(&self, start: MessageId, end: MessageId, ran: RanType) -> bool;
    fn disable_range(&self, start: MessageId, end: MessageId, ran: RanType) -> bool;
}

/// Active subscriptions and their radios.
pub trait SubscriptionSource: Send + Sync {
    /// Active subscription ids; `None` when the subscription service is unavailable.
    fn active_subscription_ids(&self) -> Option<Vec<SubId>>;
    fn default_sms_sub_id(&self) -> Option<SubId>;
    fn default_data_sub_id(&self) -> Option<SubId>;
    fn radio_for(&self, sub_id: SubId) -> Option<&dyn RadioControl>;
    /// Radio used when no SIM is present.
    fn default_radio(&self) -> Option<&dyn RadioControl>;
}
